//! Page-level components.

pub mod todo_page;
