//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `TodoState` signal from context and call one
//! `TodoApp` method per user action.

pub mod confirm_dialog;
pub mod dark_mode_toggle;
pub mod notice_popup;
pub mod pagination;
pub mod todo_form;
pub mod todo_list;
