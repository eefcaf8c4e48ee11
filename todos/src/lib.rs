//! Todo list model shared by the browser UI and native tests.
//!
//! This crate owns everything that is not DOM glue: the persisted list,
//! page arithmetic, the add/update form state machine, the dark-mode
//! preference, and the [`app::TodoApp`] value that ties them together.
//! Storage is reached through [`storage::KeyValueStorage`] so the same code
//! runs against `window.localStorage` in the browser and an in-memory map in
//! tests.

pub mod app;
pub mod config;
pub mod dark_mode;
pub mod error;
pub mod form;
pub mod item;
pub mod notice;
pub mod page;
pub mod storage;
pub mod store;

pub use app::TodoApp;
pub use config::TodoConfig;
pub use error::{StoreError, TodoError};
pub use item::{TodoId, TodoItem};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::TodoStore;
