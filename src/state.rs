//! Shared client-side state handle.
//!
//! DESIGN
//! ======
//! The whole page state is one `TodoApp` inside one signal. Components read
//! it with `with` and mutate it with `update`; Leptos re-renders whatever
//! read the signal.

use leptos::prelude::RwSignal;
use todos::{TodoApp, TodoError};

use crate::util::storage::BrowserStorage;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

pub type TodoState = RwSignal<TodoApp<BrowserStorage>>;

/// Outcome of a UI action for logging purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    /// Expected rejection the user already sees as a notice.
    Rejected,
    /// Storage or addressing problem worth an error log.
    Fault,
}

/// Classify an action error.
#[must_use]
pub fn classify(err: &TodoError) -> Failure {
    match err {
        TodoError::EmptyText => Failure::Rejected,
        TodoError::IndexOutOfRange { .. } | TodoError::UnknownItem(_) | TodoError::Store(_) => Failure::Fault,
    }
}

/// Log a failed action. Successful results are dropped.
pub fn log_failure<T>(action: &str, result: Result<T, TodoError>) {
    let Err(err) = result else {
        return;
    };
    match classify(&err) {
        Failure::Rejected => log::debug!("{action}: {err}"),
        Failure::Fault => log::error!("{action} failed: {err}"),
    }
}
