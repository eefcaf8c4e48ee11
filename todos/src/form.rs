//! Input form and the dual-purpose submit control.
//!
//! The submit button is either adding a new item or updating an existing
//! one. `Adding -> Editing` happens on an edit click; `Editing -> Adding`
//! on a successful submit or a reset. There are no other transitions.

use crate::error::TodoError;
use crate::item::TodoId;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitMode {
    #[default]
    Adding,
    Editing(TodoId),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub input: String,
    pub mode: SubmitMode,
}

impl FormState {
    /// Load `text` into the input and target `id` for the next submit.
    pub fn begin_edit(&mut self, id: TodoId, text: &str) {
        text.clone_into(&mut self.input);
        self.mode = SubmitMode::Editing(id);
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.mode = SubmitMode::Adding;
    }

    #[must_use]
    pub fn editing(&self) -> Option<TodoId> {
        match self.mode {
            SubmitMode::Adding => None,
            SubmitMode::Editing(id) => Some(id),
        }
    }

    /// Trimmed input, rejecting blank text.
    ///
    /// # Errors
    ///
    /// [`TodoError::EmptyText`] when nothing but whitespace was entered.
    pub fn validated_text(&self) -> Result<String, TodoError> {
        let text = self.input.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }
        Ok(text.to_owned())
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self.mode {
            SubmitMode::Adding => "Add",
            SubmitMode::Editing(_) => "Update",
        }
    }

    #[must_use]
    pub fn button_class(&self) -> &'static str {
        match self.mode {
            SubmitMode::Adding => "btn btn-primary",
            SubmitMode::Editing(_) => "btn btn-warning",
        }
    }
}
