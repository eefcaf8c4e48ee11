//! User-visible messages raised by list actions.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    InvalidInput,
}

impl Notice {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Added => "Added Successfully!",
            Self::Updated => "Updated Successfully!",
            Self::Deleted => "Deleted!",
            Self::InvalidInput => "Invalid Input",
        }
    }

    #[must_use]
    pub fn text(self) -> Option<&'static str> {
        match self {
            Self::InvalidInput => Some("Please enter your todo!"),
            Self::Added | Self::Updated | Self::Deleted => None,
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::InvalidInput => Severity::Error,
            Self::Added | Self::Updated | Self::Deleted => Severity::Success,
        }
    }
}

/// Wording of the delete confirmation dialog.
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub text: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

pub const DELETE_PROMPT: ConfirmPrompt = ConfirmPrompt {
    title: "Are you sure?",
    text: "This task will be deleted!",
    confirm_label: "Yes, delete it!",
    cancel_label: "Cancel",
};
