//! The boundary to the hosting UI.
//!
//! The submission controller never talks to a UI runtime; it drives whatever
//! implements [`FormSurface`]. Tests use an in-memory surface, the terminal
//! front end a real one.

use crate::field::Field;

/// A user-facing notification. The form only ever emits these two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Blocking error notification naming the problem.
    Error(String),
    /// Confirmation shown when every field passed.
    Success(String),
}

impl Notice {
    /// The message text, regardless of level.
    pub fn message(&self) -> &str {
        match self {
            Notice::Error(msg) | Notice::Success(msg) => msg,
        }
    }
}

/// Capabilities the hosting UI provides to the form core.
pub trait FormSurface {
    /// Read the currently displayed value of a field.
    fn value(&self, field: Field) -> String;

    /// Move input focus to a field, so the next keystroke targets it.
    fn focus(&mut self, field: Field);

    /// Show a notification to the user.
    fn notify(&mut self, notice: Notice);

    /// Reset every field to empty.
    fn clear_all(&mut self);
}
