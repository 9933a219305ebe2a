//! In-memory form state backing the terminal UI.

use std::collections::HashMap;

use endereco_form::{Field, FormSurface, Notice, live_format};

/// Displayed values for the four fields, the focused field, and the last
/// notification. Implements [`FormSurface`] so the core controller can
/// drive it directly.
pub struct FormModel {
    inputs: HashMap<Field, String>,
    focused: Field,
    notice: Option<Notice>,
}

impl FormModel {
    pub fn new() -> Self {
        Self {
            inputs: HashMap::new(),
            focused: Field::Cep,
            notice: None,
        }
    }

    pub fn focused(&self) -> Field {
        self.focused
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Append a typed character to the focused field, then run its live
    /// formatter. Typing clears the previous notification.
    pub fn insert(&mut self, c: char) {
        self.inputs.entry(self.focused).or_default().push(c);
        self.notice = None;
        self.reformat();
    }

    /// Delete the last character of the focused field, then re-run its
    /// live formatter.
    pub fn backspace(&mut self) {
        if let Some(text) = self.inputs.get_mut(&self.focused) {
            text.pop();
        }
        self.notice = None;
        self.reformat();
    }

    /// Move focus to the next field in tab order.
    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    /// Move focus to the previous field in tab order.
    pub fn focus_prev(&mut self) {
        self.cycle_focus(Field::ALL.len() - 1);
    }

    fn cycle_focus(&mut self, step: usize) {
        let order = Field::ALL;
        let index = order
            .iter()
            .position(|field| *field == self.focused)
            .unwrap_or(0);
        self.focused = order[(index + step) % order.len()];
    }

    fn reformat(&mut self) {
        let current = self.value(self.focused);
        if let Some(formatted) = live_format(self.focused, &current) {
            self.inputs.insert(self.focused, formatted);
        }
    }
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSurface for FormModel {
    fn value(&self, field: Field) -> String {
        self.inputs.get(&field).cloned().unwrap_or_default()
    }

    fn focus(&mut self, field: Field) {
        self.focused = field;
    }

    fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    fn clear_all(&mut self) {
        self.inputs.clear();
    }
}
