//! Session state.
//!
//! `SessionState` holds everything that changes while the control is on
//! screen: the mode, the active field, the pending symbols and the committed
//! tokens of the active field. Only the controller and its editors mutate it;
//! hosts get shared references.

use super::symbol_buffer::SymbolBuffer;
use super::translated::TranslatedBuffer;

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Composing symbols and committing characters.
    #[default]
    Entry,
    /// Central menu opened by a long press.
    MenuOpen,
    /// Waiting for the user to confirm or cancel form submission.
    SubmitPrompt,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::MenuOpen => "menu",
            Self::SubmitPrompt => "submit-prompt",
        }
    }
}

/// Mutable state of one editing session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    mode: Mode,
    active_field: Option<usize>,
    pending: SymbolBuffer,
    translated: TranslatedBuffer,
}

impl SessionState {
    /// Fresh state for a form with `field_count` fields.
    pub fn new(field_count: usize) -> Self {
        Self {
            mode: Mode::Entry,
            active_field: (field_count > 0).then_some(0),
            pending: SymbolBuffer::new(),
            translated: TranslatedBuffer::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the active field, `None` when the form has no fields.
    pub fn active_field(&self) -> Option<usize> {
        self.active_field
    }

    pub fn pending(&self) -> &SymbolBuffer {
        &self.pending
    }

    pub fn translated(&self) -> &TranslatedBuffer {
        &self.translated
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn pending_mut(&mut self) -> &mut SymbolBuffer {
        &mut self.pending
    }

    pub(crate) fn translated_mut(&mut self) -> &mut TranslatedBuffer {
        &mut self.translated
    }

    /// Make `index` the active field. Pending symbols and the translated
    /// buffer belong to the previous field and are cleared.
    pub(crate) fn set_active_field(&mut self, index: usize) {
        self.active_field = Some(index);
        self.pending.clear();
        self.translated.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_in_entry() {
        let state = SessionState::new(3);
        assert_eq!(state.mode(), Mode::Entry);
        assert_eq!(state.active_field(), Some(0));
        assert!(state.pending().is_empty());
        assert!(state.translated().is_empty());
    }

    #[test]
    fn test_no_fields_means_no_active_field() {
        let state = SessionState::new(0);
        assert_eq!(state.active_field(), None);
    }

    #[test]
    fn test_changing_field_clears_translated_text() {
        let mut state = SessionState::new(2);
        state.translated_mut().push("a");
        state.pending_mut().append(crate::symbol::Symbol::Dash);
        state.set_active_field(1);
        assert_eq!(state.active_field(), Some(1));
        assert!(state.translated().is_empty());
        assert!(state.pending().is_empty());
    }
}
