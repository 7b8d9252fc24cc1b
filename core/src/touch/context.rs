//! Context for platform communication.
//!
//! `MorseContext` is a plain data container the controller refreshes after
//! every gesture. Hosts that draw something on screen (the result labels, a
//! mode indicator) read these fields; nothing in here feeds back into the
//! session.

use super::session::Mode;

/// Read model of the session for the host's UI.
///
/// # Fields
///
/// - `mode`: current interaction mode
/// - `field_name`: name of the active field, if the form has any
/// - `pending`: dot-dash text of the symbols entered so far
/// - `result_text`: last individual result: the committed token, the
///   unrecognized phrase, or `_` after a deletion
/// - `combined_text`: joined text of the active field
/// - `show_result_view`: whether the host should show the result labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorseContext {
    pub mode: Mode,
    pub field_name: Option<String>,
    pub pending: String,
    pub result_text: String,
    pub combined_text: String,
    pub show_result_view: bool,
}

impl MorseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result label as the host should display it, e.g. "result: a".
    pub fn result_label(&self, label: &str) -> String {
        format!("{}: {}", label, self.result_text)
    }

    /// Combined label as the host should display it, e.g. "combined result: ab".
    pub fn combined_label(&self, label: &str) -> String {
        format!("{}: {}", label, self.combined_text)
    }

    /// Clear per-field display state. The mode and visibility flag stay.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.result_text.clear();
        self.combined_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_include_text() {
        let context = MorseContext {
            result_text: "a".to_string(),
            combined_text: "ab".to_string(),
            ..MorseContext::default()
        };
        assert_eq!(context.result_label("result"), "result: a");
        assert_eq!(context.combined_label("combined result"), "combined result: ab");
    }

    #[test]
    fn test_clear_keeps_mode() {
        let mut context = MorseContext {
            mode: Mode::MenuOpen,
            pending: ".-".to_string(),
            combined_text: "x".to_string(),
            ..MorseContext::default()
        };
        context.clear();
        assert_eq!(context.mode, Mode::MenuOpen);
        assert!(context.pending.is_empty());
        assert!(context.combined_text.is_empty());
    }
}
