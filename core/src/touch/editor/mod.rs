//! Editor trait and implementations for the session modes.
//!
//! Each mode (entry, menu, submit prompt) has its own editor. Editors mutate
//! the session state and describe everything the host should see as a list
//! of `Effect`s; they never call the host themselves. The controller applies
//! the effects in the order they were pushed.

pub mod entry;
pub mod menu;
pub mod prompt;

pub use entry::EntryEditor;
pub use menu::MenuEditor;
pub use prompt::PromptEditor;

use super::gesture::GestureEvent;
use super::session::{Mode, SessionState};
use crate::phrases::Announcement;

/// What the result label should show after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Token(String),
    Unrecognized,
    /// Shown after a deletion.
    Cleared,
}

/// Host-visible side effect requested by an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Announce(Announcement),
    /// Push the active field's joined text to the host.
    UpdateField(String),
    ShowResult(ResultView),
    SubmitForm,
    NavigateBack,
}

/// Result of processing a gesture in an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorResult {
    /// Gesture handled, stay in the current mode
    Handled,

    /// Gesture handled, switch to the given mode
    ModeSwitch(Mode),

    /// Gesture means nothing in this mode
    Ignored,
}

/// Editor trait for handling gestures in one mode.
pub trait Editor {
    /// Process a gesture in this editor's mode.
    ///
    /// Effects pushed to `effects` are applied by the caller in order,
    /// after this method returns.
    fn process_gesture(
        &mut self,
        event: GestureEvent,
        session: &mut SessionState,
        effects: &mut Vec<Effect>,
    ) -> EditorResult;

    /// Name for logging.
    fn name(&self) -> &'static str;

    /// Whether the gesture has any meaning in this mode.
    fn can_handle(&self, _event: GestureEvent) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_result_equality() {
        assert_eq!(EditorResult::Handled, EditorResult::Handled);
        assert_eq!(
            EditorResult::ModeSwitch(Mode::Entry),
            EditorResult::ModeSwitch(Mode::Entry)
        );
        assert_ne!(
            EditorResult::ModeSwitch(Mode::Entry),
            EditorResult::ModeSwitch(Mode::MenuOpen)
        );
    }
}
