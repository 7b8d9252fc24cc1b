//! Submit prompt editor.

use super::{Editor, EditorResult, Effect};
use crate::phrases::{Announcement, Phrase};
use crate::touch::gesture::GestureEvent;
use crate::touch::session::{Mode, SessionState};

/// Editor for the submit confirmation reached past the last field.
///
/// Swipe right submits, swipe left cancels. Everything else is ignored and
/// the prompt stays open.
#[derive(Debug, Clone, Default)]
pub struct PromptEditor;

impl PromptEditor {
    pub fn new() -> Self {
        Self
    }
}

impl Editor for PromptEditor {
    fn process_gesture(
        &mut self,
        event: GestureEvent,
        _session: &mut SessionState,
        effects: &mut Vec<Effect>,
    ) -> EditorResult {
        match event {
            GestureEvent::SwipeLeft => {
                effects.push(Effect::Announce(Announcement::Phrase(
                    Phrase::StayOnCurrentPage,
                )));
                EditorResult::ModeSwitch(Mode::Entry)
            }
            GestureEvent::SwipeRight => {
                effects.push(Effect::Announce(Announcement::Phrase(Phrase::SubmitForm)));
                effects.push(Effect::SubmitForm);
                EditorResult::ModeSwitch(Mode::Entry)
            }
            _ => EditorResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "submit-prompt"
    }

    fn can_handle(&self, event: GestureEvent) -> bool {
        matches!(event, GestureEvent::SwipeLeft | GestureEvent::SwipeRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_submits() {
        let mut editor = PromptEditor::new();
        let mut session = SessionState::new(2);
        let mut effects = Vec::new();
        let result = editor.process_gesture(GestureEvent::SwipeRight, &mut session, &mut effects);
        assert_eq!(result, EditorResult::ModeSwitch(Mode::Entry));
        assert_eq!(
            effects,
            vec![
                Effect::Announce(Announcement::Phrase(Phrase::SubmitForm)),
                Effect::SubmitForm,
            ]
        );
    }

    #[test]
    fn test_cancel_does_not_submit() {
        let mut editor = PromptEditor::new();
        let mut session = SessionState::new(2);
        let mut effects = Vec::new();
        editor.process_gesture(GestureEvent::SwipeLeft, &mut session, &mut effects);
        assert!(!effects.contains(&Effect::SubmitForm));
    }

    #[test]
    fn test_other_gestures_keep_prompt_open() {
        let mut editor = PromptEditor::new();
        let mut session = SessionState::new(2);
        for event in GestureEvent::ALL {
            if editor.can_handle(event) {
                continue;
            }
            let mut effects = Vec::new();
            let result = editor.process_gesture(event, &mut session, &mut effects);
            assert_eq!(result, EditorResult::Ignored);
            assert!(effects.is_empty());
        }
    }
}
