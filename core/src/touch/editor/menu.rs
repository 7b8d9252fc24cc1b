//! Menu editor: field navigation and back navigation.

use super::{Editor, EditorResult, Effect};
use crate::phrases::{Announcement, Phrase};
use crate::touch::gesture::GestureEvent;
use crate::touch::session::{Mode, SessionState};

/// Editor for the central menu opened by a long press.
#[derive(Debug, Clone)]
pub struct MenuEditor {
    field_names: Vec<String>,
}

impl MenuEditor {
    pub fn new(field_names: Vec<String>) -> Self {
        Self { field_names }
    }

    pub fn field_count(&self) -> usize {
        self.field_names.len()
    }

    /// Phrase spoken when there is nowhere to move, for 0 or 1 fields.
    fn degenerate_phrase(&self) -> Option<Phrase> {
        match self.field_names.len() {
            0 => Some(Phrase::NoField),
            1 => Some(Phrase::OnlySingleField),
            _ => None,
        }
    }

    fn move_to(&self, index: usize, session: &mut SessionState, effects: &mut Vec<Effect>) {
        session.set_active_field(index);
        let name = self.field_names[index].clone();
        effects.push(Effect::Announce(Announcement::FieldMove(name)));
    }

    fn next_field(&self, session: &mut SessionState, effects: &mut Vec<Effect>) -> EditorResult {
        if let Some(phrase) = self.degenerate_phrase() {
            effects.push(Effect::Announce(Announcement::Phrase(phrase)));
            return EditorResult::ModeSwitch(Mode::Entry);
        }

        let current = session.active_field().unwrap_or(0);
        if current + 1 >= self.field_names.len() {
            effects.push(Effect::Announce(Announcement::Phrase(Phrase::LastField)));
            effects.push(Effect::Announce(Announcement::Phrase(Phrase::SubmitQuestion)));
            return EditorResult::ModeSwitch(Mode::SubmitPrompt);
        }

        self.move_to(current + 1, session, effects);
        EditorResult::ModeSwitch(Mode::Entry)
    }

    fn previous_field(
        &self,
        session: &mut SessionState,
        effects: &mut Vec<Effect>,
    ) -> EditorResult {
        if let Some(phrase) = self.degenerate_phrase() {
            effects.push(Effect::Announce(Announcement::Phrase(phrase)));
            return EditorResult::ModeSwitch(Mode::Entry);
        }

        match session.active_field() {
            Some(current) if current > 0 => self.move_to(current - 1, session, effects),
            _ => effects.push(Effect::Announce(Announcement::Phrase(Phrase::FirstField))),
        }
        EditorResult::ModeSwitch(Mode::Entry)
    }
}

impl Editor for MenuEditor {
    fn process_gesture(
        &mut self,
        event: GestureEvent,
        session: &mut SessionState,
        effects: &mut Vec<Effect>,
    ) -> EditorResult {
        match event {
            GestureEvent::Tap => {
                effects.push(Effect::Announce(Announcement::Phrase(Phrase::CloseMenu)));
                EditorResult::ModeSwitch(Mode::Entry)
            }
            GestureEvent::SwipeLeft => {
                effects.push(Effect::Announce(Announcement::Phrase(
                    Phrase::BackToPreviousPage,
                )));
                effects.push(Effect::NavigateBack);
                EditorResult::ModeSwitch(Mode::Entry)
            }
            GestureEvent::SwipeDown => self.next_field(session, effects),
            GestureEvent::SwipeUp => self.previous_field(session, effects),
            GestureEvent::DoubleTap | GestureEvent::SwipeRight | GestureEvent::LongPress => {
                EditorResult::Ignored
            }
        }
    }

    fn name(&self) -> &'static str {
        "menu"
    }

    fn can_handle(&self, event: GestureEvent) -> bool {
        matches!(
            event,
            GestureEvent::Tap
                | GestureEvent::SwipeLeft
                | GestureEvent::SwipeDown
                | GestureEvent::SwipeUp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("field{}", i)).collect()
    }

    fn menu_session(n: usize) -> (MenuEditor, SessionState) {
        let mut session = SessionState::new(n);
        session.set_mode(Mode::MenuOpen);
        (MenuEditor::new(names(n)), session)
    }

    #[test]
    fn test_next_field_moves_and_clears_buffer() {
        let (mut editor, mut session) = menu_session(3);
        session.translated_mut().push("a");
        let mut effects = Vec::new();

        let result = editor.process_gesture(GestureEvent::SwipeDown, &mut session, &mut effects);
        assert_eq!(result, EditorResult::ModeSwitch(Mode::Entry));
        assert_eq!(session.active_field(), Some(1));
        assert!(session.translated().is_empty());
        assert_eq!(
            effects,
            vec![Effect::Announce(Announcement::FieldMove("field1".to_string()))]
        );
    }

    #[test]
    fn test_next_field_on_last_opens_prompt() {
        let (mut editor, mut session) = menu_session(2);
        session.set_active_field(1);
        let mut effects = Vec::new();

        let result = editor.process_gesture(GestureEvent::SwipeDown, &mut session, &mut effects);
        assert_eq!(result, EditorResult::ModeSwitch(Mode::SubmitPrompt));
        assert_eq!(session.active_field(), Some(1));
        assert_eq!(
            effects,
            vec![
                Effect::Announce(Announcement::Phrase(Phrase::LastField)),
                Effect::Announce(Announcement::Phrase(Phrase::SubmitQuestion)),
            ]
        );
    }

    #[test]
    fn test_single_and_empty_forms() {
        for (count, phrase) in [(1, Phrase::OnlySingleField), (0, Phrase::NoField)] {
            for event in [GestureEvent::SwipeDown, GestureEvent::SwipeUp] {
                let (mut editor, mut session) = menu_session(count);
                let mut effects = Vec::new();
                let result = editor.process_gesture(event, &mut session, &mut effects);
                assert_eq!(result, EditorResult::ModeSwitch(Mode::Entry));
                assert_eq!(effects, vec![Effect::Announce(Announcement::Phrase(phrase))]);
            }
        }
    }

    #[test]
    fn test_previous_field_at_first() {
        let (mut editor, mut session) = menu_session(2);
        let mut effects = Vec::new();
        editor.process_gesture(GestureEvent::SwipeUp, &mut session, &mut effects);
        assert_eq!(session.active_field(), Some(0));
        assert_eq!(
            effects,
            vec![Effect::Announce(Announcement::Phrase(Phrase::FirstField))]
        );
    }

    #[test]
    fn test_previous_field_reuses_move_phrase() {
        let (mut editor, mut session) = menu_session(3);
        session.set_active_field(2);
        let mut effects = Vec::new();
        editor.process_gesture(GestureEvent::SwipeUp, &mut session, &mut effects);
        assert_eq!(session.active_field(), Some(1));
        assert_eq!(
            effects,
            vec![Effect::Announce(Announcement::FieldMove("field1".to_string()))]
        );
    }

    #[test]
    fn test_swipe_left_navigates_back() {
        let (mut editor, mut session) = menu_session(1);
        let mut effects = Vec::new();
        editor.process_gesture(GestureEvent::SwipeLeft, &mut session, &mut effects);
        assert_eq!(effects.last(), Some(&Effect::NavigateBack));
    }

    #[test]
    fn test_unmapped_gestures_ignored() {
        let (mut editor, mut session) = menu_session(2);
        for event in [
            GestureEvent::DoubleTap,
            GestureEvent::SwipeRight,
            GestureEvent::LongPress,
        ] {
            let mut effects = Vec::new();
            assert!(!editor.can_handle(event));
            let result = editor.process_gesture(event, &mut session, &mut effects);
            assert_eq!(result, EditorResult::Ignored);
            assert!(effects.is_empty());
        }
    }
}
