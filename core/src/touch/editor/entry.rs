//! Entry editor: composing symbols and committing characters.

use super::{Editor, EditorResult, Effect, ResultView};
use crate::phrases::{Announcement, Phrase};
use crate::symbol::Symbol;
use crate::tables::{DecodeTables, Decoded};
use crate::touch::gesture::GestureEvent;
use crate::touch::session::{Mode, SessionState};

/// Editor for the default mode.
///
/// Tap and swipe-right compose a dot and a dash, swipe-down commits the
/// pending sequence, swipe-left deletes the last committed token and
/// double-tap reads the field back. A long press opens the menu.
#[derive(Debug, Clone)]
pub struct EntryEditor {
    tables: &'static DecodeTables,
}

impl EntryEditor {
    pub fn new(tables: &'static DecodeTables) -> Self {
        Self { tables }
    }

    fn compose(&self, symbol: Symbol, session: &mut SessionState, effects: &mut Vec<Effect>) {
        session.pending_mut().append(symbol);
        let phrase = match symbol {
            Symbol::Dot => Phrase::Dot,
            Symbol::Dash => Phrase::Dash,
        };
        effects.push(Effect::Announce(Announcement::Phrase(phrase)));
    }

    fn commit(&self, session: &mut SessionState, effects: &mut Vec<Effect>) {
        match session.pending_mut().commit_and_reset(self.tables) {
            Decoded::Token(token) => {
                tracing::debug!(token = token.text, kind = token.kind.as_str(), "committed");
                session.translated_mut().push(token.text);
                effects.push(Effect::UpdateField(session.translated().text()));
                effects.push(Effect::Announce(Announcement::Text(token.text.to_string())));
                effects.push(Effect::ShowResult(ResultView::Token(token.text.to_string())));
            }
            Decoded::Unrecognized => {
                tracing::debug!("unrecognized sequence");
                effects.push(Effect::Announce(Announcement::Phrase(Phrase::Unrecognized)));
                effects.push(Effect::ShowResult(ResultView::Unrecognized));
            }
        }
    }

    fn delete_last(&self, session: &mut SessionState, effects: &mut Vec<Effect>) -> EditorResult {
        let Some(removed) = session.translated_mut().pop() else {
            return EditorResult::Ignored;
        };
        effects.push(Effect::Announce(Announcement::Deletion(removed)));
        effects.push(Effect::UpdateField(session.translated().text()));
        effects.push(Effect::ShowResult(ResultView::Cleared));
        EditorResult::Handled
    }

    fn read_back(&self, session: &mut SessionState, effects: &mut Vec<Effect>) {
        let announcement = if session.translated().is_empty() {
            Announcement::Phrase(Phrase::Empty)
        } else {
            Announcement::Text(session.translated().text())
        };
        effects.push(Effect::Announce(announcement));
        session.pending_mut().clear();
    }
}

impl Editor for EntryEditor {
    fn process_gesture(
        &mut self,
        event: GestureEvent,
        session: &mut SessionState,
        effects: &mut Vec<Effect>,
    ) -> EditorResult {
        match event {
            GestureEvent::Tap => {
                self.compose(Symbol::Dot, session, effects);
                EditorResult::Handled
            }
            GestureEvent::SwipeRight => {
                self.compose(Symbol::Dash, session, effects);
                EditorResult::Handled
            }
            GestureEvent::SwipeDown => {
                self.commit(session, effects);
                EditorResult::Handled
            }
            GestureEvent::SwipeLeft => self.delete_last(session, effects),
            GestureEvent::DoubleTap => {
                self.read_back(session, effects);
                EditorResult::Handled
            }
            GestureEvent::LongPress => {
                effects.push(Effect::Announce(Announcement::Phrase(Phrase::OpenMenu)));
                EditorResult::ModeSwitch(Mode::MenuOpen)
            }
            GestureEvent::SwipeUp => EditorResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "entry"
    }

    fn can_handle(&self, event: GestureEvent) -> bool {
        event != GestureEvent::SwipeUp
    }
}
