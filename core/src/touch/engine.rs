//! Session controller with gesture routing.
//!
//! `MorseTouch` owns the session state and the three mode editors. Each call
//! to `process_gesture()` routes the event to the editor for the current
//! mode, applies the effects the editor requested (speech, host callbacks,
//! result labels) in order, and refreshes the `MorseContext` the host reads
//! to redraw.

use std::sync::Arc;

use super::context::MorseContext;
use super::editor::{
    Editor, EditorResult, Effect, EntryEditor, MenuEditor, PromptEditor, ResultView,
};
use super::gesture::GestureEvent;
use super::session::{Mode, SessionState};
use crate::form::Form;
use crate::phrases::{Announcement, Phrasebook};
use crate::ports::{HostPorts, SpeechSink};
use crate::tables::DecodeTables;
use crate::Config;

/// Shown in the result label after a deletion.
const CLEARED_RESULT: &str = "_";

/// Result of processing a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResult {
    /// The gesture changed the session or produced feedback
    Handled,
    /// The gesture means nothing in the current mode
    Ignored,
}

/// Morse touch session controller.
///
/// `H` is the host's handle type for field targets; the controller only
/// passes it back through `HostPorts::on_update_field`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use morsetouch_core::{Config, Field, Form, GestureEvent, HostPorts, MorseTouch, SpeechQueue};
///
/// let speech = Arc::new(SpeechQueue::new());
/// let form = Form::new(vec![Field::new("username", 0u32)]);
/// let mut session = MorseTouch::open(form, speech.clone(), HostPorts::new(), Config::default());
///
/// session.process_gesture(GestureEvent::Tap);
/// session.process_gesture(GestureEvent::SwipeRight);
/// session.process_gesture(GestureEvent::SwipeDown);
///
/// assert_eq!(session.translated_text(), "a");
/// assert_eq!(speech.texts().last().map(String::as_str), Some("a"));
/// ```
pub struct MorseTouch<H> {
    /// Symbol entry editor
    entry_editor: EntryEditor,

    /// Menu editor
    menu_editor: MenuEditor,

    /// Submit prompt editor
    prompt_editor: PromptEditor,

    form: Form<H>,
    session: SessionState,
    context: MorseContext,
    speech: Arc<dyn SpeechSink>,
    ports: HostPorts<H>,
    config: Config,
}

impl<H> MorseTouch<H> {
    /// Open a session on `form` and speak the greeting.
    ///
    /// The welcome phrase is spoken first when configured, followed by the
    /// name of the first field when the form has one.
    pub fn open(
        form: Form<H>,
        speech: Arc<dyn SpeechSink>,
        ports: HostPorts<H>,
        config: Config,
    ) -> Self {
        let field_names = form.fields().iter().map(|f| f.name.clone()).collect();
        let mut touch = Self {
            entry_editor: EntryEditor::new(DecodeTables::standard()),
            menu_editor: MenuEditor::new(field_names),
            prompt_editor: PromptEditor::new(),
            session: SessionState::new(form.len()),
            context: MorseContext::new(),
            form,
            speech,
            ports,
            config,
        };

        tracing::debug!(fields = touch.form.len(), "opening session");

        if let Some(welcome) = touch.config.welcome.clone() {
            touch.announce(&Announcement::Text(welcome));
        }
        if let Some(first) = touch.form.field(0) {
            let name = first.name.clone();
            touch.announce(&Announcement::CurrentField(name));
        }
        touch.refresh_context(None);
        touch
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn form(&self) -> &Form<H> {
        &self.form
    }

    /// Get a reference to the context for redrawing the host UI.
    pub fn context(&self) -> &MorseContext {
        &self.context
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phrasebook(&self) -> &Phrasebook {
        &self.config.phrases
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Joined text of the active field.
    pub fn translated_text(&self) -> String {
        self.session.translated().text()
    }

    /// Process a gesture and update session state.
    ///
    /// This is the main entry point. Speech and host callbacks for the
    /// gesture have all been issued by the time it returns; the host should
    /// then read `context()` to redraw.
    pub fn process_gesture(&mut self, event: GestureEvent) -> GestureResult {
        let before = self.session.mode();
        let field_before = self.session.active_field();
        let mut effects = Vec::new();

        let editor: &mut dyn Editor = match before {
            Mode::Entry => &mut self.entry_editor,
            Mode::MenuOpen => &mut self.menu_editor,
            Mode::SubmitPrompt => &mut self.prompt_editor,
        };

        if !editor.can_handle(event) {
            tracing::debug!(%event, editor = editor.name(), "gesture not accepted");
            return GestureResult::Ignored;
        }

        let result = editor.process_gesture(event, &mut self.session, &mut effects);
        if result == EditorResult::Ignored {
            tracing::debug!(%event, mode = before.as_str(), "gesture ignored");
            return GestureResult::Ignored;
        }
        if let EditorResult::ModeSwitch(mode) = result {
            self.session.set_mode(mode);
        }

        tracing::debug!(
            %event,
            from = before.as_str(),
            to = self.session.mode().as_str(),
            "gesture handled"
        );

        for effect in effects {
            self.apply(effect);
        }
        self.refresh_context(field_before);

        GestureResult::Handled
    }

    /// Process a numeric gesture code from the platform classifier.
    ///
    /// Codes outside the seven gesture kinds are rejected without touching
    /// the session.
    pub fn process_code(&mut self, code: u8) -> crate::Result<GestureResult> {
        let event = GestureEvent::from_code(code)?;
        Ok(self.process_gesture(event))
    }

    fn apply(&mut self, effect: Effect) {
        tracing::trace!(?effect, "applying effect");
        match effect {
            Effect::Announce(announcement) => self.announce(&announcement),
            Effect::UpdateField(text) => {
                let field = self.session.active_field().and_then(|i| self.form.field(i));
                if let Some(field) = field {
                    self.ports.update_field(&field.target, &text);
                }
            }
            Effect::ShowResult(view) => {
                self.context.result_text = match view {
                    ResultView::Token(token) => token,
                    ResultView::Unrecognized => self.config.phrases.unrecognized.clone(),
                    ResultView::Cleared => CLEARED_RESULT.to_string(),
                };
            }
            Effect::SubmitForm => self.ports.submit_form(),
            Effect::NavigateBack => self.ports.navigate_back(),
        }
    }

    fn announce(&self, announcement: &Announcement) {
        self.speech.enqueue(self.config.phrases.render(announcement));
    }

    fn refresh_context(&mut self, field_before: Option<usize>) {
        let active = self.session.active_field();
        if active != field_before {
            self.context.clear();
        }
        self.context.mode = self.session.mode();
        self.context.field_name = active
            .and_then(|i| self.form.field(i))
            .map(|f| f.name.clone());
        self.context.pending = self.session.pending().sequence().to_string();
        self.context.combined_text = self.session.translated().text();
        self.context.show_result_view = self.config.show_result_view;
    }
}
