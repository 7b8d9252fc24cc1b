//! morsetouch
//!
//! Terminal host for `morsetouch-core`: speech printed by a speaker thread,
//! a demo login form, and gesture scripts.

pub mod demo;
pub mod script;
pub mod speech;

pub use demo::{login_form, LoginHost, LoginState, LoginTarget};
pub use script::{encode_text, parse_gesture, parse_raw_line, parse_script, shorthand_char};
pub use speech::{ConsoleSpeech, Speaker};

use std::sync::Arc;

use morsetouch_core::{Config, GestureEvent, MorseTouch, SpeechSink};

/// Play a list of gestures against the demo login form.
///
/// Returns the session (for its context and buffers) along with the host.
pub fn run_script(
    events: &[GestureEvent],
    speech: Arc<dyn SpeechSink>,
    config: Config,
) -> (MorseTouch<LoginTarget>, LoginHost) {
    let host = LoginHost::new();
    let mut touch = MorseTouch::open(login_form(), speech, host.ports(), config);
    for &event in events {
        touch.process_gesture(event);
    }
    (touch, host)
}
