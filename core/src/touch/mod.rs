//! Touch session components.
//!
//! ## Architecture
//!
//! - **Gesture**: the seven classified events, plus a classifier for hosts
//!   that only see raw taps
//! - **Symbol Buffer**: dots and dashes entered since the last commit
//! - **Translated Buffer**: committed tokens of the active field
//! - **Session**: mode, active field and both buffers
//! - **Context**: read model for the host UI
//! - **Editors**: one gesture handler per mode (entry, menu, submit prompt)
//! - **MorseTouch**: controller tying everything together
//!
//! ## Usage
//!
//! ```rust,ignore
//! use morsetouch_core::touch::{GestureEvent, MorseTouch};
//!
//! let mut touch = MorseTouch::open(form, speech, ports, config);
//! touch.process_gesture(GestureEvent::Tap);
//! touch.process_gesture(GestureEvent::SwipeDown);
//! println!("{}", touch.context().combined_text);
//! ```

pub mod context;
pub mod editor;
pub mod engine;
pub mod gesture;
pub mod session;
pub mod symbol_buffer;
pub mod translated;

pub use context::MorseContext;
pub use editor::{Editor, EditorResult, Effect, EntryEditor, MenuEditor, PromptEditor, ResultView};
pub use engine::{GestureResult, MorseTouch};
pub use gesture::{
    GestureClassifier, GestureEvent, RawGesture, SwipeDirection, DEFAULT_DOUBLE_TAP_WINDOW,
    MIN_DOUBLE_TAP_WINDOW,
};
pub use session::{Mode, SessionState};
pub use symbol_buffer::SymbolBuffer;
pub use translated::TranslatedBuffer;
