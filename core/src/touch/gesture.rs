//! Gesture events and the raw-gesture classifier.
//!
//! The session only ever sees the seven `GestureEvent` kinds. Hosts that get
//! individual taps from their platform run them through `GestureClassifier`,
//! which folds two taps inside the double-tap window into one `DoubleTap` and
//! holds a lone tap back until the window has passed.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::MorseError;

/// Default double-tap window.
pub const DEFAULT_DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Smallest configurable double-tap window.
pub const MIN_DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(10);

/// Classified gesture, the only input the session accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureEvent {
    Tap,
    DoubleTap,
    LongPress,
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
}

impl GestureEvent {
    pub const ALL: [GestureEvent; 7] = [
        Self::Tap,
        Self::DoubleTap,
        Self::LongPress,
        Self::SwipeLeft,
        Self::SwipeRight,
        Self::SwipeUp,
        Self::SwipeDown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::DoubleTap => "double-tap",
            Self::LongPress => "long-press",
            Self::SwipeLeft => "swipe-left",
            Self::SwipeRight => "swipe-right",
            Self::SwipeUp => "swipe-up",
            Self::SwipeDown => "swipe-down",
        }
    }

    /// Decode a numeric platform code (0-6, in `ALL` order).
    ///
    /// Any other code is a classifier bug and is rejected.
    pub fn from_code(code: u8) -> Result<Self, MorseError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| MorseError::UnknownGesture(format!("code {}", code)))
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Tap => 0,
            Self::DoubleTap => 1,
            Self::LongPress => 2,
            Self::SwipeLeft => 3,
            Self::SwipeRight => 4,
            Self::SwipeUp => 5,
            Self::SwipeDown => 6,
        }
    }
}

impl fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GestureEvent {
    type Err = MorseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|event| event.name() == s)
            .ok_or_else(|| MorseError::UnknownGesture(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Gesture as reported by the platform, before tap disambiguation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawGesture {
    Tap,
    LongPress,
    Swipe(SwipeDirection),
    /// Anything else the platform recognized (pinch, rotation, ...). Dropped.
    Unrecognized(String),
}

/// Turns raw gestures into `GestureEvent`s.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    window: Duration,
    pending_tap: Option<Instant>,
}

impl GestureClassifier {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending_tap: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Whether a tap is being held back waiting for a possible second tap.
    pub fn has_pending_tap(&self) -> bool {
        self.pending_tap.is_some()
    }

    /// Feed one raw gesture observed at `at`, returning the events it decides.
    pub fn feed(&mut self, raw: RawGesture, at: Instant) -> Vec<GestureEvent> {
        let mut out = Vec::with_capacity(2);
        match raw {
            RawGesture::Tap => match self.pending_tap.take() {
                Some(first) if at.saturating_duration_since(first) <= self.window => {
                    out.push(GestureEvent::DoubleTap);
                }
                Some(_) => {
                    out.push(GestureEvent::Tap);
                    self.pending_tap = Some(at);
                }
                None => self.pending_tap = Some(at),
            },
            RawGesture::LongPress => {
                out.extend(self.flush());
                out.push(GestureEvent::LongPress);
            }
            RawGesture::Swipe(direction) => {
                out.extend(self.flush());
                out.push(match direction {
                    SwipeDirection::Left => GestureEvent::SwipeLeft,
                    SwipeDirection::Right => GestureEvent::SwipeRight,
                    SwipeDirection::Up => GestureEvent::SwipeUp,
                    SwipeDirection::Down => GestureEvent::SwipeDown,
                });
            }
            RawGesture::Unrecognized(name) => {
                tracing::trace!(gesture = %name, "dropping unrecognized gesture");
                out.extend(self.tick(at));
            }
        }
        out
    }

    /// Release a held tap once its double-tap window has passed.
    pub fn tick(&mut self, now: Instant) -> Option<GestureEvent> {
        match self.pending_tap {
            Some(first) if now.saturating_duration_since(first) > self.window => self.flush(),
            _ => None,
        }
    }

    /// Release a held tap immediately.
    pub fn flush(&mut self) -> Option<GestureEvent> {
        self.pending_tap.take().map(|_| GestureEvent::Tap)
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_TAP_WINDOW)
    }
}
