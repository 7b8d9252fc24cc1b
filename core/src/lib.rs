//! morsetouch-core
//!
//! Gesture-driven Morse text entry for people who cannot see the screen.
//! Seven discrete gestures compose dots and dashes, commit characters into
//! form fields and navigate between fields, with every action confirmed by
//! spoken feedback.
//!
//! Public API:
//! - `MorseTouch` - Session controller: `process_gesture()` plus read accessors
//! - `GestureEvent` / `GestureClassifier` - Classified events and tap disambiguation
//! - `DecodeTables` - Fixed alphabetic, numeric and special code tables
//! - `SpeechSink` / `SpeechQueue` / `HostPorts` - Everything the host provides
//! - `Phrasebook` - Spoken phrases, overridable from configuration
//! - `Config` - Configuration loaded from TOML
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod error;
pub use error::{MorseError, Result};

pub mod symbol;
pub use symbol::{Symbol, SymbolSequence};

pub mod tables;
pub use tables::{DecodeTables, Decoded, TableKind, Token};

pub mod phrases;
pub use phrases::{Announcement, Phrase, Phrasebook};

pub mod ports;
pub use ports::{HostPorts, SpeechQueue, SpeechSink, Utterance};

pub mod form;
pub use form::{Button, Field, Form};

pub mod touch;
pub use touch::{
    GestureClassifier, GestureEvent, GestureResult, Mode, MorseContext, MorseTouch, RawGesture,
    SessionState, SwipeDirection,
};

/// Session configuration.
///
/// Every key is optional in the TOML file; missing keys keep their defaults.
///
/// ```toml
/// double_tap_window_ms = 250
/// welcome = "login page"
///
/// [phrases]
/// delete = "remove"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum gap between two taps folded into one double-tap
    pub double_tap_window_ms: u64,

    /// Spoken once when the session opens, before the first field's name
    pub welcome: Option<String>,

    /// Whether hosts should show the result labels
    pub show_result_view: bool,

    /// Spoken phrases
    pub phrases: Phrasebook,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            double_tap_window_ms: touch::DEFAULT_DOUBLE_TAP_WINDOW.as_millis() as u64,
            welcome: None,
            show_result_view: true,
            phrases: Phrasebook::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Double-tap window, never below `MIN_DOUBLE_TAP_WINDOW`.
    ///
    /// Hosts also poll the classifier at this interval, so a zero window
    /// would spin.
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms).max(touch::MIN_DOUBLE_TAP_WINDOW)
    }

    /// Classifier using this configuration's double-tap window.
    pub fn classifier(&self) -> GestureClassifier {
        GestureClassifier::new(self.double_tap_window())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.double_tap_window_ms, 300);
        assert_eq!(config.double_tap_window(), Duration::from_millis(300));
        assert!(config.show_result_view);
        assert!(config.welcome.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            welcome = "hello"

            [phrases]
            dot = "di"
            "#,
        )
        .unwrap();
        assert_eq!(config.welcome.as_deref(), Some("hello"));
        assert_eq!(config.phrases.dot, "di");
        assert_eq!(config.phrases.dash, "dash");
        assert_eq!(config.double_tap_window_ms, 300);
    }

    #[test]
    fn test_toml_string_round_trip() {
        let config = Config {
            double_tap_window_ms: 200,
            welcome: Some("login".to_string()),
            show_result_view: false,
            ..Config::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::from_toml_str("double_tap_window_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, MorseError::ConfigParse(_)));
    }

    #[test]
    fn test_classifier_uses_window() {
        let config = Config {
            double_tap_window_ms: 120,
            ..Config::default()
        };
        assert_eq!(config.classifier().window(), Duration::from_millis(120));
    }

    #[test]
    fn test_zero_window_is_clamped() {
        let config = Config::from_toml_str("double_tap_window_ms = 0").unwrap();
        assert_eq!(config.double_tap_window_ms, 0);
        assert_eq!(config.double_tap_window(), touch::MIN_DOUBLE_TAP_WINDOW);
        assert_eq!(config.classifier().window(), Duration::from_millis(10));
    }
}
