//! Error type for the edges of the crate.
//!
//! A running session never fails: every user-facing problem (unrecognized
//! code, field boundaries, empty deletions) is reported through speech. The
//! errors here cover configuration files and the parsing of gestures and
//! symbols coming from outside the process.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// A gesture name or code outside the seven known kinds.
    #[error("unknown gesture: {0:?}")]
    UnknownGesture(String),

    /// A character that is neither `.` nor `-` in a symbol sequence.
    #[error("invalid morse symbol: {0:?}")]
    InvalidSymbol(char),
}

pub type Result<T> = std::result::Result<T, MorseError>;
