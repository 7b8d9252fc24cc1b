//! Gesture scripts.
//!
//! A script is whitespace-separated gestures, each either a kebab-case event
//! name (`swipe-down`) or a one-character shorthand:
//!
//! | char | gesture     |
//! |------|-------------|
//! | `.`  | tap         |
//! | `:`  | double-tap  |
//! | `*`  | long-press  |
//! | `<`  | swipe-left  |
//! | `-`  | swipe-right |
//! | `^`  | swipe-up    |
//! | `v`  | swipe-down  |
//!
//! `#` starts a comment running to the end of the line.

use anyhow::{bail, Context, Result};
use morsetouch_core::{DecodeTables, GestureEvent, RawGesture, Symbol, SwipeDirection};

fn shorthand(token: &str) -> Option<GestureEvent> {
    let event = match token {
        "." => GestureEvent::Tap,
        ":" => GestureEvent::DoubleTap,
        "*" => GestureEvent::LongPress,
        "<" => GestureEvent::SwipeLeft,
        "-" => GestureEvent::SwipeRight,
        "^" => GestureEvent::SwipeUp,
        "v" => GestureEvent::SwipeDown,
        _ => return None,
    };
    Some(event)
}

/// Shorthand character for an event.
pub fn shorthand_char(event: GestureEvent) -> char {
    match event {
        GestureEvent::Tap => '.',
        GestureEvent::DoubleTap => ':',
        GestureEvent::LongPress => '*',
        GestureEvent::SwipeLeft => '<',
        GestureEvent::SwipeRight => '-',
        GestureEvent::SwipeUp => '^',
        GestureEvent::SwipeDown => 'v',
    }
}

/// Parse one script token.
pub fn parse_gesture(token: &str) -> morsetouch_core::Result<GestureEvent> {
    match shorthand(token) {
        Some(event) => Ok(event),
        None => token.parse(),
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse a whole script. Errors name the offending line.
pub fn parse_script(text: &str) -> Result<Vec<GestureEvent>> {
    let mut events = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        for token in strip_comment(line).split_whitespace() {
            let event = parse_gesture(token)
                .with_context(|| format!("line {}: bad gesture {:?}", lineno + 1, token))?;
            events.push(event);
        }
    }
    Ok(events)
}

/// Parse one interactive line into raw gestures for the classifier.
///
/// `:` stands for two taps so the classifier sees a real double tap. Tokens
/// that name no gesture become `RawGesture::Unrecognized` and are dropped by
/// the classifier.
pub fn parse_raw_line(line: &str) -> Vec<RawGesture> {
    let mut raws = Vec::new();
    for token in strip_comment(line).split_whitespace() {
        match parse_gesture(token) {
            Ok(GestureEvent::Tap) => raws.push(RawGesture::Tap),
            Ok(GestureEvent::DoubleTap) => {
                raws.push(RawGesture::Tap);
                raws.push(RawGesture::Tap);
            }
            Ok(GestureEvent::LongPress) => raws.push(RawGesture::LongPress),
            Ok(GestureEvent::SwipeLeft) => raws.push(RawGesture::Swipe(SwipeDirection::Left)),
            Ok(GestureEvent::SwipeRight) => raws.push(RawGesture::Swipe(SwipeDirection::Right)),
            Ok(GestureEvent::SwipeUp) => raws.push(RawGesture::Swipe(SwipeDirection::Up)),
            Ok(GestureEvent::SwipeDown) => raws.push(RawGesture::Swipe(SwipeDirection::Down)),
            Err(_) => raws.push(RawGesture::Unrecognized(token.to_string())),
        }
    }
    raws
}

/// Gesture script that types `text` into the active field.
///
/// One line per character: its symbols followed by a commit. Letters are
/// folded to lowercase; anything without a code is an error.
pub fn encode_text(text: &str) -> Result<String> {
    let tables = DecodeTables::standard();
    let mut lines = Vec::new();
    for ch in text.chars() {
        let token = ch.to_lowercase().to_string();
        let Some(seq) = tables.encode(&token) else {
            bail!("no code for {:?}", ch);
        };
        let mut line: Vec<String> = seq
            .symbols()
            .iter()
            .map(|symbol| {
                let event = match symbol {
                    Symbol::Dot => GestureEvent::Tap,
                    Symbol::Dash => GestureEvent::SwipeRight,
                };
                shorthand_char(event).to_string()
            })
            .collect();
        line.push(shorthand_char(GestureEvent::SwipeDown).to_string());
        lines.push(format!("{}  # {}", line.join(" "), token));
    }
    Ok(lines.join("\n"))
}
