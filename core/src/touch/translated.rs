//! Committed tokens of the active field.

/// Ordered list of committed tokens.
///
/// The rendered text is the concatenation of the tokens in entry order.
/// Deletion works per token, not per byte, which matters once a token is
/// longer than one character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedBuffer {
    tokens: Vec<String>,
}

impl TranslatedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Remove and return the most recent token.
    pub fn pop(&mut self) -> Option<String> {
        self.tokens.pop()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Joined text of every token.
    pub fn text(&self) -> String {
        self.tokens.concat()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
