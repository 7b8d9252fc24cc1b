//! Symbol buffer for the character currently being entered.
//!
//! The buffer collects dots and dashes until the user commits. A commit always
//! empties it, whether or not the sequence decoded to anything, so a bad
//! sequence never leaks into the next character.

use crate::symbol::{Symbol, SymbolSequence};
use crate::tables::{DecodeTables, Decoded};

/// Pending symbol sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolBuffer {
    pending: SymbolSequence,
}

impl SymbolBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a symbol to the pending sequence.
    pub fn append(&mut self, symbol: Symbol) {
        self.pending.push(symbol);
    }

    /// Decode the pending sequence, then clear it unconditionally.
    pub fn commit_and_reset(&mut self, tables: &DecodeTables) -> Decoded {
        let decoded = tables.decode(&self.pending);
        self.pending.clear();
        decoded
    }

    /// Drop the pending sequence without decoding it.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn sequence(&self) -> &SymbolSequence {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
