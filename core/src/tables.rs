//! Decode tables: symbol sequence → output token.
//!
//! Three disjoint tables are consulted in a fixed priority order (alphabetic,
//! numeric, special) and the first hit wins. Each table is a hash map keyed on
//! the sequence itself, so a decode is a handful of direct lookups no matter
//! how many entries the tables hold.
//!
//! The table contents are literal data and must not change: hosts rely on the
//! exact codes below.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::symbol::{Symbol, SymbolSequence};

/// Which decode table produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Alphabetic,
    Numeric,
    Special,
}

impl TableKind {
    /// Lookup priority, highest first.
    pub const ORDER: [TableKind; 3] = [Self::Alphabetic, Self::Numeric, Self::Special];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Numeric => "numeric",
            Self::Special => "special",
        }
    }
}

/// A decoded output token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: &'static str,
    pub kind: TableKind,
}

/// Result of decoding a symbol sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Token(Token),
    /// No table contains the sequence. Never appended to any buffer.
    Unrecognized,
}

impl Decoded {
    pub fn token(self) -> Option<Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Unrecognized => None,
        }
    }

    pub fn is_unrecognized(self) -> bool {
        matches!(self, Self::Unrecognized)
    }
}

const ALPHABETIC: [(&str, &str); 26] = [
    (".-", "a"),
    ("-...", "b"),
    ("-.-.", "c"),
    ("-..", "d"),
    (".", "e"),
    ("..-.", "f"),
    ("--.", "g"),
    ("....", "h"),
    ("..", "i"),
    (".---", "j"),
    ("-.-", "k"),
    (".-..", "l"),
    ("--", "m"),
    ("-.", "n"),
    ("---", "o"),
    (".--.", "p"),
    ("--.-", "q"),
    (".-.", "r"),
    ("...", "s"),
    ("-", "t"),
    ("..-", "u"),
    ("...-", "v"),
    (".--", "w"),
    ("-..-", "x"),
    ("-.--", "y"),
    ("--..", "z"),
];

const NUMERIC: [(&str, &str); 10] = [
    ("-----", "0"),
    (".----", "1"),
    ("..---", "2"),
    ("...--", "3"),
    ("....-", "4"),
    (".....", "5"),
    ("-....", "6"),
    ("--...", "7"),
    ("---..", "8"),
    ("----.", "9"),
];

const SPECIAL: [(&str, &str); 4] = [
    (".--.-.", "@"),
    (".-.-.-", "."),
    ("..--..", "?"),
    ("..--.-", "_"),
];

static STANDARD: Lazy<DecodeTables> = Lazy::new(DecodeTables::build);

/// The three decode tables.
#[derive(Debug, Clone)]
pub struct DecodeTables {
    alphabetic: AHashMap<SymbolSequence, &'static str>,
    numeric: AHashMap<SymbolSequence, &'static str>,
    special: AHashMap<SymbolSequence, &'static str>,
}

impl DecodeTables {
    /// Process-wide shared copy of the standard tables.
    pub fn standard() -> &'static DecodeTables {
        &STANDARD
    }

    fn build() -> Self {
        Self {
            alphabetic: index(&ALPHABETIC),
            numeric: index(&NUMERIC),
            special: index(&SPECIAL),
        }
    }

    fn table(&self, kind: TableKind) -> &AHashMap<SymbolSequence, &'static str> {
        match kind {
            TableKind::Alphabetic => &self.alphabetic,
            TableKind::Numeric => &self.numeric,
            TableKind::Special => &self.special,
        }
    }

    /// Decode a sequence, consulting tables in priority order.
    pub fn decode(&self, seq: &SymbolSequence) -> Decoded {
        TableKind::ORDER
            .iter()
            .find_map(|&kind| {
                self.table(kind)
                    .get(seq)
                    .map(|&text| Decoded::Token(Token { text, kind }))
            })
            .unwrap_or(Decoded::Unrecognized)
    }

    /// Reverse lookup: the sequence that decodes to `text`, if any.
    ///
    /// Tables are searched in the same priority order as `decode`.
    pub fn encode(&self, text: &str) -> Option<SymbolSequence> {
        TableKind::ORDER.iter().find_map(|&kind| {
            self.table(kind)
                .iter()
                .find(|(_, token)| **token == text)
                .map(|(seq, _)| seq.clone())
        })
    }

    /// Entries of one table in declaration order (a-z, 0-9, specials).
    pub fn entries(&self, kind: TableKind) -> impl Iterator<Item = (SymbolSequence, Token)> {
        let data: &'static [(&'static str, &'static str)] = match kind {
            TableKind::Alphabetic => &ALPHABETIC,
            TableKind::Numeric => &NUMERIC,
            TableKind::Special => &SPECIAL,
        };
        data.iter()
            .map(move |&(code, text)| (parse_code(code), Token { text, kind }))
    }

    /// Total number of entries across all tables.
    pub fn len(&self) -> usize {
        self.alphabetic.len() + self.numeric.len() + self.special.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_code(code: &str) -> SymbolSequence {
    code.chars().filter_map(Symbol::from_char).collect()
}

fn index(data: &[(&str, &'static str)]) -> AHashMap<SymbolSequence, &'static str> {
    data.iter()
        .map(|&(code, text)| (parse_code(code), text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(code: &str) -> SymbolSequence {
        code.parse().unwrap()
    }

    #[test]
    fn test_table_sizes() {
        let tables = DecodeTables::standard();
        assert_eq!(tables.entries(TableKind::Alphabetic).count(), 26);
        assert_eq!(tables.entries(TableKind::Numeric).count(), 10);
        assert_eq!(tables.entries(TableKind::Special).count(), 4);
        assert_eq!(tables.len(), 40);
    }

    #[test]
    fn test_decode_letters() {
        let tables = DecodeTables::standard();
        assert_eq!(tables.decode(&seq(".-")).token().map(|t| t.text), Some("a"));
        assert_eq!(tables.decode(&seq("--..")).token().map(|t| t.text), Some("z"));
        assert_eq!(tables.decode(&seq(".")).token().map(|t| t.text), Some("e"));
    }

    #[test]
    fn test_every_letter_code() {
        #[rustfmt::skip]
        let expected = [
            (".-", "a"), ("-...", "b"), ("-.-.", "c"), ("-..", "d"), (".", "e"),
            ("..-.", "f"), ("--.", "g"), ("....", "h"), ("..", "i"), (".---", "j"),
            ("-.-", "k"), (".-..", "l"), ("--", "m"), ("-.", "n"), ("---", "o"),
            (".--.", "p"), ("--.-", "q"), (".-.", "r"), ("...", "s"), ("-", "t"),
            ("..-", "u"), ("...-", "v"), (".--", "w"), ("-..-", "x"), ("-.--", "y"),
            ("--..", "z"),
        ];
        let tables = DecodeTables::standard();
        for (code, letter) in expected {
            let token = tables.decode(&seq(code)).token().unwrap();
            assert_eq!(token.text, letter, "code {}", code);
            assert_eq!(token.kind, TableKind::Alphabetic);
            assert_eq!(tables.encode(letter), Some(seq(code)));
        }
        assert_eq!(tables.entries(TableKind::Alphabetic).count(), expected.len());
    }

    #[test]
    fn test_decode_digits_follow_dot_dash_shape() {
        let tables = DecodeTables::standard();
        for n in 1..=5usize {
            let code = format!("{}{}", ".".repeat(n), "-".repeat(5 - n));
            let token = tables.decode(&seq(&code)).token().unwrap();
            assert_eq!(token.text, n.to_string());
            assert_eq!(token.kind, TableKind::Numeric);
        }
        for n in 6..=9usize {
            let code = format!("{}{}", "-".repeat(n - 5), ".".repeat(10 - n));
            assert_eq!(tables.decode(&seq(&code)).token().unwrap().text, n.to_string());
        }
        assert_eq!(tables.decode(&seq("-----")).token().unwrap().text, "0");
    }

    #[test]
    fn test_decode_special_characters() {
        let tables = DecodeTables::standard();
        for (code, text) in [(".--.-.", "@"), (".-.-.-", "."), ("..--..", "?"), ("..--.-", "_")] {
            let token = tables.decode(&seq(code)).token().unwrap();
            assert_eq!(token.text, text);
            assert_eq!(token.kind, TableKind::Special);
        }
    }

    #[test]
    fn test_unknown_and_empty_sequences_are_unrecognized() {
        let tables = DecodeTables::standard();
        assert!(tables.decode(&seq("......")).is_unrecognized());
        assert!(tables.decode(&seq("-------")).is_unrecognized());
        assert!(tables.decode(&SymbolSequence::new()).is_unrecognized());
    }

    #[test]
    fn test_tables_are_disjoint() {
        let tables = DecodeTables::standard();
        let mut seen = std::collections::HashSet::new();
        for kind in TableKind::ORDER {
            for (code, _) in tables.entries(kind) {
                assert!(seen.insert(code.clone()), "duplicate code {}", code);
            }
        }
    }

    #[test]
    fn test_encode_is_reverse_of_decode() {
        let tables = DecodeTables::standard();
        assert_eq!(tables.encode("a"), Some(seq(".-")));
        assert_eq!(tables.encode("1"), Some(seq(".----")));
        assert_eq!(tables.encode("@"), Some(seq(".--.-.")));
        assert_eq!(tables.encode("A"), None);
        assert_eq!(tables.encode("!"), None);
    }
}
