// Phoneme: the output unit of the rule engine.

use std::fmt;

use crate::grapheme::{CH, DZH};

/// A surface phonetic symbol.
///
/// Internally every phoneme is a single character. Display renders the
/// two symbols that need more than one character in the output alphabet:
/// `x` prints as `ch` and `ɮ` as `ʒʒ`. Opaque phonemes print verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phoneme {
    pub symbol: char,
    /// Passed through from a character outside the Czech alphabet.
    pub opaque: bool,
}

impl Phoneme {
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            opaque: false,
        }
    }

    pub const fn opaque(symbol: char) -> Self {
        Self {
            symbol,
            opaque: true,
        }
    }
}

impl From<char> for Phoneme {
    fn from(symbol: char) -> Self {
        Self::new(symbol)
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.opaque {
            return write!(f, "{}", self.symbol);
        }
        match self.symbol {
            CH => f.write_str("ch"),
            DZH => f.write_str("\u{0292}\u{0292}"),
            c => write!(f, "{c}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Phoneme {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Render a phoneme sequence as one string.
pub fn render(phonemes: &[Phoneme]) -> String {
    phonemes.iter().map(ToString::to_string).collect()
}
