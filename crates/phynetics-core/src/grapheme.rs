// Grapheme: an atomic orthographic unit after normalization.
//
// Digraphs are merged into a single internal symbol before any rule sees
// them, so context rules always look at exactly one unit per position:
//
//   ch -> 'x'    dz -> 'ʒ'    dž -> 'ɮ'

use std::fmt;

use crate::enums::{GraphemeClass, Voicing};

/// Internal symbol of the `ch` digraph.
pub const CH: char = 'x';

/// Internal symbol of the `dz` digraph.
pub const DZ: char = '\u{0292}'; // ʒ

/// Internal symbol of the `dž` digraph.
pub const DZH: char = '\u{026E}'; // ɮ

/// Static features of a grapheme, fixed at normalization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Features {
    pub class: GraphemeClass,

    /// Set only for obstruents that have a voiced/voiceless partner.
    pub voicing: Option<Voicing>,

    /// Carries a palatal diacritic (`ď ť ň ě`) or is an inherently soft
    /// consonant (`č ř š ž c j`).
    pub soft: bool,

    /// Vowel pinned as hard: it never palatalizes the preceding consonant.
    pub hard: bool,
}

impl Features {
    /// Features of a character outside the Czech alphabet.
    pub const OPAQUE: Features = Features {
        class: GraphemeClass::Opaque,
        voicing: None,
        soft: false,
        hard: false,
    };

    pub fn vowel() -> Self {
        Self {
            class: GraphemeClass::Vowel,
            ..Self::OPAQUE
        }
    }

    pub fn consonant() -> Self {
        Self {
            class: GraphemeClass::Consonant,
            ..Self::OPAQUE
        }
    }
}

/// A normalized orthographic unit: one letter or one merged digraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grapheme {
    /// Internal symbol (lowercase letter or merged digraph symbol).
    pub symbol: char,
    pub features: Features,
}

impl Grapheme {
    pub fn new(symbol: char, features: Features) -> Self {
        Self { symbol, features }
    }

    /// A grapheme no rule knows about.
    pub fn opaque(symbol: char) -> Self {
        Self::new(symbol, Features::OPAQUE)
    }

    pub fn is_vowel(&self) -> bool {
        self.features.class == GraphemeClass::Vowel
    }

    pub fn is_consonant(&self) -> bool {
        self.features.class == GraphemeClass::Consonant
    }

    pub fn is_opaque(&self) -> bool {
        self.features.class == GraphemeClass::Opaque
    }

    /// Orthographic spelling of this grapheme.
    pub fn surface(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            return write!(f, "{}", self.symbol);
        }
        match self.symbol {
            CH => f.write_str("ch"),
            DZ => f.write_str("dz"),
            DZH => f.write_str("d\u{017E}"),
            c => write!(f, "{c}"),
        }
    }
}
