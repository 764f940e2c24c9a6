// Shared enums: TokenKind, GraphemeClass, Voicing

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// Maximal run of letters.
    Word,
    /// Maximal run of anything that is neither a letter nor whitespace.
    Punctuation,
    /// Maximal run of whitespace.
    Whitespace,
}

/// Broad class of a grapheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GraphemeClass {
    Vowel,
    Consonant,
    /// Character outside the Czech alphabet; no rule applies to it.
    Opaque,
}

/// Voicing of a paired obstruent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Voicing {
    Voiced,
    Voiceless,
}

impl Voicing {
    /// The opposite voicing.
    pub fn flipped(self) -> Self {
        match self {
            Voicing::Voiced => Voicing::Voiceless,
            Voicing::Voiceless => Voicing::Voiced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_kind_equality() {
        assert_eq!(TokenKind::Word, TokenKind::Word);
        assert_ne!(TokenKind::Word, TokenKind::Punctuation);
    }

    #[test]
    fn voicing_flipped() {
        assert_eq!(Voicing::Voiced.flipped(), Voicing::Voiceless);
        assert_eq!(Voicing::Voiceless.flipped(), Voicing::Voiced);
    }
}
