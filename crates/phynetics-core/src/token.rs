// Token: tokenizer output

use std::ops::Range;

use crate::enums::TokenKind;

/// A text token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,

    /// The text content of this token, exactly as in the input.
    pub text: String,

    /// Position of this token in the input, in characters (not bytes).
    pub span: Range<usize>,
}

impl Token {
    /// Create a new token starting at character offset `pos`.
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            kind,
            text,
            span: pos..pos + len,
        }
    }

    /// Length of the token in characters.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_new() {
        let tok = Token::new(TokenKind::Word, "večer", 0);
        assert_eq!(tok.kind, TokenKind::Word);
        assert_eq!(tok.text, "večer");
        assert_eq!(tok.span, 0..5);
        assert!(tok.is_word());
    }

    #[test]
    fn token_new_with_position() {
        let tok = Token::new(TokenKind::Punctuation, "...", 10);
        assert_eq!(tok.span, 10..13);
        assert_eq!(tok.len(), 3);
        assert!(!tok.is_word());
    }

    #[test]
    fn token_unicode_length() {
        // "máj" is 3 characters, 4 bytes in UTF-8
        let tok = Token::new(TokenKind::Word, "máj", 0);
        assert_eq!(tok.len(), 3);
    }

    #[test]
    fn token_empty() {
        let tok = Token::new(TokenKind::Whitespace, "", 4);
        assert!(tok.is_empty());
    }
}
