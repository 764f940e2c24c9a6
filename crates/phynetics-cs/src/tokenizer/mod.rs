// Tokenizer: splits text into word, punctuation and whitespace runs.
//
// Every character belongs to exactly one token, tokens appear in input
// order and their spans tile the input without gaps or overlaps.

use phynetics_core::character::{CharType, get_char_type};
use phynetics_core::enums::TokenKind;
use phynetics_core::token::Token;

fn kind_of(c: char) -> TokenKind {
    match get_char_type(c) {
        CharType::Letter => TokenKind::Word,
        CharType::Whitespace => TokenKind::Whitespace,
        CharType::Punctuation => TokenKind::Punctuation,
    }
}

/// Split `text` into maximal runs of one token kind.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<(TokenKind, String, usize)> = None;

    for (pos, c) in text.chars().enumerate() {
        let kind = kind_of(c);
        if let Some((run_kind, run, _)) = current.as_mut() {
            if *run_kind == kind {
                run.push(c);
                continue;
            }
        }
        if let Some((run_kind, run, start)) = current.take() {
            tokens.push(Token::new(run_kind, run, start));
        }
        current = Some((kind, c.to_string(), pos));
    }
    if let Some((run_kind, run, start)) = current {
        tokens.push(Token::new(run_kind, run, start));
    }
    tokens
}
