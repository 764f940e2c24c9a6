// Character classification and case folding for Czech text.

// ---------------------------------------------------------------------------
// Czech phonological constants
// ---------------------------------------------------------------------------

/// Czech vowel letters (lowercase), short and long, including `ě` and `ů`.
pub const CZECH_VOWELS: &[char] = &[
    'a', '\u{00E1}', // á
    'e', '\u{00E9}', // é
    '\u{011B}', // ě
    'i', '\u{00ED}', // í
    'o', '\u{00F3}', // ó
    'u', '\u{00FA}', // ú
    '\u{016F}', // ů
    'y', '\u{00FD}', // ý
];

/// Czech consonant letters (lowercase), including the foreign `q`, `w`, `x`.
pub const CZECH_CONSONANTS: &[char] = &[
    'b', 'c', '\u{010D}', 'd', '\u{010F}', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', '\u{0148}', 'p',
    'q', 'r', '\u{0159}', 's', '\u{0161}', 't', '\u{0165}', 'v', 'w', 'x', 'z', '\u{017E}',
];

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// Alphabetic character of any script, or a combining diacritical mark.
    Letter,
    Whitespace,
    /// Everything else: punctuation, symbols and digits.
    Punctuation,
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() || is_combining_mark(c) {
        CharType::Letter
    } else if is_whitespace(c) {
        CharType::Whitespace
    } else {
        CharType::Punctuation
    }
}

/// Check whether a character is in the Combining Diacritical Marks block.
///
/// Decomposed input (`e` + U+030C) must stay inside the word it decorates.
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Check whether a character is whitespace (Unicode `White_Space`).
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

// ---------------------------------------------------------------------------
// Czech letter classes
// ---------------------------------------------------------------------------

/// Check whether a character is a Czech vowel letter (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    CZECH_VOWELS.contains(&simple_lower(c))
}

/// Check whether a character is a Czech consonant letter (case-insensitive).
pub fn is_consonant(c: char) -> bool {
    CZECH_CONSONANTS.contains(&simple_lower(c))
}

/// Check whether a character belongs to the Czech alphabet at all.
pub fn is_czech_letter(c: char) -> bool {
    is_vowel(c) || is_consonant(c)
}

// ---------------------------------------------------------------------------
// Case conversion
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// Characters with multi-character lowercase expansions map to the first
/// character only, so a word keeps its length in characters.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Lowercase a whole word one character at a time.
pub fn lower_chars(word: &str) -> Vec<char> {
    word.chars().map(simple_lower).collect()
}
