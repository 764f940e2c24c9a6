// Grapheme normalizer: turns the text of one word token into graphemes.
//
// Steps, in order: lowercase, lexical exceptions, digraph merging and
// expansion of multi-phone letters, feature annotation.

mod lexicon;

pub use lexicon::{Follow, Lexicon, LexiconEntry};

use phynetics_core::character::{is_czech_letter, is_vowel, lower_chars};
use phynetics_core::enums::{GraphemeClass, Voicing};
use phynetics_core::grapheme::{CH, DZ, DZH, Features, Grapheme};

use crate::czech::constants::{INHERENTLY_SOFT, PALATAL_MARKED, VOICING_PAIRS};
use lexicon::Letter;

/// Options for [`Normalizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Apply the lexical exception list.
    pub use_lexicon: bool,
    /// Treat every `y`/`ý` as hard, so `ty` reads as `ti` rather than `ťi`.
    pub hard_y: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            use_lexicon: true,
            hard_y: false,
        }
    }
}

/// Converts word text into annotated graphemes.
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizerOptions,
    lexicon: Lexicon,
}

impl Normalizer {
    /// Normalizer with the built-in Czech exception list.
    pub fn new(options: NormalizerOptions) -> Self {
        Self::with_lexicon(options, Lexicon::czech())
    }

    pub fn with_lexicon(options: NormalizerOptions, lexicon: Lexicon) -> Self {
        Self { options, lexicon }
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Normalize the text of one word. Never fails; characters outside the
    /// Czech alphabet become opaque graphemes.
    pub fn normalize(&self, word: &str) -> Vec<Grapheme> {
        let mut letters: Vec<Letter> = lower_chars(word).into_iter().map(Letter::plain).collect();
        if self.options.use_lexicon {
            self.lexicon.apply(&mut letters);
        }

        let mut graphemes = Vec::with_capacity(letters.len() + 2);
        let mut i = 0;
        while i < letters.len() {
            let letter = letters[i];
            let next = letters.get(i + 1).map(|l| l.ch);
            let plain = |symbol| self.annotate(symbol, letter.hard);
            match (letter.ch, next) {
                ('c', Some('h')) => {
                    graphemes.push(digraph(CH));
                    i += 2;
                }
                ('d', Some('z')) => {
                    graphemes.push(digraph(DZ));
                    i += 2;
                }
                ('d', Some('\u{017E}')) => {
                    graphemes.push(digraph(DZH));
                    i += 2;
                }
                ('q', Some('u')) => {
                    graphemes.push(plain('k'));
                    graphemes.push(plain('v'));
                    i += 2;
                }
                ('q', _) => {
                    graphemes.push(plain('k'));
                    graphemes.push(plain('v'));
                    i += 1;
                }
                ('x', _) => {
                    graphemes.push(plain('k'));
                    graphemes.push(plain('s'));
                    i += 1;
                }
                ('w', _) => {
                    graphemes.push(plain('v'));
                    i += 1;
                }
                (c, _) => {
                    graphemes.push(plain(c));
                    i += 1;
                }
            }
        }
        graphemes
    }

    fn annotate(&self, symbol: char, pinned_hard: bool) -> Grapheme {
        if !is_czech_letter(symbol) {
            return Grapheme::opaque(symbol);
        }

        let class = if is_vowel(symbol) {
            GraphemeClass::Vowel
        } else {
            GraphemeClass::Consonant
        };
        let soft = PALATAL_MARKED.contains(&symbol) || INHERENTLY_SOFT.contains(&symbol);
        let hard = class == GraphemeClass::Vowel
            && (pinned_hard || (self.options.hard_y && matches!(symbol, 'y' | '\u{00FD}')));

        Grapheme::new(
            symbol,
            Features {
                class,
                voicing: voicing_of(symbol),
                soft,
                hard,
            },
        )
    }
}

/// A merged digraph. Input characters equal to a digraph symbol are not
/// Czech letters and never get here.
fn digraph(symbol: char) -> Grapheme {
    Grapheme::new(
        symbol,
        Features {
            voicing: voicing_of(symbol),
            ..Features::consonant()
        },
    )
}

fn voicing_of(symbol: char) -> Option<Voicing> {
    VOICING_PAIRS.iter().find_map(|&(voiced, voiceless)| {
        if symbol == voiced {
            Some(Voicing::Voiced)
        } else if symbol == voiceless {
            Some(Voicing::Voiceless)
        } else {
            None
        }
    })
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerOptions::default())
    }
}
