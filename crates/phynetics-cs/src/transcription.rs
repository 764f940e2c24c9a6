// Transcriber and Transcription: the construction interface and its
// immutable result.
//
// The transcriber owns the normalizer and the rule engine. Words are
// processed right to left so that, with cross-word assimilation enabled,
// each word can see the already transcribed initial of its successor.

use std::fmt;
use std::sync::LazyLock;

use phynetics_core::enums::TokenKind;
use phynetics_core::grapheme::Grapheme;
use phynetics_core::phoneme::{self, Phoneme};
use phynetics_core::token::Token;
use tracing::debug;

use crate::engine::{Boundary, RuleEngine};
use crate::normalizer::{Normalizer, NormalizerOptions};
use crate::render::{Segment, render};
use crate::rules::RuleSet;
use crate::tokenizer::tokenize;

/// Options for [`Transcriber`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriberOptions {
    /// Let a word-final obstruent assimilate to the first phoneme of the
    /// next word when only whitespace separates them.
    pub cross_word_assimilation: bool,
    /// Never palatalize before `y`/`ý`.
    pub hard_y: bool,
    /// Apply the lexical exception list.
    pub use_lexicon: bool,
}

impl Default for TranscriberOptions {
    fn default() -> Self {
        Self {
            cross_word_assimilation: false,
            hard_y: false,
            use_lexicon: true,
        }
    }
}

impl TranscriberOptions {
    fn normalizer_options(&self) -> NormalizerOptions {
        NormalizerOptions {
            use_lexicon: self.use_lexicon,
            hard_y: self.hard_y,
        }
    }
}

static DEFAULT: LazyLock<Transcriber> = LazyLock::new(Transcriber::default);

/// Transcribes text with a fixed rule set and options.
#[derive(Debug, Clone)]
pub struct Transcriber {
    options: TranscriberOptions,
    normalizer: Normalizer,
    engine: RuleEngine,
}

impl Transcriber {
    pub fn new(options: TranscriberOptions) -> Self {
        Self::with_rules(options, RuleSet::czech())
    }

    /// Transcriber running a substituted rule set.
    pub fn with_rules(options: TranscriberOptions, rules: RuleSet) -> Self {
        Self {
            normalizer: Normalizer::new(options.normalizer_options()),
            engine: RuleEngine::new(rules),
            options,
        }
    }

    pub fn options(&self) -> &TranscriberOptions {
        &self.options
    }

    pub fn rules(&self) -> &RuleSet {
        self.engine.rules()
    }

    /// Transcribe `text`. Never fails.
    pub fn transcribe(&self, text: &str) -> Transcription {
        let tokens = tokenize(text);

        let mut words = Vec::new();
        // First phoneme of the word to the right, while only whitespace
        // separates it from the current position.
        let mut following: Option<Phoneme> = None;
        for (token_index, token) in tokens.iter().enumerate().rev() {
            match token.kind {
                TokenKind::Whitespace => {}
                TokenKind::Punctuation => following = None,
                TokenKind::Word => {
                    let graphemes = self.normalizer.normalize(&token.text);
                    let boundary = match following {
                        Some(next) if self.options.cross_word_assimilation => {
                            Boundary::Before(next)
                        }
                        _ => Boundary::Pause,
                    };
                    let phonemes = self.engine.transcribe_word(&graphemes, boundary);
                    following = phonemes.first().copied();
                    words.push(TranscribedWord {
                        token_index,
                        graphemes,
                        phonemes,
                    });
                }
            }
        }
        words.reverse();

        let phonetic = render_tokens(&tokens, &words);
        debug!(
            tokens = tokens.len(),
            words = words.len(),
            phonetic = %phonetic,
            "transcribed"
        );
        Transcription {
            orthographic: text.to_string(),
            phonetic,
            tokens,
            words,
        }
    }
}

impl Default for Transcriber {
    fn default() -> Self {
        Self::new(TranscriberOptions::default())
    }
}

fn render_tokens(tokens: &[Token], words: &[TranscribedWord]) -> String {
    let mut words = words.iter();
    render(tokens.iter().map(|token| match token.kind {
        TokenKind::Word => match words.next() {
            Some(word) => Segment::Word(&word.phonemes),
            None => Segment::Whitespace,
        },
        TokenKind::Punctuation => Segment::Punctuation(&token.text),
        TokenKind::Whitespace => Segment::Whitespace,
    }))
}

/// Diagnostic record of one transcribed word token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TranscribedWord {
    /// Index of the word in [`Transcription::tokens`].
    pub token_index: usize,
    pub graphemes: Vec<Grapheme>,
    pub phonemes: Vec<Phoneme>,
}

impl TranscribedWord {
    /// The word's transcription as printed in the output.
    pub fn phonetic(&self) -> String {
        phoneme::render(&self.phonemes)
    }
}

/// An utterance together with its phonetic transcription.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Transcription {
    orthographic: String,
    phonetic: String,
    tokens: Vec<Token>,
    words: Vec<TranscribedWord>,
}

impl Transcription {
    /// Transcribe `text` with the default options and rule set.
    pub fn new(text: &str) -> Self {
        DEFAULT.transcribe(text)
    }

    pub fn orthographic(&self) -> &str {
        &self.orthographic
    }

    pub fn phonetic(&self) -> &str {
        &self.phonetic
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn words(&self) -> &[TranscribedWord] {
        &self.words
    }
}

impl fmt::Display for Transcription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phonetic)
    }
}
