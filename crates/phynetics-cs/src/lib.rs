//! Rule-based phonetic transcription of Czech text.
//!
//! Text is split into tokens, each word is normalized into graphemes and run
//! through an ordered set of rewrite rules (vowel merger, palatalization,
//! voicing assimilation, final devoicing), and the resulting phonemes are
//! joined with the untouched punctuation into one output string.
//!
//! ```
//! use phynetics_cs::Transcription;
//!
//! let t = Transcription::new("Byl pozdní večer, první máj...");
//! assert_eq!(t.phonetic(), "bil pozdňí večer , prvňí máj ...");
//! ```
//!
//! For non-default behaviour build a [`Transcriber`] from
//! [`TranscriberOptions`], or substitute the whole [`RuleSet`] with
//! [`Transcriber::with_rules`].

mod czech;

pub mod engine;
pub mod normalizer;
pub mod render;
pub mod rules;
pub mod tokenizer;
pub mod transcription;

pub use engine::{Boundary, RuleEngine};
pub use normalizer::{Lexicon, LexiconEntry, Normalizer, NormalizerOptions};
pub use rules::{Rule, RuleCategory, RuleError, RuleSet, SurfaceRule, VoicingTable};
pub use transcription::{TranscribedWord, Transcriber, TranscriberOptions, Transcription};
