//! Property-based tests for the transcription pipeline.
//!
//! 1. **Totality**: any input transcribes without panicking.
//! 2. **Punctuation preservation**: punctuation runs survive in order.
//! 3. **Whitespace normalization**: output has single inner spaces only.
//! 4. **Case invariance**: letter case never changes the transcription.
//! 5. **Vowel-merger idempotence**: writing `i`/`í` for `y`/`ý` changes
//!    nothing under the default options.
//! 6. **Word count**: every word token yields exactly one transcribed word.

use phynetics_core::enums::TokenKind;
use phynetics_cs::tokenizer::tokenize;
use phynetics_cs::{Transcriber, TranscriberOptions, Transcription};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// Czech letters in both cases and spaces.
const CZECH_MIXED: &str =
    "aábcčdďeéěfghijklmnňoópqrřsštťuúůvwxyýzžAÁBCČDĎEÉĚFGHIJKLMNŇOÓPQRŘSŠTŤUÚŮVWXYÝZŽ  ";

/// Lowercase Czech letters with punctuation and whitespace mixed in.
const CZECH_LOWER_PUNCT: &str = "aábcčdďeéěfghijklmnňoópqrřsštťuúůvwxyýzž ,.?!-";

fn arb_text(alphabet: &str) -> impl Strategy<Value = String> {
    let chars: Vec<char> = alphabet.chars().collect();
    prop::collection::vec(prop::sample::select(chars), 0..40)
        .prop_map(|v| v.into_iter().collect::<String>())
}

fn punctuation(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.kind == TokenKind::Punctuation)
        .map(|t| t.text)
        .collect()
}

fn all_option_sets() -> impl Strategy<Value = TranscriberOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(cross, hard_y, lexicon)| {
        TranscriberOptions {
            cross_word_assimilation: cross,
            hard_y,
            use_lexicon: lexicon,
        }
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_totality(text in ".*", options in all_option_sets()) {
        let t = Transcriber::new(options).transcribe(&text);
        prop_assert_eq!(t.orthographic(), text.as_str());
    }

    #[test]
    fn prop_punctuation_preserved(text in ".*") {
        let t = Transcription::new(&text);
        prop_assert_eq!(punctuation(t.phonetic()), punctuation(&text));
    }

    #[test]
    fn prop_whitespace_collapsed(text in ".*") {
        let t = Transcription::new(&text);
        let phonetic = t.phonetic();
        prop_assert!(!phonetic.starts_with(' '));
        prop_assert!(!phonetic.ends_with(' '));
        prop_assert!(!phonetic.contains("  "));
        prop_assert!(phonetic.chars().all(|c| c == ' ' || !c.is_whitespace()));
    }

    #[test]
    fn prop_case_invariance(text in arb_text(CZECH_MIXED)) {
        let lower = text.to_lowercase();
        let (mixed, lowered) = (Transcription::new(&text), Transcription::new(&lower));
        prop_assert_eq!(mixed.phonetic(), lowered.phonetic());
    }

    #[test]
    fn prop_vowel_merger_idempotence(text in arb_text(CZECH_LOWER_PUNCT)) {
        let merged: String = text
            .chars()
            .map(|c| match c {
                'y' => 'i',
                'ý' => 'í',
                c => c,
            })
            .collect();
        let (written, rewritten) = (Transcription::new(&text), Transcription::new(&merged));
        prop_assert_eq!(written.phonetic(), rewritten.phonetic());
    }

    #[test]
    fn prop_internal_symbols_pass_through(text in arb_text("a\u{0263}\u{0292}\u{026E} ")) {
        let t = Transcription::new(&text);
        let kept = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        prop_assert_eq!(kept(t.phonetic()), kept(&text));
    }

    #[test]
    fn prop_one_entry_per_word(text in ".*") {
        let t = Transcription::new(&text);
        let word_tokens = t.tokens().iter().filter(|tok| tok.is_word()).count();
        prop_assert_eq!(t.words().len(), word_tokens);
        for word in t.words() {
            prop_assert!(t.tokens()[word.token_index].is_word());
            prop_assert!(!word.phonemes.is_empty());
        }
    }
}
