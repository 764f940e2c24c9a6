//! Golden tests: transcribe every case in `tests/golden/transcriptions.json`
//! and compare with the expected phonetic string.
//!
//! Each case is an object with `input`, `expected` and an optional `options`
//! object whose keys mirror the fields of `TranscriberOptions`.
//!
//! Run: cargo test -p phynetics-cs --test golden --features serde

use std::path::PathBuf;

use phynetics_cs::{Transcriber, TranscriberOptions, Transcription};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_golden(filename: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn options_from(case: &Value) -> TranscriberOptions {
    let defaults = TranscriberOptions::default();
    let Some(options) = case.get("options") else {
        return defaults;
    };
    let flag = |key: &str, default: bool| options.get(key).and_then(Value::as_bool).unwrap_or(default);
    TranscriberOptions {
        cross_word_assimilation: flag("cross_word_assimilation", defaults.cross_word_assimilation),
        hard_y: flag("hard_y", defaults.hard_y),
        use_lexicon: flag("use_lexicon", defaults.use_lexicon),
    }
}

fn cases() -> Vec<Value> {
    match load_golden("transcriptions.json") {
        Value::Array(cases) => cases,
        other => panic!("golden file is not an array: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_transcriptions() {
    let cases = cases();
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let input = case["input"].as_str().expect("input must be a string");
        let expected = case["expected"].as_str().expect("expected must be a string");
        let transcriber = Transcriber::new(options_from(case));
        let obtained = transcriber.transcribe(input);
        if obtained.phonetic() != expected {
            failures.push(format!(
                "  {input:?}\n    expected: {expected:?}\n    obtained: {:?}",
                obtained.phonetic()
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} golden cases differ:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn default_cases_match_convenience_constructor() {
    for case in cases().iter().filter(|c| c.get("options").is_none()) {
        let input = case["input"].as_str().expect("input must be a string");
        let expected = case["expected"].as_str().expect("expected must be a string");
        assert_eq!(Transcription::new(input).phonetic(), expected, "input: {input:?}");
    }
}

#[cfg(feature = "serde")]
#[test]
fn transcription_serializes_to_json() {
    let t = Transcription::new("Byl večer.");
    let json = serde_json::to_value(&t).expect("serialize");
    assert_eq!(json["phonetic"], "bil večer .");
    assert_eq!(json["orthographic"], "Byl večer.");
    assert_eq!(json["tokens"][0]["kind"], "Word");
    assert_eq!(json["tokens"][0]["span"]["start"], 0);
    assert_eq!(json["tokens"][0]["span"]["end"], 3);
    assert_eq!(json["words"][0]["phonemes"], serde_json::json!(["b", "i", "l"]));
    assert_eq!(json["words"][1]["graphemes"][1]["symbol"], "e");
}
