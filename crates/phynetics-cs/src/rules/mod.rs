// Rule set: the ordered, immutable rewrite rules driving the engine.
//
// Rules are a closed enumeration. The engine evaluates `RuleSet::rules` in
// order at each grapheme position and the first rule that matches wins; a
// position no rule matches is emitted unchanged. Voicing assimilation is
// not a positional rule: it is applied whenever a phoneme is committed,
// using `RuleSet::voicing`. `RuleSet::surface` holds the smoothing rules
// run once over the finished phoneme sequence.

mod voicing;

use std::fmt;

pub use voicing::VoicingTable;

use crate::czech::constants::{DEGEMINATING, HIATUS_VOWELS, MERGED_VOWELS, SOFT_VOWELS};

/// Error returned when an injected rule set is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rule {0} emits no phonemes")]
    EmptyEmission(String),

    #[error("rule {0} rewrites a symbol to itself")]
    IdentityRewrite(String),

    #[error("voicing pair maps {0:?} to itself")]
    DegeneratePair(char),

    #[error("voiced {voiced:?} paired with both {first:?} and {second:?}")]
    ConflictingPair {
        voiced: char,
        first: char,
        second: char,
    },
}

// ---------------------------------------------------------------------------
// Positional rules
// ---------------------------------------------------------------------------

/// Which stage of the transcription a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    VowelMerger,
    Palatalization,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCategory::VowelMerger => f.write_str("vowel merger"),
            RuleCategory::Palatalization => f.write_str("palatalization"),
        }
    }
}

/// A context-sensitive rewrite rule applied at one grapheme position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// `from` surfaces as `into`. Palatalization triggers are tested on the
    /// merged vowel.
    Merge { from: char, into: char },

    /// `pattern[0]` immediately followed by `pattern[1]`: both graphemes are
    /// consumed and `emit` is produced (`dě` -> `ďe`, `mě` -> `mňe`).
    Fuse { pattern: [char; 2], emit: Vec<char> },

    /// `consonant` followed by a soft-triggering vowel surfaces as `palatal`.
    Palatalize { consonant: char, palatal: char },

    /// `symbol` in any context expands to `emit` (`ě` -> `je`).
    Expand { symbol: char, emit: Vec<char> },
}

impl Rule {
    pub fn category(&self) -> RuleCategory {
        match self {
            Rule::Merge { .. } => RuleCategory::VowelMerger,
            Rule::Fuse { .. } | Rule::Palatalize { .. } | Rule::Expand { .. } => {
                RuleCategory::Palatalization
            }
        }
    }

    fn validate(&self) -> Result<(), RuleError> {
        match self {
            Rule::Merge { from, into } if from == into => {
                Err(RuleError::IdentityRewrite(self.to_string()))
            }
            Rule::Palatalize { consonant, palatal } if consonant == palatal => {
                Err(RuleError::IdentityRewrite(self.to_string()))
            }
            Rule::Fuse { emit, .. } | Rule::Expand { emit, .. } if emit.is_empty() => {
                Err(RuleError::EmptyEmission(self.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Merge { from, into } => write!(f, "{from} -> {into}"),
            Rule::Fuse { pattern, emit } => {
                write!(f, "{}{} -> {}", pattern[0], pattern[1], emit.iter().collect::<String>())
            }
            Rule::Palatalize { consonant, palatal } => {
                write!(f, "{consonant} -> {palatal} / _[soft]")
            }
            Rule::Expand { symbol, emit } => {
                write!(f, "{symbol} -> {}", emit.iter().collect::<String>())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Surface smoothing rules
// ---------------------------------------------------------------------------

/// A rule over adjacent phonemes, applied once after voicing is final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceRule {
    /// A phoneme from `after` followed by one from `before` gets `glide`
    /// inserted between them (`ia` -> `ija`).
    Glide {
        after: Vec<char>,
        before: Vec<char>,
        glide: char,
    },

    /// `target` followed by a phoneme from `before` surfaces as `emit`.
    Assimilate {
        target: char,
        before: Vec<char>,
        emit: char,
    },

    /// `dropped` directly before `before` disappears (`nň` -> `ň`).
    Absorb { dropped: char, before: char },

    /// A doubled phoneme from `symbols` is pronounced once.
    Degeminate { symbols: Vec<char> },
}

// ---------------------------------------------------------------------------
// Rule set
// ---------------------------------------------------------------------------

/// The complete, immutable configuration of the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    soft_vowels: Vec<char>,
    voicing: VoicingTable,
    surface: Vec<SurfaceRule>,
}

impl RuleSet {
    /// Assemble a rule set from its parts, rejecting malformed rules.
    pub fn new(
        rules: Vec<Rule>,
        soft_vowels: Vec<char>,
        voicing: VoicingTable,
        surface: Vec<SurfaceRule>,
    ) -> Result<Self, RuleError> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self {
            rules,
            soft_vowels,
            voicing,
            surface,
        })
    }

    /// The standard Czech rule set.
    pub fn czech() -> Self {
        Self {
            rules: czech_rules(),
            soft_vowels: SOFT_VOWELS.to_vec(),
            voicing: VoicingTable::czech(),
            surface: czech_surface_rules(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn voicing(&self) -> &VoicingTable {
        &self.voicing
    }

    pub fn surface(&self) -> &[SurfaceRule] {
        &self.surface
    }

    /// The symbol `c` surfaces as after vowel merger.
    pub fn merged(&self, c: char) -> char {
        self.rules
            .iter()
            .find_map(|rule| match rule {
                Rule::Merge { from, into } if *from == c => Some(*into),
                _ => None,
            })
            .unwrap_or(c)
    }

    /// Whether a (merged) vowel symbol palatalizes a preceding consonant.
    pub fn is_soft_vowel(&self, c: char) -> bool {
        self.soft_vowels.contains(&self.merged(c))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::czech()
    }
}

/// Positional rules in priority order.
fn czech_rules() -> Vec<Rule> {
    let mut rules: Vec<Rule> = MERGED_VOWELS
        .iter()
        .map(|&(from, into)| Rule::Merge { from, into })
        .collect();

    let e_caron = '\u{011B}'; // ě
    rules.extend([
        Rule::Fuse {
            pattern: ['d', e_caron],
            emit: vec!['\u{010F}', 'e'], // ďe
        },
        Rule::Fuse {
            pattern: ['t', e_caron],
            emit: vec!['\u{0165}', 'e'], // ťe
        },
        Rule::Fuse {
            pattern: ['n', e_caron],
            emit: vec!['\u{0148}', 'e'], // ňe
        },
        Rule::Fuse {
            pattern: ['m', e_caron],
            emit: vec!['m', '\u{0148}', 'e'], // mňe
        },
        Rule::Palatalize {
            consonant: 'd',
            palatal: '\u{010F}',
        },
        Rule::Palatalize {
            consonant: 't',
            palatal: '\u{0165}',
        },
        Rule::Palatalize {
            consonant: 'n',
            palatal: '\u{0148}',
        },
        Rule::Expand {
            symbol: e_caron,
            emit: vec!['j', 'e'],
        },
    ]);
    rules
}

fn czech_surface_rules() -> Vec<SurfaceRule> {
    vec![
        SurfaceRule::Glide {
            after: vec!['i', '\u{00ED}'],
            before: HIATUS_VOWELS.to_vec(),
            glide: 'j',
        },
        SurfaceRule::Assimilate {
            target: 'n',
            before: vec!['k', 'g'],
            emit: '\u{014B}', // ŋ
        },
        SurfaceRule::Assimilate {
            target: 'm',
            before: vec!['v', 'f'],
            emit: '\u{0271}', // ɱ
        },
        SurfaceRule::Assimilate {
            target: 'n',
            before: vec!['\u{0165}', '\u{010F}'],
            emit: '\u{0148}',
        },
        SurfaceRule::Absorb {
            dropped: 'n',
            before: '\u{0148}',
        },
        SurfaceRule::Degeminate {
            symbols: DEGEMINATING.to_vec(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::czech::constants::{NON_TRIGGERING_VOICED, VOICING_PAIRS};

    #[test]
    fn czech_rule_set_passes_validation() {
        let czech = RuleSet::czech();
        let rebuilt = RuleSet::new(
            czech_rules(),
            SOFT_VOWELS.to_vec(),
            VoicingTable::new(VOICING_PAIRS, NON_TRIGGERING_VOICED).unwrap(),
            czech_surface_rules(),
        )
        .unwrap();
        assert_eq!(czech, rebuilt);
    }

    #[test]
    fn merger_precedes_palatalization() {
        let rules = RuleSet::czech();
        let first_palatal = rules
            .rules()
            .iter()
            .position(|r| r.category() == RuleCategory::Palatalization)
            .unwrap();
        assert!(
            rules.rules()[..first_palatal]
                .iter()
                .all(|r| r.category() == RuleCategory::VowelMerger)
        );
    }

    #[test]
    fn merged_vowels() {
        let rules = RuleSet::czech();
        assert_eq!(rules.merged('y'), 'i');
        assert_eq!(rules.merged('ý'), 'í');
        assert_eq!(rules.merged('ů'), 'ú');
        assert_eq!(rules.merged('a'), 'a');
    }

    #[test]
    fn soft_vowels_after_merger() {
        let rules = RuleSet::czech();
        assert!(rules.is_soft_vowel('i'));
        assert!(rules.is_soft_vowel('y'));
        assert!(!rules.is_soft_vowel('ě'));
        assert!(!rules.is_soft_vowel('e'));
        assert!(!rules.is_soft_vowel('ů'));
    }

    #[test]
    fn empty_emission_rejected() {
        let err = RuleSet::new(
            vec![Rule::Expand {
                symbol: 'x',
                emit: vec![],
            }],
            vec![],
            VoicingTable::czech(),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, RuleError::EmptyEmission(_)));
    }

    #[test]
    fn identity_rewrite_rejected() {
        let err = RuleSet::new(
            vec![Rule::Palatalize {
                consonant: 'd',
                palatal: 'd',
            }],
            vec![],
            VoicingTable::czech(),
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, RuleError::IdentityRewrite("d -> d / _[soft]".to_string()));
    }

    #[test]
    fn rule_display() {
        assert_eq!(
            Rule::Fuse {
                pattern: ['m', 'ě'],
                emit: vec!['m', 'ň', 'e'],
            }
            .to_string(),
            "mě -> mňe"
        );
        assert_eq!(Rule::Merge { from: 'y', into: 'i' }.to_string(), "y -> i");
    }
}
