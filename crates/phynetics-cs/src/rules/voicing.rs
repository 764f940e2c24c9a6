// Voicing table: voiced/voiceless pairs and assimilation triggers.

use hashbrown::HashMap;
use phynetics_core::enums::Voicing;

use super::RuleError;
use crate::czech::constants::{NON_TRIGGERING_VOICED, VOICING_PAIRS};

/// Lookup tables for regressive voicing assimilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicingTable {
    /// voiced -> voiceless
    devoice: HashMap<char, char>,
    /// voiceless -> voiced (first pair listed wins)
    voice: HashMap<char, char>,
    /// Voiced obstruents that never re-voice their left neighbour.
    non_triggers: Vec<char>,
}

impl VoicingTable {
    /// Build a validated table from `(voiced, voiceless)` pairs.
    ///
    /// A voiceless consonant may be the partner of several voiced ones (the
    /// first pair decides what voicing it produces), but every voiced
    /// consonant must have exactly one voiceless partner.
    pub fn new(pairs: &[(char, char)], non_triggers: &[char]) -> Result<Self, RuleError> {
        let mut seen: HashMap<char, char> = HashMap::with_capacity(pairs.len());
        for &(voiced, voiceless) in pairs {
            if voiced == voiceless {
                return Err(RuleError::DegeneratePair(voiced));
            }
            if let Some(&previous) = seen.get(&voiced) {
                if previous != voiceless {
                    return Err(RuleError::ConflictingPair {
                        voiced,
                        first: previous,
                        second: voiceless,
                    });
                }
            }
            seen.insert(voiced, voiceless);
        }
        Ok(Self::build(pairs, non_triggers))
    }

    /// The Czech obstruent pairs.
    pub fn czech() -> Self {
        Self::build(VOICING_PAIRS, NON_TRIGGERING_VOICED)
    }

    fn build(pairs: &[(char, char)], non_triggers: &[char]) -> Self {
        let mut devoice = HashMap::with_capacity(pairs.len());
        let mut voice = HashMap::with_capacity(pairs.len());
        for &(voiced, voiceless) in pairs {
            devoice.entry(voiced).or_insert(voiceless);
            voice.entry(voiceless).or_insert(voiced);
        }
        Self {
            devoice,
            voice,
            non_triggers: non_triggers.to_vec(),
        }
    }

    /// Voicing of `c`, or `None` if it has no partner.
    pub fn voicing(&self, c: char) -> Option<Voicing> {
        if self.devoice.contains_key(&c) {
            Some(Voicing::Voiced)
        } else if self.voice.contains_key(&c) {
            Some(Voicing::Voiceless)
        } else {
            None
        }
    }

    /// Whether `c` is voiced but leaves its left neighbour alone.
    pub fn is_non_trigger(&self, c: char) -> bool {
        self.non_triggers.contains(&c)
    }

    /// Voicing that `c` imposes on a paired consonant to its left.
    pub fn trigger(&self, c: char) -> Option<Voicing> {
        match self.voicing(c) {
            Some(Voicing::Voiced) if self.is_non_trigger(c) => None,
            other => other,
        }
    }

    /// Voiceless partner of `c`, or `c` itself.
    pub fn devoice(&self, c: char) -> char {
        self.devoice.get(&c).copied().unwrap_or(c)
    }

    /// Voiced partner of `c`, or `c` itself.
    pub fn voice(&self, c: char) -> char {
        self.voice.get(&c).copied().unwrap_or(c)
    }
}

impl Default for VoicingTable {
    fn default() -> Self {
        Self::czech()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::czech::constants::GAMMA;
    use phynetics_core::grapheme::{CH, DZH};

    #[test]
    fn czech_table_validates() {
        assert!(VoicingTable::new(VOICING_PAIRS, NON_TRIGGERING_VOICED).is_ok());
    }

    #[test]
    fn ch_voices_to_gamma() {
        let t = VoicingTable::czech();
        assert_eq!(t.voice(CH), GAMMA);
        assert_eq!(t.devoice('h'), CH);
        assert_eq!(t.devoice(GAMMA), CH);
    }

    #[test]
    fn v_is_voiced_but_not_a_trigger() {
        let t = VoicingTable::czech();
        assert_eq!(t.voicing('v'), Some(Voicing::Voiced));
        assert_eq!(t.trigger('v'), None);
        assert_eq!(t.trigger('f'), Some(Voicing::Voiceless));
    }

    #[test]
    fn sonorants_have_no_voicing() {
        let t = VoicingTable::czech();
        for c in ['l', 'm', 'n', 'r', 'ř', 'j', 'a'] {
            assert_eq!(t.voicing(c), None, "{c}");
        }
    }

    #[test]
    fn partners_both_directions() {
        let t = VoicingTable::czech();
        assert_eq!(t.devoice('z'), 's');
        assert_eq!(t.voice('s'), 'z');
        assert_eq!(t.voice('\u{010D}'), DZH);
        assert_eq!(t.devoice('v'), 'f');
        assert_eq!(t.devoice('l'), 'l');
        assert!(t.is_non_trigger('v'));
        assert!(!t.is_non_trigger('z'));
    }

    #[test]
    fn degenerate_pair_rejected() {
        let err = VoicingTable::new(&[('b', 'b')], &[]).unwrap_err();
        assert_eq!(err, RuleError::DegeneratePair('b'));
    }

    #[test]
    fn conflicting_pair_rejected() {
        let err = VoicingTable::new(&[('b', 'p'), ('b', 'f')], &[]).unwrap_err();
        assert_eq!(
            err,
            RuleError::ConflictingPair {
                voiced: 'b',
                first: 'p',
                second: 'f',
            }
        );
    }

    #[test]
    fn shared_voiceless_partner_allowed() {
        let t = VoicingTable::new(&[('x', 'k'), ('g', 'k')], &[]).unwrap();
        assert_eq!(t.voice('k'), 'x');
    }
}
