// RuleEngine: turns one word's grapheme sequence into phonemes.
//
// A single left-to-right pass dispatches the positional rules of the rule
// set (first match wins, identity otherwise). Every emitted phoneme is
// committed to a buffer that applies regressive voicing assimilation on
// commit, so no position is revisited by the rules themselves. Closing the
// word applies final devoicing, then the surface smoothing rules run once.

mod buffer;
mod surface;

pub use buffer::Boundary;

use phynetics_core::grapheme::Grapheme;
use phynetics_core::phoneme::Phoneme;
use tracing::trace;

use crate::rules::{Rule, RuleSet};
use buffer::PhonemeBuffer;

/// Applies a [`RuleSet`] to grapheme sequences.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Transcribe one word. Total: every input yields a phoneme sequence,
    /// and an empty input yields an empty one.
    pub fn transcribe_word(&self, graphemes: &[Grapheme], boundary: Boundary) -> Vec<Phoneme> {
        let mut buffer = PhonemeBuffer::new(self.rules.voicing(), graphemes.len() + 2);
        let mut pos = 0;
        while pos < graphemes.len() {
            pos += self.dispatch(graphemes, pos, &mut buffer);
        }
        buffer.close(boundary);
        surface::smooth(self.rules.surface(), &buffer.into_phonemes())
    }

    /// Apply the first matching rule at `pos`; returns graphemes consumed.
    fn dispatch(&self, graphemes: &[Grapheme], pos: usize, buffer: &mut PhonemeBuffer<'_>) -> usize {
        let current = &graphemes[pos];
        if current.is_opaque() {
            buffer.commit_opaque(current.symbol);
            return 1;
        }
        for rule in self.rules.rules() {
            if let Some(consumed) = self.apply(rule, graphemes, pos, buffer) {
                trace!(%rule, category = %rule.category(), pos, "rule fired");
                return consumed;
            }
        }
        buffer.commit(current.symbol, current.features.voicing);
        1
    }

    /// Commit a phoneme produced by a rule, voiced as its symbol is in the
    /// rule set's table.
    fn emit(&self, buffer: &mut PhonemeBuffer<'_>, symbol: char) {
        buffer.commit(symbol, self.rules.voicing().voicing(symbol));
    }

    fn apply(
        &self,
        rule: &Rule,
        graphemes: &[Grapheme],
        pos: usize,
        buffer: &mut PhonemeBuffer<'_>,
    ) -> Option<usize> {
        let current = graphemes[pos].symbol;
        let next = graphemes.get(pos + 1);
        match rule {
            Rule::Merge { from, into } if current == *from => {
                self.emit(buffer, *into);
                Some(1)
            }
            Rule::Fuse { pattern, emit }
                if current == pattern[0]
                    && next.is_some_and(|g| !g.is_opaque() && g.symbol == pattern[1]) =>
            {
                emit.iter().for_each(|&c| self.emit(buffer, c));
                Some(2)
            }
            Rule::Palatalize { consonant, palatal }
                if current == *consonant && next.is_some_and(|g| self.softens(g)) =>
            {
                self.emit(buffer, *palatal);
                Some(1)
            }
            Rule::Expand { symbol, emit } if current == *symbol => {
                emit.iter().for_each(|&c| self.emit(buffer, c));
                Some(1)
            }
            _ => None,
        }
    }

    /// Whether `g` palatalizes the consonant before it: a vowel carrying a
    /// palatal diacritic, or one whose merged form is soft. Hard vowels never
    /// do.
    fn softens(&self, g: &Grapheme) -> bool {
        g.is_vowel()
            && !g.features.hard
            && (g.features.soft || self.rules.is_soft_vowel(g.symbol))
    }
}
