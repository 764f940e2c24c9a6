// Phoneme buffer with regressive voicing applied on commit.
//
// Every slot remembers its underlying symbol next to its current surface
// symbol. Committing a phoneme re-voices the run of obstruents to its left,
// walking right to left until a slot's surface does not change. Surface
// values are always recomputed from the underlying symbol, so a consonant
// that was devoiced and later sees a voiced neighbour is restored exactly.

use phynetics_core::enums::Voicing;
use phynetics_core::phoneme::Phoneme;

use crate::rules::VoicingTable;

/// What follows the word being transcribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// End of word with nothing assimilating across it: final devoicing.
    #[default]
    Pause,
    /// The next word starts with this phoneme and nothing but whitespace
    /// separates the two words.
    Before(Phoneme),
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    underlying: char,
    surface: char,
    /// Voicing of `underlying`. Slots without one never change.
    voicing: Option<Voicing>,
    opaque: bool,
}

impl Slot {
    fn surface_voicing(&self) -> Option<Voicing> {
        if self.surface == self.underlying {
            self.voicing
        } else {
            self.voicing.map(Voicing::flipped)
        }
    }
}

pub(crate) struct PhonemeBuffer<'v> {
    slots: Vec<Slot>,
    voicing: &'v VoicingTable,
}

impl<'v> PhonemeBuffer<'v> {
    pub(crate) fn new(voicing: &'v VoicingTable, capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            voicing,
        }
    }

    /// Append a phoneme with its annotated voicing and propagate that
    /// voicing leftwards.
    pub(crate) fn commit(&mut self, symbol: char, voicing: Option<Voicing>) {
        self.push(Slot {
            underlying: symbol,
            surface: symbol,
            voicing,
            opaque: false,
        });
    }

    /// Append a character no rule applies to. It is never rewritten and
    /// stops assimilation like a sonorant.
    pub(crate) fn commit_opaque(&mut self, symbol: char) {
        self.push(Slot {
            underlying: symbol,
            surface: symbol,
            voicing: None,
            opaque: true,
        });
    }

    /// Close the word: devoice a final obstruent, then assimilate it to the
    /// following word if the boundary allows it.
    pub(crate) fn close(&mut self, boundary: Boundary) {
        let trigger = match boundary {
            Boundary::Pause => None,
            Boundary::Before(next) if next.opaque => None,
            Boundary::Before(next) => self.voicing.trigger(next.symbol),
        };
        let table = self.voicing;
        let Some(last) = self.slots.last_mut() else {
            return;
        };
        if last.voicing == Some(Voicing::Voiced) {
            let devoiced = table.devoice(last.underlying);
            if devoiced != last.underlying {
                last.underlying = devoiced;
                last.voicing = Some(Voicing::Voiceless);
            }
        }
        last.surface = assimilated(table, last, trigger);
        self.propagate(self.slots.len() - 1);
    }

    pub(crate) fn into_phonemes(self) -> Vec<Phoneme> {
        self.slots
            .into_iter()
            .map(|s| {
                if s.opaque {
                    Phoneme::opaque(s.surface)
                } else {
                    Phoneme::new(s.surface)
                }
            })
            .collect()
    }

    fn push(&mut self, slot: Slot) {
        self.slots.push(slot);
        self.propagate(self.slots.len() - 1);
    }

    /// Voicing the slot at `k` imposes on its left neighbour.
    fn trigger(&self, k: usize) -> Option<Voicing> {
        let slot = &self.slots[k];
        if slot.opaque {
            return None;
        }
        match slot.surface_voicing() {
            Some(Voicing::Voiced) if self.voicing.is_non_trigger(slot.surface) => None,
            other => other,
        }
    }

    fn propagate(&mut self, from: usize) {
        let mut k = from;
        while k > 0 {
            let trigger = self.trigger(k);
            let surface = assimilated(self.voicing, &self.slots[k - 1], trigger);
            let left = &mut self.slots[k - 1];
            if surface == left.surface {
                break;
            }
            left.surface = surface;
            k -= 1;
        }
    }
}

/// Surface form of `slot` when followed by something imposing `trigger`.
fn assimilated(table: &VoicingTable, slot: &Slot, trigger: Option<Voicing>) -> char {
    match (slot.voicing, trigger) {
        (Some(Voicing::Voiced), Some(Voicing::Voiceless)) => table.devoice(slot.underlying),
        (Some(Voicing::Voiceless), Some(Voicing::Voiced)) => table.voice(slot.underlying),
        _ => slot.underlying,
    }
}
