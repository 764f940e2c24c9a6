// Surface smoothing: one left-to-right pass over a finished word.
//
// Each position looks at its right neighbour as it was before the pass
// started, and the first matching rule decides what the position becomes.
// Opaque phonemes are copied through and never serve as context.

use phynetics_core::phoneme::Phoneme;

use crate::rules::SurfaceRule;

pub(crate) fn smooth(rules: &[SurfaceRule], phonemes: &[Phoneme]) -> Vec<Phoneme> {
    let mut out = Vec::with_capacity(phonemes.len() + 2);
    for (i, &current) in phonemes.iter().enumerate() {
        if current.opaque {
            out.push(current);
            continue;
        }
        let next = phonemes.get(i + 1).filter(|p| !p.opaque).map(|p| p.symbol);
        match rules.iter().find_map(|rule| apply(rule, current.symbol, next)) {
            Some(Outcome::Replace(symbol)) => out.push(Phoneme::new(symbol)),
            Some(Outcome::Append(glide)) => {
                out.push(current);
                out.push(Phoneme::new(glide));
            }
            Some(Outcome::Drop) => {}
            None => out.push(current),
        }
    }
    out
}

enum Outcome {
    Replace(char),
    Append(char),
    Drop,
}

fn apply(rule: &SurfaceRule, current: char, next: Option<char>) -> Option<Outcome> {
    let next = next?;
    match rule {
        SurfaceRule::Glide {
            after,
            before,
            glide,
        } if after.contains(&current) && before.contains(&next) => Some(Outcome::Append(*glide)),
        SurfaceRule::Assimilate {
            target,
            before,
            emit,
        } if *target == current && before.contains(&next) => Some(Outcome::Replace(*emit)),
        SurfaceRule::Absorb { dropped, before } if *dropped == current && *before == next => {
            Some(Outcome::Drop)
        }
        SurfaceRule::Degeminate { symbols } if current == next && symbols.contains(&current) => {
            Some(Outcome::Drop)
        }
        _ => None,
    }
}
