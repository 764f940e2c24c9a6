// Czech phonological constants shared by the normalizer and the default
// rule set.

use phynetics_core::grapheme::{CH, DZ, DZH};

/// Voiced fricative counterpart of `ch`. Never written, only produced by
/// voicing assimilation.
pub(crate) const GAMMA: char = '\u{0263}'; // ɣ

/// Voiced/voiceless obstruent pairs as `(voiced, voiceless)`.
///
/// `ch` appears twice: it devoices both `ɣ` and `h`, and voicing it gives
/// `ɣ` because the first matching pair wins.
pub(crate) const VOICING_PAIRS: &[(char, char)] = &[
    ('b', 'p'),
    ('d', 't'),
    ('\u{010F}', '\u{0165}'), // ď ť
    ('g', 'k'),
    ('z', 's'),
    ('\u{017E}', '\u{0161}'), // ž š
    (DZ, 'c'),
    (DZH, '\u{010D}'), // dž č
    (GAMMA, CH),
    ('h', CH),
    ('v', 'f'),
];

/// Voiced obstruents that undergo assimilation but do not cause it.
pub(crate) const NON_TRIGGERING_VOICED: &[char] = &['v'];

/// Vowels that palatalize a preceding `d t n` (evaluated after merger).
/// `ě` softens through its diacritic instead.
pub(crate) const SOFT_VOWELS: &[char] = &['i', '\u{00ED}']; // i í

/// Letters written with a palatal diacritic.
pub(crate) const PALATAL_MARKED: &[char] = &['\u{010F}', '\u{0165}', '\u{0148}', '\u{011B}']; // ď ť ň ě

/// Consonants that are soft without a diacritic (plus `č ř š ž`).
pub(crate) const INHERENTLY_SOFT: &[char] = &[
    '\u{010D}', '\u{0159}', '\u{0161}', '\u{017E}', 'c', 'j', // č ř š ž c j
];

/// Vowel letters that are only orthographic variants, as `(from, into)`.
pub(crate) const MERGED_VOWELS: &[(char, char)] = &[
    ('y', 'i'),
    ('\u{00FD}', '\u{00ED}'), // ý í
    ('\u{016F}', '\u{00FA}'), // ů ú
];

/// Vowels that take a `j` glide after `i`/`í` (hiatus).
pub(crate) const HIATUS_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', '\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}',
];

/// Consonants whose doubled spelling is pronounced single.
pub(crate) const DEGEMINATING: &[char] = &[
    'c', 'd', 'j', 'k', 'l', 'm', 'n', 's', 't', 'z', '\u{010D}', '\u{0161}', // č š
];
