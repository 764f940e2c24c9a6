// Lexical exception list: ordered substring rewrites for loanwords and
// words whose spelling misleads the palatalization rules.
//
// Entries apply one after another, each to the output of the previous one,
// left to right without overlapping matches. Patterns compare with `y`/`i`
// and `ý`/`í` folded together. A `y` or `ý` written by a replacement is
// marked hard so it keeps the preceding `d t n` plain.

use std::fmt;

use tracing::trace;

/// A lowercase letter of a word being normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Letter {
    pub(crate) ch: char,
    pub(crate) hard: bool,
}

impl Letter {
    pub(crate) fn plain(ch: char) -> Self {
        Self { ch, hard: false }
    }

    fn written(ch: char) -> Self {
        Self {
            ch,
            hard: matches!(ch, 'y' | '\u{00FD}'),
        }
    }
}

fn fold(c: char) -> char {
    match c {
        'y' => 'i',
        '\u{00FD}' => '\u{00ED}', // ý -> í
        c => c,
    }
}

/// Vowels accepted by [`Follow::Vowel`], after folding.
const FOLLOWING_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', '\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{016F}',
];

/// What must come right after a pattern for an entry to match. The
/// following letter is never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Follow {
    #[default]
    Anything,
    Vowel,
    Letter,
}

/// One rewrite of the exception list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pattern: Vec<char>,
    replacement: Vec<char>,
    at_word_start: bool,
    follow: Follow,
}

impl LexiconEntry {
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.chars().map(fold).collect(),
            replacement: replacement.chars().collect(),
            at_word_start: false,
            follow: Follow::Anything,
        }
    }

    /// Only match at the beginning of a word.
    pub fn at_word_start(mut self) -> Self {
        self.at_word_start = true;
        self
    }

    pub fn followed_by(mut self, follow: Follow) -> Self {
        self.follow = follow;
        self
    }

    fn matches_at(&self, word: &[Letter], pos: usize) -> bool {
        if self.at_word_start && pos != 0 {
            return false;
        }
        let end = pos + self.pattern.len();
        if end > word.len() {
            return false;
        }
        let same = word[pos..end]
            .iter()
            .zip(&self.pattern)
            .all(|(letter, &p)| fold(letter.ch) == p);
        same && match self.follow {
            Follow::Anything => true,
            Follow::Vowel => word
                .get(end)
                .is_some_and(|l| FOLLOWING_VOWELS.contains(&fold(l.ch))),
            Follow::Letter => end < word.len(),
        }
    }

    /// Rewrite every match in `word`; returns whether anything changed.
    fn apply(&self, word: &mut Vec<Letter>) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        let mut fired = false;
        let mut pos = 0;
        while pos < word.len() {
            if self.matches_at(word, pos) {
                let replacement = self.replacement.iter().map(|&c| Letter::written(c));
                word.splice(pos..pos + self.pattern.len(), replacement);
                pos += self.replacement.len();
                fired = true;
            } else {
                pos += 1;
            }
        }
        fired
    }
}

impl fmt::Display for LexiconEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.at_word_start {
            f.write_str("#")?;
        }
        let pattern: String = self.pattern.iter().collect();
        let replacement: String = self.replacement.iter().collect();
        write!(f, "{pattern} -> {replacement}")?;
        match self.follow {
            Follow::Anything => Ok(()),
            Follow::Vowel => f.write_str(" / _V"),
            Follow::Letter => f.write_str(" / _L"),
        }
    }
}

/// An ordered list of [`LexiconEntry`] rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn new(entries: Vec<LexiconEntry>) -> Self {
        Self { entries }
    }

    /// The built-in Czech exception list.
    pub fn czech() -> Self {
        Self::new(czech_entries())
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply the list to a lowercase word and return the rewritten spelling.
    pub fn rewrite(&self, word: &str) -> String {
        let mut letters: Vec<Letter> = word.chars().map(Letter::plain).collect();
        self.apply(&mut letters);
        letters.iter().map(|l| l.ch).collect()
    }

    pub(crate) fn apply(&self, word: &mut Vec<Letter>) {
        for entry in &self.entries {
            if entry.apply(word) {
                trace!(%entry, "lexicon rewrite");
            }
        }
    }
}

fn czech_entries() -> Vec<LexiconEntry> {
    let plain = [
        ("ccitt", "cécéítété"),
        ("nism", "nyzm"),
        ("nist", "nyst"),
        ("anti", "anty"),
        ("akti", "akty"),
        ("atik", "atyk"),
        ("tick", "tyck"),
        ("kandi", "kandy"),
        ("nie", "nye"),
        ("nii", "nyi"),
        ("arkti", "arkty"),
        ("atrakti", "atrakty"),
        ("audi", "audy"),
        ("automati", "automaty"),
        ("causa", "kauza"),
        ("celsia", "celzia"),
        ("chil", "čil"),
        ("danih", "danyh"),
        ("efektiv", "efektyv"),
        ("finiti", "finyty"),
        ("dealer", "dýler"),
        ("diag", "dyag"),
        ("diet", "dyet"),
        ("dif", "dyf"),
        ("dig", "dyg"),
        ("dikt", "dykt"),
        ("dilet", "dylet"),
        ("dipl", "dypl"),
        ("dirig", "dyryg"),
        ("disk", "dysk"),
        ("display", "dysplej"),
        ("disp", "dysp"),
        ("dist", "dyst"),
        ("divide", "dyvide"),
        ("dukti", "dukty"),
        ("edic", "edyc"),
        ("error", "eror"),
    ];
    let mut entries: Vec<LexiconEntry> = plain
        .iter()
        .map(|&(p, r)| LexiconEntry::new(p, r))
        .collect();

    entries.push(
        LexiconEntry::new("ex", "egz")
            .at_word_start()
            .followed_by(Follow::Vowel),
    );

    let plain = [
        ("elektroni", "elektrony"),
        ("energetik", "energetyk"),
        ("etik", "etyk"),
        ("femini", "feminy"),
        ("finiš", "finyš"),
        ("monie", "monye"),
        ("geneti", "genety"),
        ("gieni", "gieny"),
        ("imuni", "imuny"),
        ("indiv", "indyv"),
        ("inici", "inyci"),
        ("investi", "investy"),
        ("karati", "karaty"),
        ("kardi", "kardy"),
        ("klaus", "klauz"),
        ("komuni", "komuny"),
        ("kondi", "kondy"),
        ("kredit", "kredyt"),
        ("kriti", "krity"),
        ("komodit", "komodyt"),
        ("konsor", "konzor"),
        ("leasing", "lízing"),
        ("giti", "gity"),
        ("medi", "medy"),
        ("motiv", "motyv"),
        ("manag", "menedž"),
        ("nsti", "nsty"),
        ("temati", "tematy"),
        ("mini", "miny"),
        ("minus", "mínus"),
        ("ing", "yng"),
        ("gativ", "gatyv"),
        ("mati", "maty"),
        ("manip", "manyp"),
        ("moderni", "moderny"),
        ("organi", "organy"),
        ("optim", "optym"),
        ("panick", "panyck"),
        ("pediatr", "pedyatr"),
        ("perviti", "pervity"),
        ("politi", "polity"),
        ("pozit", "pozyt"),
        ("privati", "privaty"),
        ("prostitu", "prostytu"),
        ("radik", "radyk"),
    ];
    entries.extend(plain.iter().map(|&(p, r)| LexiconEntry::new(p, r)));

    entries.push(LexiconEntry::new("radio", "radyo").at_word_start());
    entries.extend([
        LexiconEntry::new("relativ", "relatyv"),
        LexiconEntry::new("restitu", "restytu"),
        LexiconEntry::new("rock", "rok"),
        LexiconEntry::new("rutin", "rutyn"),
        LexiconEntry::new("rádi", "rády")
            .at_word_start()
            .followed_by(Follow::Letter),
        LexiconEntry::new("shop", "šop"),
        LexiconEntry::new("sho", "scho").at_word_start(),
    ]);

    let plain = [
        ("softwar", "softvér"),
        ("sortim", "sortym"),
        ("spektiv", "spektyv"),
        ("superlativ", "superlatyv"),
        ("nj", "ň"),
        ("statisti", "statysty"),
        ("stik", "styk"),
        ("stimul", "stymul"),
        ("studi", "study"),
        ("techni", "techny"),
        ("telecom", "telekom"),
        ("telefoni", "telefony"),
        ("tetik", "tetyk"),
        ("textil", "textyl"),
        ("tibet", "tybet"),
        ("tirany", "tyrany"),
        ("titul", "tytul"),
        ("tradi", "trady"),
        ("univer", "unyver"),
        ("venti", "venty"),
        ("vertik", "vertyk"),
    ];
    entries.extend(plain.iter().map(|&(p, r)| LexiconEntry::new(p, r)));
    entries
}
