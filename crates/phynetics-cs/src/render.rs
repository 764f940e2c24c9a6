// Renderer: joins transcribed words and punctuation into the output string.

use phynetics_core::phoneme::{self, Phoneme};

/// One item of the interleaved token stream handed to [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Word(&'a [Phoneme]),
    Punctuation(&'a str),
    /// Only separates; never printed.
    Whitespace,
}

/// Join every non-whitespace segment with a single space, in order.
///
/// Runs of whitespace collapse, leading and trailing whitespace disappears,
/// and punctuation is always set off from the words around it.
pub fn render<'a>(segments: impl IntoIterator<Item = Segment<'a>>) -> String {
    let mut out = String::new();
    for segment in segments {
        let text = match segment {
            Segment::Word(phonemes) => phoneme::render(phonemes),
            Segment::Punctuation(text) => text.to_string(),
            Segment::Whitespace => continue,
        };
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Vec<Phoneme> {
        s.chars().map(Phoneme::from).collect()
    }

    #[test]
    fn separates_punctuation() {
        let vecer = word("večer");
        let prvni = word("prvňí");
        let out = render([
            Segment::Word(&vecer),
            Segment::Punctuation(","),
            Segment::Whitespace,
            Segment::Word(&prvni),
            Segment::Punctuation("..."),
        ]);
        assert_eq!(out, "večer , prvňí ...");
    }

    #[test]
    fn whitespace_only_separates() {
        let den = word("den");
        let out = render([
            Segment::Whitespace,
            Segment::Word(&den),
            Segment::Whitespace,
            Segment::Whitespace,
        ]);
        assert_eq!(out, "den");
    }

    #[test]
    fn internal_symbols_use_output_convention() {
        let w = word("xɮ");
        assert_eq!(render([Segment::Word(&w)]), "chʒʒ");
    }

    #[test]
    fn nothing_to_render() {
        assert_eq!(render([]), "");
        assert_eq!(render([Segment::Whitespace]), "");
        assert_eq!(render([Segment::Word(&[])]), "");
    }
}
