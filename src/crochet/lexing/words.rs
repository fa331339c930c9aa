//! Word classification for single pieces
//!
//! Uses logos to recognize the shape of a piece that is not a group: one of the seven stitch
//! keywords or one of the three pattern shapes. A piece is only classified when the lexer
//! produces exactly one word spanning the whole piece, so `mc(3)x` or `scsc` are rejected.

use logos::Logos;

/// The shape of a non-group piece
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    #[token("c")]
    Chain,
    #[token("sc")]
    SingleCrochet,
    #[token("inc")]
    Increase,
    #[token("incdec")]
    IncreaseDecrease,
    #[token("dec")]
    Decrease,
    #[token("sk")]
    Skip,
    #[token("bk")]
    Back,
    #[regex(r"mc\([0-9]+\)")]
    MagicCircle,
    #[regex(r"me\([0-9]+\)")]
    MagicEllipse,
    #[regex(r"bend\([0-9]+,[0-9]+\)")]
    Bend,
}

/// Classify a whole piece, or `None` if it is not exactly one word
pub fn classify(piece: &str) -> Option<Word> {
    let mut lexer = Word::lexer(piece);
    let word = lexer.next()?.ok()?;
    let span = lexer.span();
    if span.start != 0 || span.end != piece.len() {
        return None;
    }
    if lexer.next().is_some() {
        return None;
    }
    Some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_stitch_keywords() {
        assert_eq!(classify("c"), Some(Word::Chain));
        assert_eq!(classify("sc"), Some(Word::SingleCrochet));
        assert_eq!(classify("inc"), Some(Word::Increase));
        assert_eq!(classify("incdec"), Some(Word::IncreaseDecrease));
        assert_eq!(classify("dec"), Some(Word::Decrease));
        assert_eq!(classify("sk"), Some(Word::Skip));
        assert_eq!(classify("bk"), Some(Word::Back));
    }

    #[test]
    fn classifies_pattern_shapes() {
        assert_eq!(classify("mc(6)"), Some(Word::MagicCircle));
        assert_eq!(classify("me(12)"), Some(Word::MagicEllipse));
        assert_eq!(classify("bend(12,2)"), Some(Word::Bend));
    }

    #[test]
    fn rejects_partial_and_concatenated_words() {
        assert_eq!(classify("mc(3)x"), None);
        assert_eq!(classify("scsc"), None);
        assert_eq!(classify("incd"), None);
        assert_eq!(classify("mc(abc)"), None);
        assert_eq!(classify("bend(12)"), None);
        assert_eq!(classify(""), None);
    }
}
