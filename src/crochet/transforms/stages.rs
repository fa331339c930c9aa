//! Individual whole-line stages
//!
//! Each stage implements [`Runnable`] and materializes its output, so stages can be chained
//! and the intermediate representation inspected.

use crate::crochet::error::Result;
use crate::crochet::expanding::expand_all;
use crate::crochet::formatting::format_all;
use crate::crochet::lexing::{Tokenizer, TokenizerOptions};
use crate::crochet::stitch::{Command, Stitch};
use crate::crochet::step::Step;
use crate::crochet::transforms::Runnable;
use crate::crochet::translating::translate_all;

/// Line text → commands
///
/// # Input
/// - `String` - one line of notation
///
/// # Output
/// - `Vec<Command>` - the tokenized pieces, groups nested
#[derive(Debug, Clone, Default)]
pub struct Tokenization {
    tokenizer: Tokenizer,
}

impl Tokenization {
    pub fn new(options: TokenizerOptions) -> Self {
        Tokenization {
            tokenizer: Tokenizer::new(options),
        }
    }
}

impl Runnable<String, Vec<Command>> for Tokenization {
    fn run(&self, input: String) -> Result<Vec<Command>> {
        self.tokenizer.tokenize_line(&input).collect()
    }
}

impl Runnable<&str, Vec<Command>> for Tokenization {
    fn run(&self, input: &str) -> Result<Vec<Command>> {
        self.tokenizer.tokenize_line(input).collect()
    }
}

/// Commands → flat stitch sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct Expansion;

impl Runnable<Vec<Command>, Vec<Stitch>> for Expansion {
    fn run(&self, input: Vec<Command>) -> Result<Vec<Stitch>> {
        expand_all(&input).collect()
    }
}

/// Stitches → simulator steps, from a fresh offset
#[derive(Debug, Clone, Copy, Default)]
pub struct Translation;

impl Runnable<Vec<Stitch>, Vec<Step>> for Translation {
    fn run(&self, input: Vec<Stitch>) -> Result<Vec<Step>> {
        Ok(translate_all(input))
    }
}

/// Steps → run-length display tokens, flushed at the end
#[derive(Debug, Clone, Copy, Default)]
pub struct RunLengthFormatting;

impl Runnable<Vec<Step>, Vec<String>> for RunLengthFormatting {
    fn run(&self, input: Vec<Step>) -> Result<Vec<String>> {
        Ok(format_all(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crochet::stitch::StitchGroup;

    #[test]
    fn tokenization_accepts_str_and_string() {
        let stage = Tokenization::default();
        let from_str = stage.run("sc inc").unwrap();
        let from_string = stage.run("sc inc".to_string()).unwrap();
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.len(), 2);
    }

    #[test]
    fn expansion_flattens_groups() {
        let commands = vec![Command::Group(StitchGroup {
            commands: vec![Stitch::Chain.into()],
            repeat: 3,
        })];
        assert_eq!(Expansion.run(commands).unwrap(), vec![Stitch::Chain; 3]);
    }

    #[test]
    fn translation_starts_from_zero() {
        let steps = Translation
            .run(vec![Stitch::SingleCrochet, Stitch::Skip, Stitch::SingleCrochet])
            .unwrap();
        assert_eq!(steps, vec![Step::sc(0), Step::sc(-1)]);
    }

    #[test]
    fn formatting_flushes_final_run() {
        let displays = RunLengthFormatting
            .run(vec![Step::Chain, Step::Chain])
            .unwrap();
        assert_eq!(displays, vec!["(c)2"]);
    }
}
