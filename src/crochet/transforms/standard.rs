//! Standard transform definitions
//!
//! Pre-built pipelines stopping after each stage. The statics use the default tokenizer
//! options; the builder functions take explicit options (for a configured nesting limit).

use crate::crochet::lexing::TokenizerOptions;
use crate::crochet::stitch::{Command, Stitch};
use crate::crochet::step::Step;
use crate::crochet::transforms::stages::{
    Expansion, RunLengthFormatting, Tokenization, Translation,
};
use crate::crochet::transforms::Transform;
use once_cell::sync::Lazy;

pub type TokenizeTransform = Transform<String, Vec<Command>>;
pub type StitchesTransform = Transform<String, Vec<Stitch>>;
pub type StepsTransform = Transform<String, Vec<Step>>;
pub type DisplayTransform = Transform<String, Vec<String>>;

/// Line → commands
pub static TOKENIZE: Lazy<TokenizeTransform> =
    Lazy::new(|| tokenize_with(TokenizerOptions::default()));

/// Line → flat stitches
pub static TO_STITCHES: Lazy<StitchesTransform> =
    Lazy::new(|| stitches_with(TokenizerOptions::default()));

/// Line → simulator steps
pub static TO_STEPS: Lazy<StepsTransform> = Lazy::new(|| steps_with(TokenizerOptions::default()));

/// Line → run-length display tokens
pub static TO_DISPLAY: Lazy<DisplayTransform> =
    Lazy::new(|| display_with(TokenizerOptions::default()));

pub fn tokenize_with(options: TokenizerOptions) -> TokenizeTransform {
    Transform::from_fn(Ok).then(Tokenization::new(options))
}

pub fn stitches_with(options: TokenizerOptions) -> StitchesTransform {
    tokenize_with(options).then(Expansion)
}

pub fn steps_with(options: TokenizerOptions) -> StepsTransform {
    stitches_with(options).then(Translation)
}

pub fn display_with(options: TokenizerOptions) -> DisplayTransform {
    steps_with(options).then(RunLengthFormatting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crochet::pipeline::process_line;

    #[test]
    fn display_matches_streaming_processor() {
        let line = "mc(6) [sc inc]6 bend(12,2) me(2) dec incdec";
        assert_eq!(
            TO_DISPLAY.run(line.to_string()).unwrap(),
            process_line(line).unwrap()
        );
    }

    #[test]
    fn each_stage_can_be_inspected() {
        let line = "mc(2)".to_string();
        assert_eq!(TOKENIZE.run(line.clone()).unwrap().len(), 1);
        assert_eq!(TO_STITCHES.run(line.clone()).unwrap().len(), 4);
        assert_eq!(
            TO_STEPS.run(line).unwrap(),
            vec![Step::Chain, Step::Chain, Step::sc(1)]
        );
    }

    #[test]
    fn options_reach_the_tokenizer() {
        let transform = tokenize_with(TokenizerOptions { max_group_depth: 0 });
        assert!(transform.run("[sc]2".to_string()).is_err());
        assert!(TOKENIZE.run("[sc]2".to_string()).is_ok());
    }
}
