//! Line driver
//!
//! Runs one line through every stage, streaming:
//!
//! ```text
//! line ─► Pieces ─► Commands ─► Stitches ─► Steps ─► RunLengthFormatter ─► display tokens
//! ```
//!
//! Every stage is pulled lazily, so display tokens are handed to the caller as soon as a run
//! ends. If a later piece fails, the tokens already handed out stand and the rest of the line
//! is abandoned without flushing. Translator and formatter state are created per line.

use crate::crochet::error::{CrochetError, Result};
use crate::crochet::expanding::expand;
use crate::crochet::formatting::RunLengthFormatter;
use crate::crochet::lexing::{Tokenizer, TokenizerOptions};
use crate::crochet::translating::{translate, TranslatorState};
use log::debug;

/// Outcome of one line: everything displayed before an error, and the error if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineReport {
    pub displays: Vec<String>,
    pub error: Option<CrochetError>,
}

impl LineReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<Vec<String>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.displays),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineProcessor {
    tokenizer: Tokenizer,
}

impl LineProcessor {
    pub fn new(options: TokenizerOptions) -> Self {
        LineProcessor {
            tokenizer: Tokenizer::new(options),
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Process one line, handing each display token to `emit` as soon as it is complete
    pub fn process_line<F>(&self, line: &str, mut emit: F) -> Result<()>
    where
        F: FnMut(String),
    {
        let mut state = TranslatorState::new();
        let mut formatter = RunLengthFormatter::new();
        let mut steps = 0usize;

        for command in self.tokenizer.tokenize_line(line) {
            let command = command?;
            for stitch in expand(&command) {
                for step in translate(stitch?, &mut state) {
                    steps += 1;
                    if let Some(text) = formatter.format(&step) {
                        emit(text);
                    }
                }
            }
        }
        if let Some(text) = formatter.flush() {
            emit(text);
        }

        debug!(
            "translated line to {} steps, final offset {}",
            steps, state.offset
        );
        Ok(())
    }

    /// Process one line, keeping partial output alongside any error
    pub fn run_line(&self, line: &str) -> LineReport {
        let mut displays = Vec::new();
        let error = self
            .process_line(line, |text| displays.push(text))
            .err();
        LineReport { displays, error }
    }

    /// Display tokens of one line, or the first error
    pub fn display_line(&self, line: &str) -> Result<Vec<String>> {
        self.run_line(line).into_result()
    }
}

/// Display tokens of one line with default options
pub fn process_line(line: &str) -> Result<Vec<String>> {
    LineProcessor::default().display_line(line)
}
