//! Piece tokenizer
//!
//! Turns each piece produced by the splitter into a [`Command`]. Groups are tokenized by
//! re-running the whole line tokenizer on their inner text, one level deeper; the nesting depth
//! is bounded by [`TokenizerOptions::max_group_depth`].

use crate::crochet::error::{CrochetError, Result};
use crate::crochet::lexing::splitter::Pieces;
use crate::crochet::lexing::words::{classify, Word};
use crate::crochet::stitch::{Command, Pattern, Stitch, StitchGroup};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// `[<inner>]<repeat>`; the greedy inner capture runs to the last closing bracket
static GROUP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^\[(.+)\]([0-9]+)$").unwrap());

/// Numeric arguments of a pattern piece, in order
static ARGUMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Lines starting with this marker produce no commands
pub const COMMENT_MARKER: &str = "//";

pub const DEFAULT_MAX_GROUP_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TokenizerOptions {
    /// How many levels of `[...]` may be nested inside each other
    pub max_group_depth: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions {
            max_group_depth: DEFAULT_MAX_GROUP_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    options: TokenizerOptions,
}

impl Tokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        Tokenizer { options }
    }

    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Lazily tokenize a whole line
    pub fn tokenize_line<'t, 'a>(&'t self, line: &'a str) -> Commands<'t, 'a> {
        self.tokenize_at_depth(line, 0)
    }

    /// Tokenize a single piece at the top level
    pub fn tokenize_piece(&self, piece: &str) -> Result<Command> {
        self.piece_at_depth(piece, 0)
    }

    fn tokenize_at_depth<'t, 'a>(&'t self, line: &'a str, depth: usize) -> Commands<'t, 'a> {
        let line = if line.starts_with(COMMENT_MARKER) {
            ""
        } else {
            line
        };
        Commands {
            tokenizer: self,
            pieces: Pieces::new(line),
            depth,
        }
    }

    fn piece_at_depth(&self, piece: &str, depth: usize) -> Result<Command> {
        let command = if piece.starts_with('[') {
            Command::Group(self.group(piece, depth)?)
        } else {
            single(piece)?
        };
        trace!("tokenized '{}' as {:?}", piece, command);
        Ok(command)
    }

    fn group(&self, piece: &str, depth: usize) -> Result<StitchGroup> {
        let captures = GROUP_REGEX
            .captures(piece)
            .ok_or_else(|| CrochetError::unknown_input(piece))?;
        let repeat = positive(piece, &captures[2])?;

        if depth >= self.options.max_group_depth {
            return Err(CrochetError::NestingTooDeep {
                piece: piece.to_string(),
                limit: self.options.max_group_depth,
            });
        }

        let inner = captures.get(1).map_or("", |m| m.as_str());
        let commands = self
            .tokenize_at_depth(inner, depth + 1)
            .collect::<Result<Vec<_>>>()?;

        Ok(StitchGroup { commands, repeat })
    }
}

/// Lazy iterator over the commands of one line
pub struct Commands<'t, 'a> {
    tokenizer: &'t Tokenizer,
    pieces: Pieces<'a>,
    depth: usize,
}

impl Iterator for Commands<'_, '_> {
    type Item = Result<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        let piece = self.pieces.next()?;
        Some(self.tokenizer.piece_at_depth(piece, self.depth))
    }
}

fn single(piece: &str) -> Result<Command> {
    let word = classify(piece).ok_or_else(|| CrochetError::unknown_input(piece))?;
    let command = match word {
        Word::Chain => Stitch::Chain.into(),
        Word::SingleCrochet => Stitch::SingleCrochet.into(),
        Word::Increase => Stitch::Increase.into(),
        Word::IncreaseDecrease => Stitch::IncreaseDecrease.into(),
        Word::Decrease => Stitch::Decrease.into(),
        Word::Skip => Stitch::Skip.into(),
        Word::Back => Stitch::Back.into(),
        Word::MagicCircle => {
            let [initial_stitch_count] = arguments::<1>(piece)?;
            Pattern::MagicCircle {
                initial_stitch_count,
            }
            .into()
        }
        Word::MagicEllipse => {
            let [extended_stitch_count] = arguments::<1>(piece)?;
            Pattern::MagicEllipse {
                extended_stitch_count,
            }
            .into()
        }
        Word::Bend => {
            let [round_stitch_count, depth] = arguments::<2>(piece)?;
            Pattern::Bend {
                round_stitch_count,
                depth,
            }
            .into()
        }
    };
    Ok(command)
}

/// Extract exactly `N` strictly positive arguments from a pattern piece
fn arguments<const N: usize>(piece: &str) -> Result<[u32; N]> {
    let mut values = [0; N];
    let mut found = ARGUMENT_REGEX.find_iter(piece);
    for value in values.iter_mut() {
        let digits = found
            .next()
            .ok_or_else(|| CrochetError::unknown_input(piece))?;
        *value = positive(piece, digits.as_str())?;
    }
    if found.next().is_some() {
        return Err(CrochetError::unknown_input(piece));
    }
    Ok(values)
}

/// Parse digits that must be a strictly positive count. Overflow counts as not finite.
fn positive(piece: &str, digits: &str) -> Result<u32> {
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CrochetError::unknown_input(piece)),
    }
}
