//! Lexing: from a raw line to commands
//!
//! Lexing happens in two steps:
//!
//! 1. [`splitter`] breaks the line into whitespace-separated pieces, keeping `[...]` groups whole
//! 2. [`tokenizer`] turns each piece into a [`Command`](crate::crochet::stitch::Command),
//!    recursing into group bodies
//!
//! Both steps are lazy: pieces are split and tokenized only as the caller pulls commands.
//! [`words`] holds the logos lexer that classifies non-group pieces.

pub mod splitter;
pub mod tokenizer;
pub mod words;

pub use splitter::{split_line, Pieces};
pub use tokenizer::{Commands, Tokenizer, TokenizerOptions};
