//! Error types for the crochet pipeline
//!
//! Every stage reports failures through [`CrochetError`]. Errors fall into three categories:
//!
//! - **Lex**: a piece of the line has no recognizable shape (`mc(abc)`, `[sc]0`, `foo`)
//! - **Unsupported**: the shape is recognized but its parameters are outside what the
//!   expander can lay out (a bend deeper than 2, groups nested too deeply)
//! - **Internal**: an invariant of the pipeline itself broke
//!
//! Any error terminates processing of the current line. Messages always quote the offending
//! piece verbatim so the user can find it in their input.

use std::fmt;

/// Result type for the crochet pipeline.
pub type Result<T> = std::result::Result<T, CrochetError>;

/// Coarse classification of a [`CrochetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lex,
    Unsupported,
    Internal,
}

/// All errors that can occur while tokenizing, expanding or translating a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrochetError {
    /// A piece that matches no stitch keyword, pattern shape or group shape
    UnknownInput(String),
    /// A bend whose depth the expander cannot lay out
    UnsupportedBend {
        round_stitch_count: u32,
        depth: u32,
    },
    /// A group nested deeper than the configured limit
    NestingTooDeep { piece: String, limit: usize },
    /// A pipeline invariant was violated
    Internal(String),
}

impl CrochetError {
    pub fn unknown_input(piece: impl Into<String>) -> Self {
        CrochetError::UnknownInput(piece.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CrochetError::Internal(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CrochetError::UnknownInput(_) => ErrorCategory::Lex,
            CrochetError::UnsupportedBend { .. } | CrochetError::NestingTooDeep { .. } => {
                ErrorCategory::Unsupported
            }
            CrochetError::Internal(_) => ErrorCategory::Internal,
        }
    }
}

impl fmt::Display for CrochetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrochetError::UnknownInput(piece) => write!(f, "Unknown input '{}'.", piece),
            CrochetError::UnsupportedBend {
                round_stitch_count,
                depth,
            } => write!(
                f,
                "Only a bend depth of 2 is supported, found 'bend({},{})'.",
                round_stitch_count, depth
            ),
            CrochetError::NestingTooDeep { piece, limit } => write!(
                f,
                "Group '{}' is nested more than {} levels deep.",
                piece, limit
            ),
            CrochetError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CrochetError {}
