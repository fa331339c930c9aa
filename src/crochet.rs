//! Main module for the crochet notation translator
//!
//! A line of shorthand flows through five stages:
//!
//! ```text
//! "mc(6) [sc inc]6"
//!     │ lexing::splitter      pieces, groups kept whole
//!     │ lexing::tokenizer     Command values
//!     │ expanding             flat Stitch sequence
//!     │ translating           Step values with stitch-ago offsets
//!     ▼ formatting            run-length display tokens
//! ```
//!
//! [`pipeline`] drives the stages lazily for one line; [`transforms`] exposes them as
//! composable whole-line stages.

pub mod config;
pub mod error;
pub mod expanding;
pub mod formatting;
pub mod lexing;
pub mod logging;
pub mod pipeline;
pub mod step;
pub mod stitch;
pub mod transforms;
pub mod translating;

pub use error::{CrochetError, ErrorCategory, Result};
pub use pipeline::{process_line, LineProcessor, LineReport};
