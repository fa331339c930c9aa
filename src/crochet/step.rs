//! Simulator step encoding
//!
//! A [`Step`] is what the crochet simulator consumes: either a chain, or a single crochet worked
//! into the stitch `n` positions back (`sc-n`), or into two stitches at once (`sc-m-n`).

use serde::Serialize;
use std::fmt;

/// One instruction in the simulator's alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Chain,
    ScN { stitch_ago: i64 },
    ScMN { stitch_ago_1: i64, stitch_ago_2: i64 },
}

impl Step {
    pub fn sc(stitch_ago: i64) -> Self {
        Step::ScN { stitch_ago }
    }

    pub fn sc2(stitch_ago_1: i64, stitch_ago_2: i64) -> Self {
        Step::ScMN {
            stitch_ago_1,
            stitch_ago_2,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Chain => f.write_str("c"),
            Step::ScN { stitch_ago } => write!(f, "sc-{}", stitch_ago),
            Step::ScMN {
                stitch_ago_1,
                stitch_ago_2,
            } => write!(f, "sc-{}-{}", stitch_ago_1, stitch_ago_2),
        }
    }
}
