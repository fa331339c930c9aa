//! Translation: from stitches to simulator steps
//!
//! The simulator addresses the stitch being worked into by how many stitches back it is.
//! Back and skip stitches move the working position without producing a step; the running
//! drift is the translator's only state and lives in a caller-owned [`TranslatorState`], so two
//! lines translated with two states can never interfere.
//!
//! | Stitch | Emits | Offset |
//! |---|---|---|
//! | `c` | `c` | |
//! | `sk` | | -1 |
//! | `bk` | | +1 |
//! | `sc` | `sc-o` | |
//! | `inc` | `sc-o`, `sc-(o+1)` | +1 |
//! | `dec` | `sc-o-(o-1)` | -1 |
//! | `incdec` | `sc-o`, `sc-o-(o+1)`, `sc-(o+1)` | +1 |

use crate::crochet::stitch::Stitch;
use crate::crochet::step::Step;

/// Most steps a single stitch translates to
pub const MAX_STEPS_PER_STITCH: usize = 3;

/// Running offset of one line's translation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslatorState {
    pub offset: i64,
}

impl TranslatorState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Steps emitted for one stitch
#[derive(Debug, Clone)]
pub struct Steps {
    buf: [Step; MAX_STEPS_PER_STITCH],
    len: usize,
    pos: usize,
}

impl Steps {
    fn none() -> Self {
        Steps {
            buf: [Step::Chain; MAX_STEPS_PER_STITCH],
            len: 0,
            pos: 0,
        }
    }

    fn of(steps: &[Step]) -> Self {
        let mut out = Self::none();
        out.buf[..steps.len()].copy_from_slice(steps);
        out.len = steps.len();
        out
    }
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.pos == self.len {
            return None;
        }
        let step = self.buf[self.pos];
        self.pos += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps {}

/// Translate one stitch, updating the line's offset
pub fn translate(stitch: Stitch, state: &mut TranslatorState) -> Steps {
    let o = state.offset;
    match stitch {
        Stitch::Chain => Steps::of(&[Step::Chain]),
        Stitch::Skip => {
            state.offset -= 1;
            Steps::none()
        }
        Stitch::Back => {
            state.offset += 1;
            Steps::none()
        }
        Stitch::SingleCrochet => Steps::of(&[Step::sc(o)]),
        Stitch::Increase => {
            state.offset += 1;
            Steps::of(&[Step::sc(o), Step::sc(o + 1)])
        }
        Stitch::Decrease => {
            state.offset -= 1;
            Steps::of(&[Step::sc2(o, o - 1)])
        }
        Stitch::IncreaseDecrease => {
            state.offset += 1;
            Steps::of(&[Step::sc(o), Step::sc2(o, o + 1), Step::sc(o + 1)])
        }
    }
}

/// Translate a whole stitch sequence from a fresh state
pub fn translate_all<I>(stitches: I) -> Vec<Step>
where
    I: IntoIterator<Item = Stitch>,
{
    let mut state = TranslatorState::new();
    stitches
        .into_iter()
        .flat_map(|stitch| translate(stitch, &mut state))
        .collect()
}
