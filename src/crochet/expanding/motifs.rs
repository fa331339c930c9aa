//! Pattern layouts
//!
//! Each pattern is laid out as a short list of [`Motif`]s: a fixed run of stitches worked a
//! number of times. The layout is computed up front (it is a handful of entries no matter how
//! large the counts are) and then walked lazily by [`MotifIter`].
//!
//! The magic ellipse template is hand-derived and reproduced exactly as written; do not try to
//! fold its pieces together.

use crate::crochet::error::{CrochetError, Result};
use crate::crochet::stitch::{Pattern, Stitch};
use log::debug;

const C: &[Stitch] = &[Stitch::Chain];
const SC: &[Stitch] = &[Stitch::SingleCrochet];
const BK: &[Stitch] = &[Stitch::Back];
const SK: &[Stitch] = &[Stitch::Skip];
const BK_SC: &[Stitch] = &[Stitch::Back, Stitch::SingleCrochet];
const BK_SC_BK: &[Stitch] = &[Stitch::Back, Stitch::SingleCrochet, Stitch::Back];
const ELLIPSE_TURN: &[Stitch] = &[
    Stitch::Back,
    Stitch::SingleCrochet,
    Stitch::Back,
    Stitch::SingleCrochet,
    Stitch::Back,
    Stitch::SingleCrochet,
];
const ELLIPSE_CLOSE: &[Stitch] = &[
    Stitch::SingleCrochet,
    Stitch::Back,
    Stitch::SingleCrochet,
    Stitch::Skip,
];

/// The only bend depth the layout knows how to build
pub const SUPPORTED_BEND_DEPTH: u32 = 2;

/// A run of stitches worked `repeat` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motif {
    pub stitches: &'static [Stitch],
    pub repeat: u32,
}

impl Motif {
    pub const fn new(stitches: &'static [Stitch], repeat: u32) -> Self {
        Motif { stitches, repeat }
    }

    /// Number of stitches this motif expands to
    pub fn len(&self) -> u64 {
        self.stitches.len() as u64 * u64::from(self.repeat)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lay out a pattern as motifs
pub fn layout(pattern: &Pattern) -> Result<Vec<Motif>> {
    let motifs = match *pattern {
        Pattern::MagicCircle {
            initial_stitch_count,
        } => magic_circle(initial_stitch_count)?,
        Pattern::MagicEllipse {
            extended_stitch_count,
        } => magic_ellipse(extended_stitch_count),
        Pattern::Bend {
            round_stitch_count,
            depth,
        } => BendLayout::new(round_stitch_count, depth)?.motifs(),
    };
    debug!(
        "laid out {} as {} motifs ({} stitches)",
        pattern,
        motifs.len(),
        motifs.iter().map(Motif::len).sum::<u64>()
    );
    Ok(motifs)
}

/// Two foundation chains, then the ring closed one stitch at a time
fn magic_circle(initial_stitch_count: u32) -> Result<Vec<Motif>> {
    let ring = initial_stitch_count.checked_sub(1).ok_or_else(|| {
        CrochetError::internal(format!(
            "magic circle needs at least one stitch, got {}",
            initial_stitch_count
        ))
    })?;
    Ok(vec![Motif::new(C, 2), Motif::new(BK_SC, ring)])
}

fn magic_ellipse(n: u32) -> Vec<Motif> {
    vec![
        Motif::new(C, 1),
        Motif::new(C, n),
        Motif::new(C, 2),
        Motif::new(BK, 1),
        Motif::new(SC, 1),
        Motif::new(BK, 1),
        Motif::new(BK_SC_BK, n),
        Motif::new(ELLIPSE_TURN, 1),
        Motif::new(SC, n),
        Motif::new(ELLIPSE_CLOSE, 1),
    ]
}

/// Segment arithmetic of a two-row bend
///
/// Both rows are padded with single crochets so that each row's tracked stitches add up to
/// the round's stitch count; the remainder of the segment division always lands in the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BendLayout {
    pub round_stitch_count: u32,
    pub segment_length: u32,
    pub padding: u32,
}

impl BendLayout {
    pub fn new(round_stitch_count: u32, depth: u32) -> Result<Self> {
        if depth != SUPPORTED_BEND_DEPTH {
            return Err(CrochetError::UnsupportedBend {
                round_stitch_count,
                depth,
            });
        }

        let segment_length = round_stitch_count / (depth * 2);
        // segment, doubled segment, segment
        let stitches_in_loop = u64::from(segment_length) * 4;
        let padding = u64::from(round_stitch_count)
            .checked_sub(stitches_in_loop)
            .and_then(|p| u32::try_from(p).ok())
            .ok_or_else(|| {
                CrochetError::internal(format!(
                    "bend({},{}) segments overflow the round",
                    round_stitch_count, depth
                ))
            })?;

        Ok(BendLayout {
            round_stitch_count,
            segment_length,
            padding,
        })
    }

    pub fn motifs(&self) -> Vec<Motif> {
        let segment = self.segment_length;
        let round = self.round_stitch_count;
        vec![
            // first row
            Motif::new(SC, segment),
            Motif::new(C, 2 * segment),
            Motif::new(SC, segment),
            Motif::new(SC, self.padding),
            // second row
            Motif::new(SC, segment),
            Motif::new(BK, round),
            Motif::new(SC, 2 * segment),
            Motif::new(SK, round),
            Motif::new(SC, segment),
            Motif::new(SC, self.padding),
        ]
    }
}

/// Lazy walk over a motif list
#[derive(Debug, Clone)]
pub struct MotifIter {
    motifs: Vec<Motif>,
    index: usize,
    pass: u32,
    pos: usize,
}

impl MotifIter {
    pub fn new(motifs: Vec<Motif>) -> Self {
        MotifIter {
            motifs,
            index: 0,
            pass: 0,
            pos: 0,
        }
    }
}

impl Iterator for MotifIter {
    type Item = Stitch;

    fn next(&mut self) -> Option<Stitch> {
        while let Some(motif) = self.motifs.get(self.index) {
            if self.pass < motif.repeat && !motif.stitches.is_empty() {
                let stitch = motif.stitches[self.pos];
                self.pos += 1;
                if self.pos == motif.stitches.len() {
                    self.pos = 0;
                    self.pass += 1;
                }
                return Some(stitch);
            }
            self.index += 1;
            self.pass = 0;
            self.pos = 0;
        }
        None
    }
}
