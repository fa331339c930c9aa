//! # stitchwork
//!
//! Translates crochet shorthand (`sc`, `inc`, `mc(6)`, `[sc inc]6`, ...) into the stitch-level
//! instructions of a crochet simulator, displayed in run-length form (`(sc-1)3`).
//!
//! See the [crochet module](crochet) for the stage layout.

pub mod crochet;
