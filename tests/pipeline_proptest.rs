//! Property-based tests for expansion and translation
//!
//! These check the counting rules of groups and patterns over many sizes rather than a few
//! hand-picked ones.

use proptest::prelude::*;
use stitchwork::crochet::error::ErrorCategory;
use stitchwork::crochet::stitch::Stitch;
use stitchwork::crochet::transforms::standard::{TO_STEPS, TO_STITCHES};

fn stitches(line: &str) -> Vec<Stitch> {
    TO_STITCHES
        .run(line.to_string())
        .expect("line to expand")
}

fn keyword() -> impl Strategy<Value = Stitch> {
    prop::sample::select(Stitch::ALL.to_vec())
}

proptest! {
    #[test]
    fn group_repeats_its_body(body in prop::collection::vec(keyword(), 1..6), repeat in 1u32..8) {
        let words: Vec<&str> = body.iter().map(|s| s.keyword()).collect();
        let once = stitches(&words.join(" "));
        let grouped = stitches(&format!("[{}]{}", words.join(" "), repeat));

        prop_assert_eq!(grouped.len(), once.len() * repeat as usize);
        for chunk in grouped.chunks(once.len()) {
            prop_assert_eq!(chunk, once.as_slice());
        }
    }

    #[test]
    fn every_keyword_is_one_stitch(stitch in keyword()) {
        prop_assert_eq!(stitches(stitch.keyword()), vec![stitch]);
    }

    #[test]
    fn magic_circle_length(n in 1u32..200) {
        let expanded = stitches(&format!("mc({})", n));
        prop_assert_eq!(expanded.len() as u32, 2 + 2 * (n - 1));
        prop_assert_eq!(&expanded[..2], &[Stitch::Chain, Stitch::Chain]);
    }

    #[test]
    fn magic_circle_closes_back_to_the_ring(n in 1u32..200) {
        let steps = TO_STEPS.run(format!("mc({})", n)).unwrap();
        prop_assert_eq!(steps.len() as u32, n + 1);
    }

    #[test]
    fn magic_ellipse_length(n in 1u32..200) {
        let expanded = stitches(&format!("me({})", n));
        prop_assert_eq!(expanded.len() as u32, 16 + 5 * n);
    }

    #[test]
    fn bend_rows_add_up(r in 1u32..300) {
        let expanded = stitches(&format!("bend({},2)", r));
        let r = r as usize;

        let first_row = &expanded[..r];
        prop_assert!(first_row
            .iter()
            .all(|s| matches!(s, Stitch::Chain | Stitch::SingleCrochet)));

        let count = |kind: Stitch| expanded.iter().filter(|s| **s == kind).count();
        prop_assert_eq!(count(Stitch::Back), r);
        prop_assert_eq!(count(Stitch::Skip), r);
        prop_assert_eq!(expanded.len() - 2 * r, 2 * r);
    }

    #[test]
    fn bend_only_supports_depth_two(r in 1u32..100, d in 1u32..20) {
        prop_assume!(d != 2);
        let err = TO_STITCHES.run(format!("bend({},{})", r, d)).unwrap_err();
        prop_assert_eq!(err.category(), ErrorCategory::Unsupported);
    }
}
