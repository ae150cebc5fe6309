//! Property-based tests for range normalization and sequence alignment.
//!
//! Uses proptest to check the alignment invariants over randomly generated
//! frame ranges, including nested, touching, and widely separated ones.

use ncache_ranges::{
    covered_coordinates, normalize_all, normalize_ranges, range_ranges, AlignConfig, Interval,
    RangeAligner,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Strategy for frame ranges of up to 200 frames anywhere in -5000..5000
fn arb_interval() -> impl Strategy<Value = Interval> {
    (-5000i64..5000, 0i64..200)
        .prop_map(|(start, extent)| Interval::new(start, start + extent).unwrap())
}

/// Tags every frame with its job and absolute frame number.
fn tagged(job: u8, range: Interval) -> Vec<(u8, i64)> {
    range.frames().map(|frame| (job, frame)).collect()
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(a in arb_interval(), b in arb_interval()) {
        let (na, nb) = normalize_ranges(a, b).unwrap();
        prop_assert_eq!(normalize_ranges(na, nb).unwrap(), (na, nb));
    }

    #[test]
    fn prop_normalize_starts_at_zero_and_keeps_extents(a in arb_interval(), b in arb_interval()) {
        let (na, nb) = normalize_ranges(a, b).unwrap();
        prop_assert_eq!(na.start().min(nb.start()), 0);
        prop_assert_eq!(na.extent(), a.extent());
        prop_assert_eq!(nb.extent(), b.extent());
    }

    #[test]
    fn prop_normalize_leaves_no_gap(a in arb_interval(), b in arb_interval()) {
        let (na, nb) = normalize_ranges(a, b).unwrap();
        let (first, second) = if na <= nb { (na, nb) } else { (nb, na) };
        prop_assert!(second.start() <= first.end() + 1);
    }

    #[test]
    fn prop_normalize_all_agrees_with_pair(a in arb_interval(), b in arb_interval()) {
        let (na, nb) = normalize_ranges(a, b).unwrap();
        prop_assert_eq!(normalize_all(&[a, b]).unwrap(), vec![na, nb]);
    }

    #[test]
    fn prop_aligned_lengths_match(a in arb_interval(), b in arb_interval()) {
        let aligner = RangeAligner::default();
        let (la, lb) = aligner.overlap(tagged(0, a), tagged(1, b), a, b).unwrap();
        prop_assert_eq!(la.len(), lb.len());

        let inclusive = RangeAligner::new(AlignConfig::inclusive()).unwrap();
        let (ia, ib) = inclusive.overlap(tagged(0, a), tagged(1, b), a, b).unwrap();
        prop_assert_eq!(ia.len(), ib.len());
        prop_assert_eq!(ia.len(), la.len() + 1);
        prop_assert!(ia.len() as u64 >= a.extent().max(b.extent()));
    }

    #[test]
    fn prop_inclusive_alignment_preserves_values(a in arb_interval(), b in arb_interval()) {
        let aligner = RangeAligner::new(AlignConfig::inclusive()).unwrap();
        let (na, nb) = normalize_ranges(a, b).unwrap();
        let (la, lb) = aligner.overlap(tagged(0, a), tagged(1, b), a, b).unwrap();

        for (aligned, original, normalized) in [(&la, a, na), (&lb, b, nb)] {
            let present: Vec<_> = aligned.iter().flatten().copied().collect();
            prop_assert_eq!(present, tagged(aligned_job(aligned), original));
            for (position, value) in aligned.iter().enumerate() {
                if let Some((_, frame)) = value {
                    let expected = normalized.start() + (frame - original.start());
                    prop_assert_eq!(position as i64, expected);
                }
            }
        }
    }

    #[test]
    fn prop_observed_alignment_cuts_at_most_last_frame(a in arb_interval(), b in arb_interval()) {
        let (la, lb) = RangeAligner::default()
            .overlap(tagged(0, a), tagged(1, b), a, b)
            .unwrap();
        let kept = la.iter().flatten().count() + lb.iter().flatten().count();
        let total = (a.extent() + b.extent()) as usize;
        prop_assert!(total - kept <= 2);
        prop_assert!(total - kept >= 1);
    }

    #[test]
    fn prop_normalize_all_many_ranges(ranges in prop::collection::vec(arb_interval(), 1..7)) {
        let normalized = normalize_all(&ranges).unwrap();
        prop_assert_eq!(normalized.iter().map(|r| r.start()).min(), Some(0));
        for (original, placed) in ranges.iter().zip(&normalized) {
            prop_assert_eq!(original.extent(), placed.extent());
        }

        let mut sorted = normalized.clone();
        sorted.sort();
        let mut reach = sorted[0].end();
        for range in &sorted[1..] {
            prop_assert!(range.start() <= reach + 1);
            reach = reach.max(range.end());
        }
    }

    #[test]
    fn prop_overlap_many_preserves_values_inclusive(
        ranges in prop::collection::vec(arb_interval(), 1..7)
    ) {
        let arrays: Vec<_> = ranges
            .iter()
            .enumerate()
            .map(|(job, range)| tagged(job as u8, *range))
            .collect();
        let normalized = normalize_all(&ranges).unwrap();
        let aligned = RangeAligner::new(AlignConfig::inclusive())
            .unwrap()
            .overlap_many(arrays.clone(), &ranges)
            .unwrap();

        prop_assert_eq!(aligned.len(), ranges.len());
        let len = aligned[0].len();
        for (job, row) in aligned.iter().enumerate() {
            prop_assert_eq!(row.len(), len);
            let present: Vec<_> = row.iter().flatten().copied().collect();
            prop_assert_eq!(&present, &arrays[job]);
            let first = row.iter().position(Option::is_some).unwrap();
            prop_assert_eq!(first as i64, normalized[job].start());
        }
    }

    #[test]
    fn prop_range_ranges_never_emits_gap(a in arb_interval(), b in arb_interval()) {
        let frames = range_ranges(a, b);
        for frame in &frames {
            prop_assert!(a.contains(*frame) || b.contains(*frame));
        }
        let unique: BTreeSet<_> = frames.iter().copied().collect();
        prop_assert_eq!(unique.len(), frames.len());
        prop_assert!(frames.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_range_ranges_is_symmetric(a in arb_interval(), b in arb_interval()) {
        prop_assert_eq!(range_ranges(a, b), range_ranges(b, a));
        prop_assert_eq!(range_ranges(a, b), covered_coordinates(&[a, b]));
    }
}

fn aligned_job(aligned: &[Option<(u8, i64)>]) -> u8 {
    aligned.iter().flatten().map(|(job, _)| *job).next().unwrap_or(0)
}
