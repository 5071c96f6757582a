//! Property tests for the static partitioner.
//!
//! Every partition must cover `[0, N)` exactly once with contiguous spans, the
//! last span must end at `N`, and each remainder policy must place the
//! `N mod T` leftover elements where it promises to.

use daxpy_sim::core::Shape;
use daxpy_sim::partition::{Partition, RemainderPolicy};
use proptest::prelude::*;

fn shape_strategy() -> impl Strategy<Value = (usize, usize)> {
    (1usize..5_000).prop_flat_map(|n| (Just(n), 1usize..=n.min(257)))
}

fn policy_strategy() -> impl Strategy<Value = RemainderPolicy> {
    prop_oneof![Just(RemainderPolicy::LastWorker), Just(RemainderPolicy::Spread)]
}

proptest! {
    #[test]
    fn spans_cover_range_exactly_once((n, t) in shape_strategy(), policy in policy_strategy()) {
        let p = Partition::new(Shape::new(n, t).unwrap(), policy);
        prop_assert_eq!(p.workers(), t);
        prop_assert!(p.check_cover(n).is_ok());

        let mut hits = vec![0u8; n];
        for span in p.spans() {
            for j in span.range() {
                hits[j] += 1;
            }
        }
        prop_assert!(hits.iter().all(|&h| h == 1));
    }

    #[test]
    fn spans_are_contiguous((n, t) in shape_strategy(), policy in policy_strategy()) {
        let p = Partition::new(Shape::new(n, t).unwrap(), policy);
        let spans = p.spans();
        prop_assert_eq!(spans[0].start, 0);
        for w in spans.windows(2) {
            prop_assert_eq!(w[0].end, w[1].start);
        }
        prop_assert_eq!(spans[t - 1].end, n);
        prop_assert!(spans.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn last_worker_absorbs_whole_remainder((n, t) in shape_strategy()) {
        let p = Partition::new(Shape::new(n, t).unwrap(), RemainderPolicy::LastWorker);
        let chunk = n / t;
        let spans = p.spans();
        for s in &spans[..t - 1] {
            prop_assert_eq!(s.len(), chunk);
        }
        let last = spans[t - 1].len();
        prop_assert_eq!(last, chunk + n % t);
        if n % t != 0 {
            prop_assert!(last > chunk && last < chunk + t);
        }
    }

    #[test]
    fn spread_lengths_differ_by_at_most_one((n, t) in shape_strategy()) {
        let p = Partition::new(Shape::new(n, t).unwrap(), RemainderPolicy::Spread);
        let chunk = n / t;
        let rem = n % t;
        for (i, s) in p.spans().iter().enumerate() {
            let want = if i < rem { chunk + 1 } else { chunk };
            prop_assert_eq!(s.len(), want);
        }
    }
}

#[test]
fn ten_over_three_matches_reference_split() {
    let p = Partition::new(Shape::new(10, 3).unwrap(), RemainderPolicy::LastWorker);
    let got: Vec<_> = p.spans().iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(got, vec![(0, 3), (3, 6), (6, 10)]);
}

#[test]
fn boundary_worker_counts() {
    for policy in [RemainderPolicy::LastWorker, RemainderPolicy::Spread] {
        let one = Partition::new(Shape::new(7, 1).unwrap(), policy);
        assert_eq!(one.spans().len(), 1);
        assert_eq!(one.spans()[0].range(), 0..7);

        let per_elem = Partition::new(Shape::new(7, 7).unwrap(), policy);
        assert!(per_elem.spans().iter().enumerate().all(|(i, s)| s.start == i && s.len() == 1));
    }
}

#[test]
fn reference_build_shape() {
    // 10240 elements over 3 workers: 3413, 3413, 3414
    let p = Partition::new(Shape::new(10_240, 3).unwrap(), RemainderPolicy::LastWorker);
    let lens: Vec<_> = p.spans().iter().map(|s| s.len()).collect();
    assert_eq!(lens, vec![3413, 3413, 3414]);
}
