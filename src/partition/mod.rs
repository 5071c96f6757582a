//! Static work partitioning.
//!
//! A [`Partition`] divides `[0, N)` into `T` contiguous half-open [`Span`]s,
//! one per worker, that cover every index exactly once. The leftover
//! `N mod T` elements are placed according to a [`RemainderPolicy`]:
//!
//! - [`RemainderPolicy::LastWorker`]: every span gets `floor(N/T)` elements and
//!   the final span absorbs the whole remainder. Simple, at the cost of the last
//!   worker doing up to `T-1` extra elements.
//! - [`RemainderPolicy::Spread`]: the first `N mod T` spans get one extra
//!   element each, so span lengths differ by at most one.
//!
//! [`Partition::carve`] turns the spans into per-worker views over the input and
//! accumulator vectors. The accumulator is split with successive
//! `split_at_mut` calls, so the mutable views are disjoint by construction.

use crate::core::Shape;
use crate::kernel::WorkerTask;
use std::ops::Range;

/// Half-open index range `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Where the `N mod T` leftover elements go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderPolicy {
    /// Final worker absorbs the entire remainder.
    #[default]
    LastWorker,
    /// First `N mod T` workers take one extra element each.
    Spread,
}

/// Ordered, fully covering, non-overlapping division of `[0, N)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    len: usize,
    policy: RemainderPolicy,
    spans: Vec<Span>,
}

impl Partition {
    /// Compute the spans for `shape` under `policy`. Infallible: `shape`
    /// already guarantees `1 <= T <= N`.
    pub fn new(shape: Shape, policy: RemainderPolicy) -> Self {
        let t = shape.workers();
        let chunk = shape.chunk();
        let spans = match policy {
            RemainderPolicy::LastWorker => (0..t)
                .map(|i| {
                    let start = i * chunk;
                    let end = if i == t - 1 { shape.len() } else { (i + 1) * chunk };
                    Span { start, end }
                })
                .collect(),
            RemainderPolicy::Spread => {
                let rem = shape.remainder();
                (0..t)
                    .map(|i| {
                        // workers below `rem` carry one extra element
                        let start = i * chunk + i.min(rem);
                        let end = start + chunk + usize::from(i < rem);
                        Span { start, end }
                    })
                    .collect()
            }
        };
        log::debug!(
            "partitioned {} elements over {} workers ({:?}, chunk {})",
            shape.len(),
            t,
            policy,
            chunk
        );
        Self { len: shape.len(), policy, spans }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Total covered length N.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of spans T.
    pub fn workers(&self) -> usize {
        self.spans.len()
    }

    pub fn policy(&self) -> RemainderPolicy {
        self.policy
    }

    /// Check that the spans cover `[0, n)` contiguously with no gaps or overlaps.
    /// Returns the index of the first offending span on failure.
    pub fn check_cover(&self, n: usize) -> Result<(), usize> {
        let mut expected_start = 0;
        for (i, span) in self.spans.iter().enumerate() {
            if span.start != expected_start || span.end < span.start || span.end > n {
                return Err(i);
            }
            expected_start = span.end;
        }
        if expected_start == n {
            Ok(())
        } else {
            Err(self.spans.len().saturating_sub(1))
        }
    }

    /// Split the vector pair into one [`WorkerTask`] per span.
    ///
    /// `input` and `acc` must both have length [`Partition::len`]; the
    /// coordinator checks this before carving.
    pub fn carve<'a, T>(&self, input: &'a [T], acc: &'a mut [T], alpha: T) -> Vec<WorkerTask<'a, T>>
    where
        T: Copy,
    {
        debug_assert_eq!(input.len(), self.len);
        debug_assert_eq!(acc.len(), self.len);
        let mut tasks = Vec::with_capacity(self.spans.len());
        let mut rest = acc;
        for (id, span) in self.spans.iter().enumerate() {
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(span.len());
            tasks.push(WorkerTask::new(id, *span, alpha, &input[span.range()], head));
            rest = tail;
        }
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_of(n: usize, t: usize, policy: RemainderPolicy) -> Vec<(usize, usize)> {
        let shape = Shape::new(n, t).unwrap();
        Partition::new(shape, policy)
            .spans()
            .iter()
            .map(|s| (s.start, s.end))
            .collect()
    }

    #[test]
    fn last_worker_absorbs_remainder() {
        assert_eq!(
            spans_of(10, 3, RemainderPolicy::LastWorker),
            vec![(0, 3), (3, 6), (6, 10)]
        );
    }

    #[test]
    fn spread_front_loads_remainder() {
        assert_eq!(
            spans_of(10, 3, RemainderPolicy::Spread),
            vec![(0, 4), (4, 7), (7, 10)]
        );
    }

    #[test]
    fn even_split_is_policy_independent() {
        assert_eq!(
            spans_of(12, 4, RemainderPolicy::LastWorker),
            spans_of(12, 4, RemainderPolicy::Spread)
        );
    }

    #[test]
    fn check_cover_flags_gap() {
        let p = Partition {
            len: 6,
            policy: RemainderPolicy::LastWorker,
            spans: vec![Span { start: 0, end: 2 }, Span { start: 3, end: 6 }],
        };
        assert_eq!(p.check_cover(6), Err(1));
    }

    #[test]
    fn carve_hands_out_span_sized_views() {
        let shape = Shape::new(5, 2).unwrap();
        let p = Partition::new(shape, RemainderPolicy::LastWorker);
        let x = vec![1.0; 5];
        let mut y = vec![0.0; 5];
        let tasks = p.carve(&x, &mut y, 1.0);
        let lens: Vec<usize> = tasks.iter().map(|t| t.span().len()).collect();
        assert_eq!(lens, vec![2, 3]);
    }
}
