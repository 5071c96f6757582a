//! Coordinator for one measured DAXPY run.
//!
//! This module provides the `RunContext` struct, which owns the input vector,
//! the accumulator vector and the scalar multiplier, and drives a run:
//!
//! 1. Partition `[0, N)` into `T` spans and carve one worker task per span.
//! 2. Open the measurement window (`reset stats`).
//! 3. Dispatch every task and wait for all of them (join barrier).
//! 4. Close the measurement window (`dump stats`, then `exit`).
//!
//! Only step 3 sits inside the window. Allocation, seeding, partitioning and
//! verification all happen outside it.

use crate::config::BenchOptions;
use crate::core::Shape;
use crate::error::BenchError;
use crate::measure::Window;
use crate::parallel::Dispatch;
use crate::partition::{Partition, RemainderPolicy};
use crate::utils::seed::{seed_accumulator, seed_input};
use crate::utils::stats::RunStats;
use num_traits::Float;

/// Owner of the data for a run; workers only ever see borrowed views.
#[derive(Debug, Clone)]
pub struct RunContext<T> {
    input: Vec<T>,
    acc: Vec<T>,
    alpha: T,
    shape: Shape,
    policy: RemainderPolicy,
}

impl<T: Float + Send + Sync> RunContext<T> {
    /// Build from explicit data. Fails if the vectors differ in length or the
    /// worker count is not in `[1, len]`.
    pub fn new(
        input: Vec<T>,
        acc: Vec<T>,
        alpha: T,
        workers: usize,
        policy: RemainderPolicy,
    ) -> Result<Self, BenchError> {
        if input.len() != acc.len() {
            return Err(BenchError::LengthMismatch { input: input.len(), accumulator: acc.len() });
        }
        let shape = Shape::new(input.len(), workers)?;
        Ok(Self { input, acc, alpha, shape, policy })
    }

    /// Build with the deterministic seed: `x[i] = i`, `y[i] = N - i`.
    pub fn seeded(shape: Shape, alpha: T, policy: RemainderPolicy) -> Self {
        let n = shape.len();
        Self {
            input: seed_input(n),
            acc: seed_accumulator(n),
            alpha,
            shape,
            policy,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    pub fn input(&self) -> &[T] {
        &self.input
    }

    pub fn accumulator(&self) -> &[T] {
        &self.acc
    }

    /// Give up ownership of the accumulator.
    pub fn into_accumulator(self) -> Vec<T> {
        self.acc
    }

    /// The partition a run will use.
    pub fn partition(&self) -> Partition {
        Partition::new(self.shape, self.policy)
    }

    /// Execute one pass of `y = alpha * x + y` in parallel inside `window`.
    ///
    /// The window is opened immediately before dispatch and closed
    /// immediately after every worker has been joined. If dispatch fails the
    /// error is returned and the window is left without its end signals.
    pub fn run<D: Dispatch>(&mut self, dispatcher: &D, window: &mut Window) -> Result<RunStats, BenchError> {
        let partition = self.partition();
        let max_span = partition.spans().iter().map(|s| s.len()).max().unwrap_or(0);
        let tasks = partition.carve(&self.input, &mut self.acc, self.alpha);
        log::debug!(
            "dispatching {} workers via {} (longest span {})",
            tasks.len(),
            dispatcher.name(),
            max_span
        );

        window.begin();
        dispatcher.dispatch(tasks)?;
        let elapsed = window.end();

        let stats = RunStats::new::<T>(self.shape.workers(), self.shape.len(), max_span, dispatcher.name(), elapsed);
        log::info!(
            "{} workers over {} elements in {:?} ({:.3} MB/s)",
            stats.workers,
            stats.len,
            stats.elapsed,
            stats.bandwidth_mb_s()
        );
        Ok(stats)
    }
}

impl RunContext<f64> {
    /// Seeded f64 context from startup options.
    pub fn from_options(opts: &BenchOptions) -> Result<Self, BenchError> {
        Ok(Self::seeded(opts.shape()?, opts.alpha, opts.policy))
    }
}
