//! Statistics for a measured run & verification of the seeded result.

use super::seed::from_index;
use crate::error::BenchError;
use num_traits::Float;
use std::fmt;
use std::time::Duration;

/// Relative tolerance used by [`verify_seeded`].
pub const VERIFY_EPSILON: f64 = 1.0e-8;

/// What one measured run did and how long the window stayed open.
#[derive(Clone, Debug)]
pub struct RunStats {
    pub workers: usize,
    pub len: usize,
    /// Host wall time between window begin and end.
    pub elapsed: Duration,
    /// Bytes moved by the kernel: read x, read y, write y.
    pub bytes: usize,
    /// Dispatch backend that ran the workers.
    pub backend: &'static str,
    /// Longest span handed to a single worker.
    pub max_span: usize,
}

impl RunStats {
    pub fn new<T>(workers: usize, len: usize, max_span: usize, backend: &'static str, elapsed: Duration) -> Self {
        Self {
            workers,
            len,
            elapsed,
            bytes: 3 * len * std::mem::size_of::<T>(),
            backend,
            max_span,
        }
    }

    /// Effective bandwidth in MB/s (10^6 bytes), 0 if the window was too
    /// short to time.
    pub fn bandwidth_mb_s(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 { 1.0e-6 * self.bytes as f64 / secs } else { 0.0 }
    }

    /// Ratio of the heaviest worker's load to a perfectly even share.
    pub fn imbalance(&self) -> f64 {
        self.max_span as f64 * self.workers as f64 / self.len as f64
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of workers     = {}", self.workers)?;
        writeln!(f, "Vector length         = {}", self.len)?;
        writeln!(f, "Dispatch backend      = {}", self.backend)?;
        writeln!(f, "Load imbalance        = {:.4}", self.imbalance())?;
        write!(
            f,
            "Rate (MB/s): {:10.3} Window time (s): {:10.6}",
            self.bandwidth_mb_s(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Check `acc` against the closed form of one DAXPY pass over the seeded
/// data: `acc[i] = alpha * i + (n - i)`.
pub fn verify_seeded<T: Float>(alpha: T, acc: &[T]) -> Result<(), BenchError> {
    let n = acc.len();
    let eps = T::from(VERIFY_EPSILON).unwrap_or_else(T::epsilon);
    for (i, &observed) in acc.iter().enumerate() {
        let expected = alpha * from_index::<T>(i) + from_index::<T>(n - i);
        let scale = expected.abs().max(T::one());
        if (observed - expected).abs() / scale > eps || observed.is_nan() {
            return Err(BenchError::Validation {
                index: i,
                expected: expected.to_f64().unwrap_or(f64::NAN),
                observed: observed.to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    Ok(())
}
