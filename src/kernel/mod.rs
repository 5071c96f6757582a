//! DAXPY compute kernel and the per-worker task that runs it.

pub mod worker;
pub use worker::WorkerTask;

use crate::core::traits::Axpy;
use num_traits::Float;

/// Single-threaded `y = alpha * x + y` over the whole vector.
///
/// Reference path for tests and for the `T = 1` case; the parallel workers
/// run the same [`Axpy`] loop on their own views.
pub fn daxpy<T: Float>(alpha: T, x: &[T], y: &mut [T]) {
    assert_eq!(x.len(), y.len(), "x and y must have the same length");
    y.axpy(alpha, x);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daxpy_small_fixed_case() {
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let mut y = vec![4.0, 3.0, 2.0, 1.0];
        daxpy(2.0, &x, &mut y);
        assert_eq!(y, vec![4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn daxpy_zero_alpha_is_identity() {
        let x = vec![9.0f32; 3];
        let mut y = vec![1.0f32, -2.0, 3.5];
        daxpy(0.0, &x, &mut y);
        assert_eq!(y, vec![1.0, -2.0, 3.5]);
    }
}
