//! Core vector traits for daxpy-sim.

use num_traits::Float;

/// Scaled vector update: y ← α x + y.
pub trait Axpy<T> {
    /// Compute self = alpha · x + self, element by element.
    fn axpy(&mut self, alpha: T, x: &Self);
}

impl<T: Float> Axpy<T> for [T] {
    #[inline]
    fn axpy(&mut self, alpha: T, x: &[T]) {
        debug_assert_eq!(self.len(), x.len(), "axpy operands differ in length");
        // zipped iteration keeps the loop free of per-element bounds checks
        for (yi, &xi) in self.iter_mut().zip(x) {
            *yi = alpha * xi + *yi;
        }
    }
}
