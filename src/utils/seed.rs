//! Deterministic initial data, identical on every run.

use num_traits::Float;

/// `x[i] = i`.
pub fn seed_input<T: Float>(n: usize) -> Vec<T> {
    (0..n).map(|i| from_index(i)).collect()
}

/// `y[i] = n - i`.
pub fn seed_accumulator<T: Float>(n: usize) -> Vec<T> {
    (0..n).map(|i| from_index(n - i)).collect()
}

#[inline]
pub(crate) fn from_index<T: Float>(i: usize) -> T {
    // usize -> Float only fails for exotic float types; fall back to lossy f64
    T::from(i).unwrap_or_else(|| T::from(i as f64).unwrap_or_else(T::nan))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_match_closed_form() {
        let x: Vec<f64> = seed_input(4);
        let y: Vec<f64> = seed_accumulator(4);
        assert_eq!(x, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(y, vec![4.0, 3.0, 2.0, 1.0]);
    }
}
