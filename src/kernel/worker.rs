// Worker task: one span's worth of the DAXPY update

use crate::core::traits::Axpy;
use crate::partition::Span;
use num_traits::Float;

/// Everything one worker needs: its identity, its span, and borrowed views
/// of the input and accumulator restricted to that span.
///
/// Views are slices of exactly `span.len()` elements, so a worker cannot
/// touch indices outside its span. Accumulator views handed to different
/// workers never alias.
#[derive(Debug)]
pub struct WorkerTask<'a, T> {
    id: usize,
    span: Span,
    alpha: T,
    input: &'a [T],
    acc: &'a mut [T],
}

impl<'a, T: Copy> WorkerTask<'a, T> {
    pub(crate) fn new(id: usize, span: Span, alpha: T, input: &'a [T], acc: &'a mut [T]) -> Self {
        debug_assert_eq!(input.len(), span.len());
        debug_assert_eq!(acc.len(), span.len());
        Self { id, span, alpha, input, acc }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl<T: Float> WorkerTask<'_, T> {
    /// Apply `acc[j] = alpha * input[j] + acc[j]` over the span. Consumes the
    /// task; returning is the completion signal.
    pub fn run(self) {
        self.acc.axpy(self.alpha, self.input);
    }
}
