//! Fan-out/fan-in dispatch of worker tasks.
//!
//! A dispatcher starts one execution unit per [`WorkerTask`], lets them all run
//! to completion, and returns only once every one of them has finished. That
//! return is the join barrier the coordinator closes the measurement window on.

use crate::error::BenchError;
use crate::kernel::WorkerTask;
use num_traits::Float;

pub mod threads;
pub use threads::ThreadDispatch;

#[cfg(feature = "rayon")]
pub mod rayon_pool;
#[cfg(feature = "rayon")]
pub use rayon_pool::RayonDispatch;

/// Run a batch of worker tasks concurrently and block until all complete.
pub trait Dispatch {
    /// Short backend name for logs and reports.
    fn name(&self) -> &'static str;
    /// Start every task, then join every task. Any failure to start a worker
    /// aborts the run; it never degrades to fewer workers.
    fn dispatch<T: Float + Send + Sync>(&self, tasks: Vec<WorkerTask<'_, T>>) -> Result<(), BenchError>;
}

/// Backend selector, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchKind {
    /// One scoped OS thread per worker.
    #[default]
    Threads,
    /// A fresh rayon pool sized to the worker count.
    Rayon,
}

pub enum Dispatcher {
    Threads(ThreadDispatch),
    #[cfg(feature = "rayon")]
    Rayon(RayonDispatch),
}

impl Dispatcher {
    /// Build the selected backend, optionally overriding the per-worker
    /// stack size.
    pub fn from_kind(kind: DispatchKind, stack_size: Option<usize>) -> Result<Self, BenchError> {
        match kind {
            DispatchKind::Threads => {
                let d = ThreadDispatch::new();
                Ok(Dispatcher::Threads(match stack_size {
                    Some(bytes) => d.with_stack_size(bytes),
                    None => d,
                }))
            }
            #[cfg(feature = "rayon")]
            DispatchKind::Rayon => {
                let d = RayonDispatch::new();
                Ok(Dispatcher::Rayon(match stack_size {
                    Some(bytes) => d.with_stack_size(bytes),
                    None => d,
                }))
            }
            #[cfg(not(feature = "rayon"))]
            DispatchKind::Rayon => Err(BenchError::Unsupported("rayon dispatch (built without the `rayon` feature)")),
        }
    }

    /// Per-worker stack size override, if any.
    pub fn stack_size(&self) -> Option<usize> {
        match self {
            Dispatcher::Threads(d) => d.stack_size(),
            #[cfg(feature = "rayon")]
            Dispatcher::Rayon(d) => d.stack_size(),
        }
    }
}

impl Dispatch for Dispatcher {
    fn name(&self) -> &'static str {
        match self {
            Dispatcher::Threads(d) => d.name(),
            #[cfg(feature = "rayon")]
            Dispatcher::Rayon(d) => d.name(),
        }
    }
    fn dispatch<T: Float + Send + Sync>(&self, tasks: Vec<WorkerTask<'_, T>>) -> Result<(), BenchError> {
        match self {
            Dispatcher::Threads(d) => d.dispatch(tasks),
            #[cfg(feature = "rayon")]
            Dispatcher::Rayon(d) => d.dispatch(tasks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_kind_applies_stack_size() {
        let d = Dispatcher::from_kind(DispatchKind::Threads, Some(1 << 20)).unwrap();
        assert_eq!(d.name(), "threads");
        assert_eq!(d.stack_size(), Some(1 << 20));
        let d = Dispatcher::from_kind(DispatchKind::Threads, None).unwrap();
        assert_eq!(d.stack_size(), None);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn from_kind_builds_rayon_backend() {
        let d = Dispatcher::from_kind(DispatchKind::Rayon, Some(512 * 1024)).unwrap();
        assert_eq!(d.name(), "rayon");
        assert_eq!(d.stack_size(), Some(512 * 1024));
    }
}
