// rayon-based dispatch

use super::Dispatch;
use crate::error::BenchError;
use crate::kernel::WorkerTask;
use num_traits::Float;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;

/// Builds a scoped rayon pool with exactly one thread per task for every run
/// and broadcasts over it, so pool thread `i` runs task `i`. The pool's
/// threads are joined before `dispatch` returns.
#[derive(Debug, Default)]
pub struct RayonDispatch {
    stack_size: Option<usize>,
}

impl RayonDispatch {
    pub fn new() -> Self {
        Self { stack_size: None }
    }

    /// Override the per-worker stack size.
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    pub fn stack_size(&self) -> Option<usize> {
        self.stack_size
    }
}

impl Dispatch for RayonDispatch {
    fn name(&self) -> &'static str {
        "rayon"
    }

    fn dispatch<T: Float + Send + Sync>(&self, tasks: Vec<WorkerTask<'_, T>>) -> Result<(), BenchError> {
        let workers = tasks.len();
        // each slot is taken exactly once, by the pool thread with the same index
        let slots: Vec<Mutex<Option<WorkerTask<'_, T>>>> =
            tasks.into_iter().map(|t| Mutex::new(Some(t))).collect();

        let mut builder = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("daxpy-{i}"));
        if let Some(bytes) = self.stack_size {
            builder = builder.stack_size(bytes);
        }

        let outcomes = builder
            .build_scoped(
                |thread| thread.run(),
                |pool| {
                    pool.broadcast(|ctx| {
                        let id = ctx.index();
                        let task = slots
                            .get(id)
                            .and_then(|slot| slot.lock().ok().and_then(|mut guard| guard.take()));
                        match task {
                            Some(task) => panic::catch_unwind(AssertUnwindSafe(|| task.run()))
                                .map_err(|_| BenchError::WorkerPanicked(id)),
                            None => Ok(()),
                        }
                    })
                },
            )
            .map_err(|e| BenchError::Pool(e.to_string()))?;

        outcomes.into_iter().collect()
    }
}
