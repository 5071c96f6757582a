// scoped OS-thread dispatch

use super::Dispatch;
use crate::error::BenchError;
use crate::kernel::WorkerTask;
use num_traits::Float;
use std::thread;

/// One freshly spawned, named OS thread per task (`daxpy-<id>`), joined
/// before returning. No pool, no reuse.
#[derive(Debug, Default)]
pub struct ThreadDispatch {
    stack_size: Option<usize>,
}

impl ThreadDispatch {
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

    fn builder(&self, id: usize) -> thread::Builder {
        let builder = thread::Builder::new().name(format!("daxpy-{id}"));
        match self.stack_size {
            Some(bytes) => builder.stack_size(bytes),
            None => builder,
        }
    }
}

impl Dispatch for ThreadDispatch {
    fn name(&self) -> &'static str {
        "threads"
    }

    fn dispatch<T: Float + Send + Sync>(&self, tasks: Vec<WorkerTask<'_, T>>) -> Result<(), BenchError> {
        let jobs = tasks.into_iter().map(|task| (task.id(), move || task.run())).collect();
        spawn_join(jobs, |id| self.builder(id))
    }
}

/// Start every job on its own scoped thread, then join all of them.
///
/// Stops spawning at the first failure, but still joins the threads that did
/// start before reporting it. A spawn failure wins over a worker panic.
fn spawn_join<F, B>(jobs: Vec<(usize, F)>, make_builder: B) -> Result<(), BenchError>
where
    F: FnOnce() + Send,
    B: Fn(usize) -> thread::Builder,
{
    thread::scope(|s| {
        let mut handles = Vec::with_capacity(jobs.len());
        let mut spawn_err = None;
        for (id, job) in jobs {
            match make_builder(id).spawn_scoped(s, job) {
                Ok(h) => handles.push((id, h)),
                Err(source) => {
                    spawn_err = Some(BenchError::Spawn { id, source });
                    break;
                }
            }
        }
        // join everything already started, even on a spawn failure
        let mut join_err = None;
        for (id, h) in handles {
            if h.join().is_err() && join_err.is_none() {
                join_err = Some(BenchError::WorkerPanicked(id));
            }
        }
        match spawn_err.or(join_err) {
            Some(e) => Err(e),
            None => Ok(()),
        }
    })
}
