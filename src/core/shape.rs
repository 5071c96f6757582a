//! Validated problem shape: vector length and worker count.
//!
//! A [`Shape`] can only be built through [`Shape::new`], which enforces
//! `1 <= workers <= len`. Everything downstream (partitioning, carving,
//! dispatch) takes a `Shape` and therefore never sees a misconfiguration.

use crate::error::BenchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    len: usize,
    workers: usize,
}

impl Shape {
    /// Validate `len` and `workers` once, at startup.
    pub fn new(len: usize, workers: usize) -> Result<Self, BenchError> {
        if len == 0 {
            return Err(BenchError::EmptyVector);
        }
        if workers == 0 {
            return Err(BenchError::NoWorkers);
        }
        if workers > len {
            return Err(BenchError::TooManyWorkers { workers, len });
        }
        Ok(Self { len, workers })
    }

    /// Vector length N.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Worker count T.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Base chunk size, `floor(N / T)`.
    pub fn chunk(&self) -> usize {
        self.len / self.workers
    }

    /// Leftover elements, `N mod T`.
    pub fn remainder(&self) -> usize {
        self.len % self.workers
    }
}
