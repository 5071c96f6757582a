use thiserror::Error;

// Unified error type for daxpy-sim

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("vector length must be at least 1")]
    EmptyVector,
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("worker count {workers} exceeds vector length {len}")]
    TooManyWorkers { workers: usize, len: usize },
    #[error("input and accumulator lengths differ ({input} vs {accumulator})")]
    LengthMismatch { input: usize, accumulator: usize },
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument { arg: String, reason: String },
    #[error("failed to start worker {id}: {source}")]
    Spawn {
        id: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build worker pool: {0}")]
    Pool(String),
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
    #[error("result mismatch at index {index}: expected {expected}, observed {observed}")]
    Validation {
        index: usize,
        expected: f64,
        observed: f64,
    },
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
