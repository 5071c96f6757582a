//! Run configuration.

pub mod options;
pub use options::{BenchOptions, Parsed, USAGE};
