//! daxpy-sim: fixed-size parallel DAXPY for architectural simulation
//!
//! This crate runs `y = alpha * x + y` over a fixed-length vector split among a
//! fixed number of independent workers, and brackets only the parallel phase
//! with measurement-window signals (gem5 `m5` pseudo-ops or host timing).

pub mod parallel;

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod kernel;
pub mod measure;
pub mod partition;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use self::core::*;
pub use error::*;
pub use kernel::*;
pub use measure::*;
pub use parallel::*;
pub use partition::*;
pub use utils::*;

// Re-export RunStats at the crate root for convenience
pub use utils::stats::RunStats;
