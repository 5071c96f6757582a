//! Seeding, run statistics and result verification.

pub mod seed;
pub mod stats;

pub use seed::{seed_accumulator, seed_input};
pub use stats::{RunStats, verify_seeded};
