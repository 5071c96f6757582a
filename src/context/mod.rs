//! Run coordination.
//!
//! The coordinator owns the vector pair and the scalar for the whole run,
//! partitions the work, carves per-worker views, and brackets dispatch with
//! the measurement window.
//!
//! Modules:
//! - [`run_context`]: the `RunContext` coordinator.
//!
//! # Example
//! ```rust
//! use daxpy_sim::context::RunContext;
//! use daxpy_sim::measure::{EndOps, HostMarker, Window};
//! use daxpy_sim::parallel::ThreadDispatch;
//! use daxpy_sim::partition::RemainderPolicy;
//!
//! let mut ctx = RunContext::new(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![4.0, 3.0, 2.0, 1.0],
//!     2.0,
//!     2,
//!     RemainderPolicy::LastWorker,
//! )
//! .unwrap();
//! let mut window = Window::new(Box::new(HostMarker::new())).with_end_ops(EndOps::DUMP);
//! ctx.run(&ThreadDispatch::new(), &mut window).unwrap();
//! assert_eq!(ctx.accumulator(), &[4.0, 5.0, 6.0, 7.0]);
//! ```

pub mod run_context;
pub use run_context::RunContext;
