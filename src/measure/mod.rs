//! Measurement-window signaling.
//!
//! The benchmark reports on exactly one interval: from the moment right
//! before the workers are dispatched to the moment right after the last one
//! has been joined. A [`Marker`] backend receives the boundary events:
//!
//! - begin: [`Marker::reset_stats`] (zero the simulator's statistics),
//! - end: [`Marker::dump_stats`] and then [`Marker::exit`], each enabled by
//!   the [`EndOps`] flags on the [`Window`].
//!
//! Backends:
//! - [`HostMarker`]: native runs; events are logged and host wall time is
//!   taken by the window itself.
//! - [`M5Marker`] (feature `m5`): gem5 pseudo-instructions through `libm5`.
//! - [`RecordingMarker`]: appends events to a shared log, for tests and tooling.

use bitflags::bitflags;

pub mod markers;
pub mod window;

pub use markers::{HostMarker, MarkerEvent, RecordingMarker};
#[cfg(feature = "m5")]
pub use markers::M5Marker;
pub use window::Window;

use crate::error::BenchError;

/// Receiver of measurement-window boundary events.
pub trait Marker: Send {
    /// Begin measurement: discard everything collected so far.
    fn reset_stats(&mut self);
    /// End measurement: emit the statistics for the window.
    fn dump_stats(&mut self);
    /// Terminate the measured program. Under a simulator this does not return.
    fn exit(&mut self);
}

bitflags! {
    /// Which signals fire when the window closes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EndOps: u8 {
        /// Dump statistics for the window.
        const DUMP = 0b01;
        /// Terminate the simulation after dumping.
        const EXIT = 0b10;
    }
}

impl Default for EndOps {
    fn default() -> Self {
        EndOps::DUMP | EndOps::EXIT
    }
}

/// Backend selector, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerKind {
    #[default]
    Host,
    M5,
}

impl MarkerKind {
    /// Instantiate the backend.
    pub fn build(self) -> Result<Box<dyn Marker>, BenchError> {
        match self {
            MarkerKind::Host => Ok(Box::new(HostMarker::new())),
            #[cfg(feature = "m5")]
            MarkerKind::M5 => Ok(Box::new(M5Marker::new())),
            #[cfg(not(feature = "m5"))]
            MarkerKind::M5 => Err(BenchError::Unsupported("m5 marker (built without the `m5` feature)")),
        }
    }
}
