//! The measurement window around the parallel phase.

use super::{EndOps, Marker};
use std::time::{Duration, Instant};

/// Brackets one measured interval with begin/end signals on a [`Marker`] and
/// records the host wall time in between.
pub struct Window {
    marker: Box<dyn Marker>,
    end_ops: EndOps,
    opened: Option<Instant>,
}

impl Window {
    pub fn new(marker: Box<dyn Marker>) -> Self {
        Self { marker, end_ops: EndOps::default(), opened: None }
    }

    /// Choose which signals fire on [`Window::end`].
    pub fn with_end_ops(mut self, ops: EndOps) -> Self {
        self.end_ops = ops;
        self
    }

    pub fn end_ops(&self) -> EndOps {
        self.end_ops
    }

    pub fn is_open(&self) -> bool {
        self.opened.is_some()
    }

    /// Open the window: reset stats, then start the clock. Call immediately
    /// before dispatch.
    pub fn begin(&mut self) {
        self.marker.reset_stats();
        self.opened = Some(Instant::now());
    }

    /// Close the window: stop the clock, then fire the end signals. Call
    /// immediately after the join barrier. Returns the elapsed host time
    /// (zero if the window was never opened).
    pub fn end(&mut self) -> Duration {
        let elapsed = self.opened.take().map(|t| t.elapsed()).unwrap_or_default();
        if self.end_ops.contains(EndOps::DUMP) {
            self.marker.dump_stats();
        }
        if self.end_ops.contains(EndOps::EXIT) {
            self.marker.exit();
        }
        elapsed
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("end_ops", &self.end_ops)
            .field("open", &self.is_open())
            .finish()
    }
}
