// Marker backends

use super::Marker;
use std::sync::{Arc, Mutex};

/// Native-run backend: the events are only logged.
#[derive(Debug, Default)]
pub struct HostMarker {
    resets: usize,
}

impl HostMarker {
    pub fn new() -> Self {
        Self { resets: 0 }
    }
}

impl Marker for HostMarker {
    fn reset_stats(&mut self) {
        self.resets += 1;
        log::info!("measurement window opened (reset #{})", self.resets);
    }
    fn dump_stats(&mut self) {
        log::info!("measurement window closed, dumping stats");
    }
    fn exit(&mut self) {
        // Outside a simulator there is nothing to terminate; the caller
        // prints its report and returns normally.
        log::debug!("exit requested (no-op on host)");
    }
}

/// Events observed by a [`RecordingMarker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEvent {
    Reset,
    Dump,
    Exit,
    /// Pushed by callers that want their own checkpoints in the same log.
    Note(&'static str),
}

/// Appends every event to a shared log.
#[derive(Debug, Clone, Default)]
pub struct RecordingMarker {
    log: Arc<Mutex<Vec<MarkerEvent>>>,
}

impl RecordingMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the event log.
    pub fn events(&self) -> Arc<Mutex<Vec<MarkerEvent>>> {
        Arc::clone(&self.log)
    }

    /// Copy of the events recorded so far.
    pub fn snapshot(&self) -> Vec<MarkerEvent> {
        match self.log.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn push(&self, ev: MarkerEvent) {
        match self.log.lock() {
            Ok(mut guard) => guard.push(ev),
            Err(poisoned) => poisoned.into_inner().push(ev),
        }
    }
}

impl Marker for RecordingMarker {
    fn reset_stats(&mut self) {
        self.push(MarkerEvent::Reset);
    }
    fn dump_stats(&mut self) {
        self.push(MarkerEvent::Dump);
    }
    fn exit(&mut self) {
        self.push(MarkerEvent::Exit);
    }
}

#[cfg(feature = "m5")]
mod ffi {
    #[link(name = "m5")]
    unsafe extern "C" {
        pub fn m5_reset_stats(ns_delay: u64, ns_period: u64);
        pub fn m5_dump_stats(ns_delay: u64, ns_period: u64);
        pub fn m5_exit(ns_delay: u64);
    }
}

/// gem5 backend. Issues the pseudo-instructions immediately (zero delay,
/// zero period).
#[cfg(feature = "m5")]
#[derive(Debug, Default)]
pub struct M5Marker;

#[cfg(feature = "m5")]
impl M5Marker {
    pub fn new() -> Self {
        M5Marker
    }
}

#[cfg(feature = "m5")]
impl Marker for M5Marker {
    fn reset_stats(&mut self) {
        // SAFETY: takes plain integers and touches no Rust-visible memory.
        unsafe { ffi::m5_reset_stats(0, 0) }
    }
    fn dump_stats(&mut self) {
        // SAFETY: as above.
        unsafe { ffi::m5_dump_stats(0, 0) }
    }
    fn exit(&mut self) {
        // SAFETY: as above; ends the simulation, so control does not come back.
        unsafe { ffi::m5_exit(0) }
    }
}
