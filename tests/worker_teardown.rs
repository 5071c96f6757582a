//! Worker threads must be gone by the time dispatch returns.
//!
//! The end-of-window signal fires right after `dispatch` returns, so no
//! `daxpy-*` thread may still be alive at that point, for either backend and
//! across repeated runs. Kept in its own test binary so that no concurrently
//! running test contributes threads to the count.

#![cfg(target_os = "linux")]

use daxpy_sim::core::Shape;
use daxpy_sim::parallel::{Dispatch, ThreadDispatch};
use daxpy_sim::partition::{Partition, RemainderPolicy};
use std::fs;

/// Count this process's threads whose name starts with `daxpy-`.
fn live_worker_threads() -> usize {
    let Ok(entries) = fs::read_dir("/proc/self/task") else {
        return 0;
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|e| fs::read_to_string(e.path().join("comm")).ok())
        .filter(|name| name.starts_with("daxpy-"))
        .count()
}

fn max_live_after_runs<D: Dispatch>(d: &D, runs: usize) -> usize {
    let shape = Shape::new(8_000, 8).unwrap();
    let p = Partition::new(shape, RemainderPolicy::LastWorker);
    let x = vec![1.0f64; 8_000];
    let mut y = vec![0.0f64; 8_000];
    let mut max_live = 0;
    for _ in 0..runs {
        d.dispatch(p.carve(&x, &mut y, 2.0)).unwrap();
        max_live = max_live.max(live_worker_threads());
    }
    assert!(y.iter().all(|&v| v == 2.0 * runs as f64));
    max_live
}

#[test]
fn no_worker_outlives_dispatch() {
    assert_eq!(max_live_after_runs(&ThreadDispatch::new(), 20), 0, "threads backend");

    #[cfg(feature = "rayon")]
    {
        use daxpy_sim::parallel::RayonDispatch;
        assert_eq!(max_live_after_runs(&RayonDispatch::new(), 20), 0, "rayon backend");
    }
}
