//! Startup options for the benchmark.
//!
//! This module provides the `BenchOptions` struct, which holds the run
//! configuration: worker count, vector length, the scalar multiplier, how the
//! remainder is distributed, which dispatch backend runs the workers, and
//! which measurement backend receives the window signals. Options come from
//! [`Default`] or from command-line arguments via [`BenchOptions::from_args`],
//! and are validated exactly once with [`BenchOptions::shape`].

use crate::core::Shape;
use crate::error::BenchError;
use crate::measure::{EndOps, MarkerKind};
use crate::parallel::DispatchKind;
use crate::partition::RemainderPolicy;

/// Worker count when none is given.
pub const DEFAULT_WORKERS: usize = 4;
/// Vector length when none is given.
pub const DEFAULT_LEN: usize = 10_240;
/// Scalar multiplier when none is given.
pub const DEFAULT_ALPHA: f64 = 2.0;

pub const USAGE: &str = "\
Usage: daxpy_multi [options]
  --threads N          worker count (default 4)
  --len N              vector length (default 10240)
  --alpha A            scalar multiplier (default 2.0)
  --spread             spread the remainder over the first workers
  --dispatch KIND      threads | rayon (default threads)
  --marker KIND        host | m5 (default host)
  --stack-size BYTES   per-worker stack size (default: platform)
  --no-exit            do not send the exit signal after dumping stats
  --help               print this message";

/// Run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchOptions {
    /// Worker count T
    pub workers: usize,

    /// Vector length N
    pub len: usize,

    /// Scalar multiplier α
    pub alpha: f64,

    /// Placement of the `N mod T` leftover elements
    pub policy: RemainderPolicy,

    /// Backend that runs the workers
    pub dispatch: DispatchKind,

    /// Backend that receives the window signals
    pub marker: MarkerKind,

    /// Signals fired when the window closes
    pub end_ops: EndOps,

    /// Per-worker stack size override
    pub stack_size: Option<usize>,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            len: DEFAULT_LEN,
            alpha: DEFAULT_ALPHA,
            policy: RemainderPolicy::LastWorker,
            dispatch: DispatchKind::Threads,
            marker: MarkerKind::Host,
            end_ops: EndOps::default(),
            stack_size: None,
        }
    }
}

/// Outcome of argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Run(BenchOptions),
    Help,
}

impl BenchOptions {
    /// Validate worker count and length.
    pub fn shape(&self) -> Result<Shape, BenchError> {
        Shape::new(self.len, self.workers)
    }

    /// Parse options from arguments (program name already stripped).
    pub fn from_args<I, S>(args: I) -> Result<Parsed, BenchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = BenchOptions::default();
        let mut it = args.into_iter();
        while let Some(arg) = it.next() {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Ok(Parsed::Help),
                "--spread" => opts.policy = RemainderPolicy::Spread,
                "--no-exit" => opts.end_ops.remove(EndOps::EXIT),
                "--threads" | "--len" | "--alpha" | "--dispatch" | "--marker" | "--stack-size" => {
                    let value = it.next().ok_or_else(|| invalid(arg, "missing value"))?;
                    let value = value.as_ref();
                    match arg {
                        "--threads" => opts.workers = parse_count(arg, value)?,
                        "--len" => opts.len = parse_count(arg, value)?,
                        "--stack-size" => opts.stack_size = Some(parse_count(arg, value)?),
                        "--alpha" => opts.alpha = parse_alpha(arg, value)?,
                        "--dispatch" => {
                            opts.dispatch = match value {
                                "threads" => DispatchKind::Threads,
                                "rayon" => DispatchKind::Rayon,
                                _ => return Err(invalid(arg, &format!("unknown backend `{value}`"))),
                            }
                        }
                        _ => {
                            opts.marker = match value {
                                "host" => MarkerKind::Host,
                                "m5" => MarkerKind::M5,
                                _ => return Err(invalid(arg, &format!("unknown marker `{value}`"))),
                            }
                        }
                    }
                }
                other => return Err(invalid(other, "unrecognised option")),
            }
        }
        Ok(Parsed::Run(opts))
    }
}

fn parse_count(arg: &str, value: &str) -> Result<usize, BenchError> {
    value
        .parse()
        .map_err(|_| invalid(arg, &format!("`{value}` is not a non-negative integer")))
}

fn parse_alpha(arg: &str, value: &str) -> Result<f64, BenchError> {
    let alpha: f64 = value
        .parse()
        .map_err(|_| invalid(arg, &format!("`{value}` is not a number")))?;
    if !alpha.is_finite() {
        return Err(invalid(arg, &format!("`{value}` is not a finite number")));
    }
    Ok(alpha)
}

fn invalid(arg: &str, reason: &str) -> BenchError {
    BenchError::InvalidArgument { arg: arg.to_string(), reason: reason.to_string() }
}
