//! Multi-threaded DAXPY workload for architectural simulation.
//!
//! Seeds `x[i] = i`, `y[i] = N - i`, then runs one parallel pass of
//! `y = alpha * x + y` inside the measurement window. Under gem5 (built with
//! `--features m5`, run with `--marker m5`) the process ends at the exit
//! signal; on a host it verifies the result and prints a report.

use daxpy_sim::config::{BenchOptions, Parsed, USAGE};
use daxpy_sim::context::RunContext;
use daxpy_sim::error::BenchError;
use daxpy_sim::measure::Window;
use daxpy_sim::parallel::Dispatcher;
use daxpy_sim::utils::verify_seeded;
use std::env;
use std::process;

fn run(opts: &BenchOptions) -> Result<(), BenchError> {
    let mut ctx = RunContext::from_options(opts)?;

    let cpus = num_cpus::get();
    if opts.workers > cpus {
        log::warn!(
            "{} workers on {} logical CPUs; workers will time-share cores",
            opts.workers,
            cpus
        );
    }

    let dispatcher = Dispatcher::from_kind(opts.dispatch, opts.stack_size)?;
    let mut window = Window::new(opts.marker.build()?).with_end_ops(opts.end_ops);

    let stats = ctx.run(&dispatcher, &mut window)?;

    verify_seeded(ctx.alpha(), ctx.accumulator())?;
    println!("Solution validates");
    println!("{stats}");
    Ok(())
}

fn main() {
    env_logger::init();

    println!("Parallel DAXPY: y = alpha * x + y");

    let opts = match BenchOptions::from_args(env::args().skip(1)) {
        Ok(Parsed::Run(opts)) => opts,
        Ok(Parsed::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&opts) {
        log::error!("run aborted: {e}");
        eprintln!("ERROR: {e}");
        process::exit(1);
    }
}
