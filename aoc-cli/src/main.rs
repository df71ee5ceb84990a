//! AOC CLI - Command-line interface for running the Advent of Code 2023 solutions

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use executor::{DayOutcome, Executor};
use input::InputLoader;
use output::OutputFormatter;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    let config = Config::from_args(args);
    init_tracing(config.log_level);

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, keeping stdout for answers. `RUST_LOG` overrides `-v`.
fn init_tracing(level: LevelFilter) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(config: &Config) -> Result<(), error::CliError> {
    let registry = aoc_solutions::registry()?;
    debug!(days = registry.len(), input_dir = %config.input_dir.display(), "registry built");

    let loader = InputLoader::new(config.input_dir.clone());
    let output = OutputFormatter::new(io::stdout().lock(), config.output_options());
    let mut executor = Executor::new(&registry, loader, output);

    match config.day {
        Some(day) => match executor.run_day(day)? {
            DayOutcome::Missing(day) => debug!(day, "nothing to run"),
            DayOutcome::Solved(report) => {
                info!(day = report.day, name = report.name, elapsed = ?report.elapsed(), "done")
            }
        },
        None => {
            let batch = executor.run_all()?;
            info!(solved = batch.reports().count(), elapsed = ?batch.elapsed(), "batch done");
        }
    }

    executor.into_output().into_inner().flush()?;
    Ok(())
}
