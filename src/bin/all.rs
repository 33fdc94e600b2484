//! Generic CLI for running benchmarks.
//!
//! Usage:
//!   microbench                  # Run every benchmark
//!   microbench --list           # List available algorithms
//!   microbench pow              # Run one algorithm
//!   microbench -f pow/random    # Run one variant
//!   microbench --help           # Show help

use pow_microbench::cli::{Action, CliOptions};
use pow_microbench::error::{BenchError, Result};
use pow_microbench::registry::build_registry;
use pow_microbench::utils::runner::{export_csv, raw_data, run_algorithm};
use pow_microbench::utils::tui;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(options: CliOptions) -> Result<()> {
    let registry = build_registry();

    match options.action {
        Action::Help => {
            tui::print_help();
            return Ok(());
        }
        Action::List => {
            tui::print_available_algorithms(&registry);
            return Ok(());
        }
        Action::Run | Action::Verify => {}
    }

    let selected = registry.matching(&options.run.filter);
    if selected.is_empty() {
        return Err(BenchError::NoMatch {
            filter: options.run.filter.clone(),
            available: registry.list_names(),
        });
    }

    if options.action == Action::Verify {
        for algo in &selected {
            algo.verify()?;
            println!("✅ {} passed verification", algo.name());
        }
        return Ok(());
    }

    tui::print_header();

    let mut rows = Vec::new();
    for algo in selected {
        let report = run_algorithm(algo, &options.run);
        tui::print_report(algo, &report);
        if options.csv_path.is_some() {
            rows.extend(raw_data(&report));
        }
    }

    if let Some(path) = &options.csv_path {
        export_csv(path, &rows)?;
        println!("Raw timings written to {}", path);
    }

    info!("Done");
    println!("Note: Speedup is relative to the first variant (usually 'original').");
    Ok(())
}

fn main() {
    let options = match CliOptions::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --help for usage.");
            std::process::exit(1);
        }
    };

    init_logging(options.log_level());

    if let Err(e) = run(options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
