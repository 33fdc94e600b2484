//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::aggregate::Aggregate;
use crate::utils::bench::{format_measurement, format_throughput, unit_name};
use crate::utils::runner::{AlgorithmReport, SizeReport};
use std::time::Duration;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority: original (0), Rust (1), C (2)
fn variant_sort_key(result: &BenchmarkResult) -> u8 {
    let name = result.name.to_lowercase();
    if name == "original" {
        0
    } else if name.starts_with("c-") || name.starts_with("libc-") {
        2
    } else {
        1
    }
}

/// Sort variants: original first, then Rust, then C. Registration order is
/// kept within a group.
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Variant name, tagged with the C compiler for C variants
fn display_name(name: &str) -> String {
    if name.starts_with("c-") {
        match crate::utils::C_COMPILER_NAME {
            Some(c) => format!("{} ({})", name, c),
            None => name.to_string(),
        }
    } else {
        name.to_string()
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Format a result sample compactly
fn format_result(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if v != 0.0 && (v.abs() >= 1e7 || v.abs() < 1e-3) => format!("{:.4e}", v),
        Some(v) => format!("{:.6}", v),
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants:  {}", algo.available_variants().join(", ")),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Print the results table of one repetition at one size
pub fn print_results_table(results: &[BenchmarkResult], size: &SizeReport, repetition: Option<usize>) {
    if results.is_empty() {
        return;
    }

    let show_throughput = size.bytes_per_run.is_some();
    let term_width = get_term_width();
    let fixed_width = if show_throughput { 87 } else { 72 };
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + fixed_width - 2;

    let baseline_time = results.first().map(|r| r.avg_nanos_f64).unwrap_or(1.0);
    let runs = results.first().map(|r| r.runs).unwrap_or(0);

    match repetition {
        Some(rep) => println!("  Size: {} ({} runs, repetition {})", size.size, runs, rep + 1),
        None => println!("  Size: {} ({} runs)", size.size, runs),
    }
    println!("  {}", "─".repeat(table_width));
    print!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        v_width = variant_col_width
    );
    if show_throughput {
        print!(" {:>14}", "Throughput");
    }
    println!(" {:>12}", "Result");
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg_nanos_f64 > 0.0 {
            baseline_time / result.avg_nanos_f64
        } else {
            0.0
        };

        print!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}%",
            truncate(&display_name(&result.name), variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            result.cv() * 100.0,
            v_width = variant_col_width
        );
        if let Some(bytes) = size.bytes_per_run {
            print!(" {:>14}", format_throughput(bytes, result.avg_nanos_f64));
        }
        println!(" {:>12}", format_result(result.result_sample));
    }
    println!();
}

/// Print mean/median/stddev rows across repetitions
pub fn print_aggregates(aggregates: &[Aggregate], size: &SizeReport) {
    if aggregates.is_empty() {
        return;
    }

    let name_width = aggregates
        .iter()
        .map(|a| a.name.chars().count() + "_median".len())
        .max()
        .unwrap_or(20)
        .max(20);

    println!(
        "  Size: {} (aggregate over {} repetitions)",
        size.size, aggregates[0].repetitions
    );
    println!("  {}", "─".repeat(name_width + 28));
    for agg in aggregates {
        let rows = [("mean", agg.mean), ("median", agg.median), ("stddev", agg.std_dev)];
        for (suffix, value) in rows {
            println!(
                "  {:<width$} {:>14}",
                format!("{}_{}", display_name(&agg.name), suffix),
                format_measurement(Duration::from_nanos(value as u64)),
                width = name_width
            );
        }
        println!(
            "  {:<width$} {:>13.2}%",
            format!("{}_cv", display_name(&agg.name)),
            agg.cv() * 100.0,
            width = name_width
        );
    }
    println!();
}

/// Print the per-variant complexity fit
pub fn print_complexity(report: &AlgorithmReport) {
    if report.complexity.is_empty() {
        return;
    }

    println!("  Complexity (time per sample vs n)");
    println!("  {}", "─".repeat(56));
    for (name, fit) in &report.complexity {
        println!(
            "  {:<28} {:>14.4} {} × O({})",
            format!("{}_BigO", display_name(name)),
            fit.coefficient,
            unit_name(),
            fit.complexity
        );
        println!(
            "  {:<28} {:>13.2}%",
            format!("{}_RMS", display_name(name)),
            fit.rms * 100.0
        );
    }
    println!();
}

/// Print everything measured for one algorithm
pub fn print_report(algo: &dyn AlgorithmRunner, report: &AlgorithmReport) {
    print_algo_info_box(algo);

    for size in &report.sizes {
        let repeated = size.repetitions.len() > 1;
        for (rep, results) in size.repetitions.iter().enumerate() {
            print_results_table(results, size, repeated.then_some(rep));
        }
        print_aggregates(&size.aggregates, size);
    }

    print_complexity(report);
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " pow-microbench ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!(
        "  Unit: {}   CPUs: {}   C compiler: {}",
        unit_name(),
        crate::utils::cpu_affinity::online_cpus(),
        crate::utils::C_COMPILER_NAME.unwrap_or("none")
    );
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: microbench [OPTIONS] [FILTER]");
    println!();
    println!("Options:");
    println!("  --list, -l             List all available algorithms and variants");
    println!("  --help, -h             Show this help message");
    println!("  --filter, -f PATTERN   Run only benchmarks whose name, category or");
    println!("                         'algorithm/variant' contains PATTERN");
    println!("  --sizes SIZES          Comma-separated input sizes (default: 64,256,1024,4096,16384)");
    println!("  --iter N, -r N         Timed samples per variant (default: 30)");
    println!("  --warmup N             Untimed warmup calls per variant (default: 10)");
    println!("  --repetitions N        Repeat each measurement N times and report");
    println!("                         mean/median/stddev (default: 1)");
    println!("  --pin MODE             CPU pinning: 'per-exec' (default) or 'global'");
    println!("  --seed N               Seed for input data and sample order (default: time-based order)");
    println!("  --csv PATH             Export raw timings to CSV");
    println!("  --verify               Only check variants against the reference");
    println!("  -v, -vv                More log output on stderr (or set RUST_LOG)");
    println!();
    println!("Arguments:");
    println!("  FILTER                 Same as --filter");
    println!();
    println!("Examples:");
    println!("  microbench                      # Run everything");
    println!("  microbench pow                  # Only the pow benchmark");
    println!("  microbench -f pow/random        # Only one variant");
    println!("  microbench fibonacci --sizes 16,64,256,1024   # Complexity fit");
    println!("  microbench memcpy --repetitions 5             # Throughput with error bars");
    println!("  microbench --csv data.csv       # Export raw timings to CSV");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<12} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
        println!("  {:<12} variants: {}", "", algo.available_variants().join(", "));
    }
}
