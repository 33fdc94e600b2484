//! Drives an algorithm over sizes and repetitions, and exports raw data.

use std::io::Write;
use tracing::{debug, info};

use super::aggregate::{aggregate, Aggregate};
use super::bench::unit_name;
use super::complexity::{fit, ComplexityFit};
use super::timer::{measure_variants, TimingConfig, VariantResult};
use crate::error::Result;
use crate::registry::{variant_matches, AlgorithmRunner};

/// Seed for input data when the user gave none
pub const DEFAULT_DATA_SEED: u64 = 0x12345678;

/// What to run and how
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub sizes: Vec<usize>,
    pub timing: TimingConfig,
    /// Times the whole measurement is repeated (at least 1)
    pub repetitions: usize,
    /// Name filter; empty selects every variant
    pub filter: String,
    /// Seed for input data and sample schedules
    pub seed: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            sizes: vec![64, 256, 1024, 4096, 16384],
            timing: TimingConfig::default(),
            repetitions: 1,
            filter: String::new(),
            seed: None,
        }
    }
}

/// Measurements of one algorithm at one input size
#[derive(Clone, Debug)]
pub struct SizeReport {
    pub size: usize,
    pub complexity_n: usize,
    pub bytes_per_run: Option<u64>,
    /// One entry per repetition, variants in display order
    pub repetitions: Vec<Vec<VariantResult>>,
    /// Empty unless more than one repetition ran
    pub aggregates: Vec<Aggregate>,
}

impl SizeReport {
    /// Mean of a variant's averages over all repetitions that took samples
    pub fn mean_avg(&self, variant: &str) -> Option<f64> {
        let averages: Vec<f64> = self
            .repetitions
            .iter()
            .flatten()
            .filter(|r| r.name == variant && r.runs > 0)
            .map(|r| r.avg_nanos_f64)
            .collect();
        if averages.is_empty() {
            None
        } else {
            Some(averages.iter().sum::<f64>() / averages.len() as f64)
        }
    }
}

/// Everything measured for one algorithm
#[derive(Clone, Debug)]
pub struct AlgorithmReport {
    pub algorithm: &'static str,
    pub sizes: Vec<SizeReport>,
    /// Per-variant fit; empty when fewer than two sizes ran
    pub complexity: Vec<(String, ComplexityFit)>,
}

/// Run every selected variant of `algo` at every size, `repetitions` times.
pub fn run_algorithm(algo: &dyn AlgorithmRunner, options: &RunOptions) -> AlgorithmReport {
    let data_seed = options.seed.unwrap_or(DEFAULT_DATA_SEED);
    let repetitions = options.repetitions.max(1);

    info!(
        algorithm = algo.name(),
        sizes = ?options.sizes,
        repetitions,
        "Running algorithm"
    );

    let mut sizes = Vec::with_capacity(options.sizes.len());
    for &size in &options.sizes {
        let mut per_rep = Vec::with_capacity(repetitions);
        for rep in 0..repetitions {
            let closures: Vec<_> = algo
                .get_variant_closures(size, data_seed.wrapping_add(size as u64))
                .into_iter()
                .filter(|c| variant_matches(algo, c.name, &options.filter))
                .collect();

            let timing = TimingConfig {
                schedule_seed: options.seed.map(|s| s.wrapping_add(rep as u64)),
                ..options.timing.clone()
            };
            let mut results = measure_variants(closures, &timing);
            super::tui::sort_variants(&mut results);
            per_rep.push(results);
        }

        let aggregates = aggregate(&per_rep);
        debug!(algorithm = algo.name(), size, "Size complete");
        sizes.push(SizeReport {
            size,
            complexity_n: algo.complexity_n(size),
            bytes_per_run: algo.bytes_per_run(size),
            repetitions: per_rep,
            aggregates,
        });
    }

    let complexity = fit_complexity(algo, &sizes);

    AlgorithmReport {
        algorithm: algo.name(),
        sizes,
        complexity,
    }
}

/// Fit every variant's mean time against the algorithm's problem size
fn fit_complexity(algo: &dyn AlgorithmRunner, sizes: &[SizeReport]) -> Vec<(String, ComplexityFit)> {
    let Some(first) = sizes.first() else {
        return Vec::new();
    };
    let Some(names) = first.repetitions.first() else {
        return Vec::new();
    };

    names
        .iter()
        .filter_map(|variant| {
            let (ns, times): (Vec<usize>, Vec<f64>) = sizes
                .iter()
                .filter_map(|s| s.mean_avg(&variant.name).map(|t| (s.complexity_n, t)))
                .unzip();
            fit(&ns, &times, algo.expected_complexity()).map(|f| (variant.name.clone(), f))
        })
        .collect()
}

/// Raw timing data for a single variant (used for CSV export)
#[derive(Clone, Debug, PartialEq)]
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub repetition: usize,
    /// Mean sample in raw units (see `unit_name`)
    pub avg_time: f64,
    pub bytes_per_run: Option<u64>,
    pub result_sample: Option<f64>,
}

/// Flatten a report into CSV rows
pub fn raw_data(report: &AlgorithmReport) -> Vec<RawTimingData> {
    report
        .sizes
        .iter()
        .flat_map(move |size| {
            size.repetitions
                .iter()
                .enumerate()
                .flat_map(move |(rep, results)| {
                    results.iter().map(move |r| RawTimingData {
                        algo_name: report.algorithm.to_string(),
                        variant_name: r.name.clone(),
                        input_size: size.size,
                        repetition: rep,
                        avg_time: r.avg_nanos_f64,
                        bytes_per_run: size.bytes_per_run,
                        result_sample: r.result_sample,
                    })
                })
        })
        .collect()
}

/// Write timing data as CSV
pub fn write_csv<W: Write>(mut out: W, data: &[RawTimingData]) -> Result<()> {
    writeln!(
        out,
        "algorithm,variant,compiler,input_size,repetition,avg_time,unit,bytes_per_run,result"
    )?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{:.3},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.repetition,
            entry.avg_time,
            unit_name(),
            entry.bytes_per_run.map(|b| b.to_string()).unwrap_or_default(),
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Export timing data to a CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), data)?;
    info!(path, rows = data.len(), "CSV exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::fibonacci::FibonacciRunner;
    use crate::math::pow::PowRunner;
    use crate::memory::memcpy::MemcpyRunner;
    use crate::utils::timer::PinStrategy;

    fn quick_options(sizes: Vec<usize>, repetitions: usize, filter: &str) -> RunOptions {
        RunOptions {
            sizes,
            timing: TimingConfig {
                runs_per_variant: 3,
                warmup_iterations: 1,
                pin_strategy: PinStrategy::Global,
                schedule_seed: None,
            },
            repetitions,
            filter: filter.to_string(),
            seed: Some(5),
        }
    }

    #[test]
    fn test_filter_limits_variants() {
        let report = run_algorithm(&PowRunner, &quick_options(vec![32], 1, "pow/random"));
        assert_eq!(report.sizes.len(), 1);
        let names: Vec<_> = report.sizes[0].repetitions[0].iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["random"]);
        // Single size: nothing to fit
        assert!(report.complexity.is_empty());
    }

    #[test]
    fn test_original_sorted_first() {
        let report = run_algorithm(&PowRunner, &quick_options(vec![8], 1, ""));
        assert_eq!(report.sizes[0].repetitions[0][0].name, "original");
    }

    #[test]
    fn test_repetitions_produce_aggregates() {
        let report = run_algorithm(&FibonacciRunner, &quick_options(vec![64], 3, "fibonacci/iterative"));
        let size = &report.sizes[0];
        assert_eq!(size.repetitions.len(), 3);
        assert_eq!(size.aggregates.len(), 1);
        assert_eq!(size.aggregates[0].name, "iterative");
        assert_eq!(size.aggregates[0].repetitions, 3);
        assert!(size.mean_avg("iterative").is_some());
        assert!(size.mean_avg("original").is_none());
    }

    #[test]
    fn test_complexity_uses_algorithm_n() {
        let report = run_algorithm(&FibonacciRunner, &quick_options(vec![64, 256, 1024], 1, "fast_doubling"));
        let ns: Vec<_> = report.sizes.iter().map(|s| s.complexity_n).collect();
        assert_eq!(ns, vec![12, 16, 20]);
        assert_eq!(report.complexity.len(), 1);
        assert_eq!(report.complexity[0].0, "fast_doubling");
    }

    #[test]
    fn test_unsampled_variants_are_not_fitted() {
        let mut options = quick_options(vec![64, 256], 1, "pow/random");
        options.timing.runs_per_variant = 0;
        let report = run_algorithm(&PowRunner, &options);
        assert_eq!(report.sizes[0].repetitions[0][0].runs, 0);
        assert!(report.sizes[0].mean_avg("random").is_none());
        assert!(report.complexity.is_empty());
    }

    #[test]
    fn test_raw_data_and_csv() {
        let report = run_algorithm(&MemcpyRunner, &quick_options(vec![64, 128], 2, "memcpy/original"));
        let rows = raw_data(&report);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.variant_name == "original"));
        assert_eq!(rows[0].bytes_per_run, Some(64));
        assert_eq!(rows[3].input_size, 128);
        assert_eq!(rows[3].repetition, 1);

        let mut out = Vec::new();
        write_csv(&mut out, &rows).expect("write to Vec");
        let text = String::from_utf8(out).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("algorithm,variant,compiler,input_size,repetition,avg_time,unit,bytes_per_run,result")
        );
        let first: Vec<_> = lines.next().expect("row").split(',').collect();
        assert_eq!(first[0], "memcpy");
        assert_eq!(first[1], "original");
        assert_eq!(first[2], "");
        assert_eq!(first[3], "64");
        assert_eq!(first[6], unit_name());
        assert_eq!(first[7], "64");
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_export_csv_to_missing_dir_fails() {
        let err = export_csv("/nonexistent-dir/for/sure/out.csv", &[]);
        assert!(matches!(err, Err(crate::error::BenchError::Io(_))));
    }
}
