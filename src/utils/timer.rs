//! Sample collection for micro-benchmarks.
//!
//! [`measure_variants`] is the single timing loop of the crate:
//! - warms every variant up with untimed calls
//! - interleaves the timed samples of all variants in a shuffled order
//! - pins the thread to one core while sampling
//! - reduces the raw samples to summary statistics

use std::hint::black_box;
use std::time::Duration;
use tracing::{debug, trace};

use super::bench::{shuffle, time_seed, to_nanos, Measurement};
use super::cpu_affinity::CpuPinGuard;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once for the whole schedule
    Global,
    /// Pin and unpin around every sample
    #[default]
    PerExecution,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Timed samples collected per variant (default: 30)
    pub runs_per_variant: usize,
    /// Untimed calls per variant before sampling starts (default: 10)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
    /// Seed for the sample schedule; time-based when `None`
    pub schedule_seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            schedule_seed: None,
        }
    }
}

/// A variant to be measured.
///
/// `run` performs one timed sample and returns the measurement together
/// with the value it computed. Timing happens inside the closure so the
/// dynamic call itself stays outside the timed region.
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Summary of the samples of one variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    /// Mean sample (raw unit stored as nanoseconds)
    pub avg_time: Duration,
    /// Unrounded mean in raw units
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    /// Sample standard deviation
    pub std_dev: Duration,
    /// Unrounded standard deviation in raw units
    pub std_dev_f64: f64,
    /// Number of timed samples
    pub runs: usize,
    /// Last value computed by the variant, kept observable for display
    pub result_sample: Option<f64>,
}

impl VariantResult {
    /// Coefficient of variation of the samples (0 when the mean is 0)
    pub fn cv(&self) -> f64 {
        if self.avg_nanos_f64 > 0.0 {
            self.std_dev_f64 / self.avg_nanos_f64
        } else {
            0.0
        }
    }
}

/// Measure variants with a randomized, interleaved schedule.
///
/// Returns one [`VariantResult`] per input variant, in input order.
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    debug!(
        variants = variants.len(),
        warmup = config.warmup_iterations,
        "Warming up"
    );
    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    let seed = config.schedule_seed.unwrap_or_else(time_seed);
    shuffle(&mut tasks, seed);
    debug!(tasks = tasks.len(), seed, "Schedule ready");

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);
    if let Some(guard) = &global_pin {
        debug!(core = ?guard.core_id(), "Pinned for the whole schedule");
    }

    for variant_idx in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed, result) = (variant.run)();
        trace!(variant = variant.name, raw = to_nanos(elapsed), "Sample");

        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }
    drop(global_pin);

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, times), result_sample)| {
            summarize(variant.name, variant.description, &times, result_sample)
        })
        .collect()
}

/// Reduce raw measurements to a [`VariantResult`]
fn summarize(
    name: &'static str,
    description: &'static str,
    measurements: &[Measurement],
    result_sample: Option<f64>,
) -> VariantResult {
    if measurements.is_empty() {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            std_dev_f64: 0.0,
            runs: 0,
            result_sample: None,
        };
    }

    let mut sorted: Vec<u64> = measurements.iter().map(|m| to_nanos(*m)).collect();
    sorted.sort_unstable();

    let min_ns = sorted[0];
    let max_ns = sorted[sorted.len() - 1];
    let median_ns = sorted[sorted.len() / 2];

    let as_f64: Vec<f64> = sorted.iter().map(|&n| n as f64).collect();
    let (avg_nanos_f64, std_dev_ns) = super::bench::mean_and_std_dev(&as_f64);

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg_nanos_f64 as u64),
        avg_nanos_f64,
        median_time: Duration::from_nanos(median_ns),
        min_time: Duration::from_nanos(min_ns),
        max_time: Duration::from_nanos(max_ns),
        std_dev: Duration::from_nanos(std_dev_ns as u64),
        std_dev_f64: std_dev_ns,
        runs: measurements.len(),
        result_sample,
    }
}
