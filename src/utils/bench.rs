//! Shared measurement primitives.
//!
//! By default (`cpu_cycles` feature) a measurement is a raw cycle count read
//! from the CPU timestamp counter. Build with `--features use_time` or
//! `--no-default-features` to measure wall-clock time instead.
//!
//! Either way the harness stores measurements as [`Duration`]s whose
//! nanosecond field carries the raw unit, so statistics and formatting can
//! stay unit-agnostic.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Duration;

// ============================================================================
// Measurement abstraction: cycles or time depending on feature flags
// ============================================================================

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

/// Read the current counter value
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> u64 {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> std::time::Instant {
    std::time::Instant::now()
}

/// Measurement elapsed since `start`
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: u64) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: std::time::Instant) -> Measurement {
    start.elapsed()
}

/// Raw measurement value: cycles, or nanoseconds in time mode
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_nanos(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Name of the measurement unit
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64", target_arch = "x86")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Time a single expression.
///
/// Expands to `(Measurement, value)`. The expression is evaluated exactly
/// once between two counter reads; wrap operands and results in
/// [`std::hint::black_box`] inside the expression when the optimizer must
/// not see through them.
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = $crate::utils::bench::now();
        let result = $body;
        let elapsed = $crate::utils::bench::elapsed(start);
        (elapsed, result)
    }};
}

// ============================================================================
// Formatting
// ============================================================================

/// Format a stored measurement for display
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn format_measurement(m: Duration) -> String {
    format!("{} {}", m.as_nanos(), unit_name())
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn format_measurement(m: Duration) -> String {
    format!("{:.2?}", m)
}

/// Format a byte throughput given the bytes processed per run and the
/// average raw measurement per run.
///
/// In time mode the result is bytes per second with a binary prefix; in
/// cycle mode it is bytes per cycle, since the counter frequency is unknown.
pub fn format_throughput(bytes_per_run: u64, avg_units: f64) -> String {
    if avg_units <= 0.0 {
        return "-".to_string();
    }
    let per_unit = bytes_per_run as f64 / avg_units;

    #[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
    {
        format!("{:.2} B/{}", per_unit, unit_name().trim_end_matches('s'))
    }

    #[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
    {
        format_bytes_per_second(per_unit * 1e9)
    }
}

/// Format a bytes-per-second rate with a binary prefix
pub fn format_bytes_per_second(rate: f64) -> String {
    const UNITS: [&str; 5] = ["B/s", "KiB/s", "MiB/s", "GiB/s", "TiB/s"];
    let mut value = rate;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

// ============================================================================
// Statistics and scheduling helpers
// ============================================================================

/// Mean and sample standard deviation (n - 1 denominator).
///
/// Returns `(0.0, 0.0)` for an empty slice and a zero deviation for a
/// single value.
pub fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    if values.len() < 2 {
        return (mean, 0.0);
    }
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    (mean, variance.sqrt())
}

/// Median of a slice of floats (upper median for even lengths)
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted[sorted.len() / 2]
}

/// Shuffle a schedule in place with a seeded generator
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    slice.shuffle(&mut rng);
}

/// Get a seed from the current time
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}
