//! Utility modules for benchmarking and execution.

pub mod aggregate;
pub mod bench;
pub mod complexity;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

// Re-export commonly used items
pub use bench::{elapsed, now, shuffle, time_seed, Measurement};
pub use complexity::{Complexity, ComplexityFit};
pub use cpu_affinity::CpuPinGuard;
pub use runner::{run_algorithm, AlgorithmReport, RunOptions};
pub use timer::{measure_variants, PinStrategy, TimingConfig, Variant, VariantResult};

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub use cycles::read_cycles;

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an algorithm implementation variant.
/// Generic over F, the function (or kernel) being benchmarked.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "c-original")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation
    pub function: F,
}
