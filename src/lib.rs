//! # pow-microbench
//!
//! Micro-benchmarks of `pow(1.2, 1.2)` and friends, with the harness that
//! measures them: warmup, shuffled sampling, CPU pinning, repetitions with
//! aggregates, throughput and asymptotic complexity fitting.

pub mod cli;
pub mod error;
pub mod math;
pub mod memory;
pub mod registry;
pub mod utils;

pub use error::{BenchError, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{BenchError, Result};
    pub use crate::math::pow;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::utils::runner::{run_algorithm, RunOptions};
}
