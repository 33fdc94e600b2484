//! Algorithm registry for benchmark discovery and selection.
//!
//! Every benchmarked algorithm implements [`AlgorithmRunner`] and is listed
//! in [`build_registry`]; the CLI and the runner only ever talk to the trait.

use crate::error::Result;
use crate::utils::complexity::Complexity;
use crate::utils::timer::{Variant, VariantResult};

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// A closure that takes one timed sample of a variant
pub type VariantClosure<'a> = Variant<'a>;

/// Trait that all algorithm benchmarkers must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "pow")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "math", "memory")
    fn category(&self) -> &'static str;

    /// Names of the variants available on this build
    fn available_variants(&self) -> Vec<&'static str>;

    /// Closures for each variant, ready to be measured.
    ///
    /// Each call of a closure does ONE timed sample at the given input size.
    /// `seed` drives any random input generation so runs are reproducible.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<()>;

    /// Bytes processed by one sample, enabling throughput reporting
    fn bytes_per_run(&self, _size: usize) -> Option<u64> {
        None
    }

    /// Problem size used for complexity fitting
    fn complexity_n(&self, size: usize) -> usize {
        size
    }

    /// Growth function to fit against; `Auto` picks the best candidate
    fn expected_complexity(&self) -> Complexity {
        Complexity::Auto
    }
}

/// Case-insensitive substring match; an empty filter matches everything
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether `filter` selects the whole algorithm (name or category).
pub fn algorithm_matches(algo: &dyn AlgorithmRunner, filter: &str) -> bool {
    contains_ignore_case(algo.name(), filter) || contains_ignore_case(algo.category(), filter)
}

/// Whether `filter` selects `variant` of `algo`.
///
/// A filter naming the algorithm or its category selects every variant;
/// otherwise it is matched against `"<algorithm>/<variant>"`.
pub fn variant_matches(algo: &dyn AlgorithmRunner, variant: &str, filter: &str) -> bool {
    algorithm_matches(algo, filter)
        || contains_ignore_case(&format!("{}/{}", algo.name(), variant), filter)
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by exact name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }

    /// Algorithms with at least one variant selected by `filter`
    pub fn matching(&self, filter: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .map(|a| a.as_ref())
            .filter(|a| {
                a.available_variants()
                    .iter()
                    .any(|v| variant_matches(*a, v, filter))
            })
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::math::pow::PowRunner);
    registry.register(crate::math::fibonacci::FibonacciRunner);
    registry.register(crate::memory::memcpy::MemcpyRunner);

    registry
}
