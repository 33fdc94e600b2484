//! Aggregates across repetitions.
//!
//! With `--repetitions N` the whole measurement of a size is repeated and
//! every variant gets one mean per repetition. These are folded here into
//! mean, median and standard deviation rows.

use super::bench::{mean_and_std_dev, median};
use super::timer::VariantResult;

/// Spread of one variant's per-repetition averages (raw units)
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregate {
    pub name: String,
    pub repetitions: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl Aggregate {
    /// Coefficient of variation across repetitions
    pub fn cv(&self) -> f64 {
        if self.mean > 0.0 {
            self.std_dev / self.mean
        } else {
            0.0
        }
    }
}

/// Aggregate per variant name, in the order variants first appear.
///
/// Returns an empty vector when fewer than two repetitions were run.
pub fn aggregate(repetitions: &[Vec<VariantResult>]) -> Vec<Aggregate> {
    if repetitions.len() < 2 {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    for result in repetitions.iter().flatten() {
        if !order.contains(&result.name.as_str()) {
            order.push(&result.name);
        }
    }

    order
        .into_iter()
        .map(|name| {
            let averages: Vec<f64> = repetitions
                .iter()
                .flatten()
                .filter(|r| r.name == name)
                .map(|r| r.avg_nanos_f64)
                .collect();
            let (mean, std_dev) = mean_and_std_dev(&averages);
            Aggregate {
                name: name.to_string(),
                repetitions: averages.len(),
                mean,
                median: median(&averages),
                std_dev,
            }
        })
        .collect()
}
