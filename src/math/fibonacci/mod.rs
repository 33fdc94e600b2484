//! # Fibonacci
//!
//! A scaling demonstration: the same value computed by algorithms whose
//! cost grows exponentially, linearly and logarithmically with `n`. Run it
//! over several sizes and the complexity fit tells them apart.
//!
//! The harness size maps to a depth `n = 2·log2(size)`, so the default size
//! ladder (64 … 16384) gives n = 12, 16, 20, 24, 28.

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use crate::error::{BenchError, Result};
use crate::registry::{AlgorithmRunner, VariantClosure};
use std::hint::black_box;

pub struct FibonacciRunner;

impl AlgorithmRunner for FibonacciRunner {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn description(&self) -> &'static str {
        "n-th Fibonacci number: recursive vs iterative vs fast doubling"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, _seed: u64) -> Vec<VariantClosure<'a>> {
        let depth = depth_for_size(size);

        code::available_variants()
            .into_iter()
            .map(|v| {
                let func = v.function;
                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, value) = crate::measure!(black_box(func(black_box(depth))));
                        (elapsed, Some(value as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        for n in 0..=30 {
            let expected = fib_iterative(n);
            for variant in code::available_variants() {
                let got = (variant.function)(n);
                if got != expected {
                    return Err(BenchError::verification(
                        self.name(),
                        format!(
                            "variant '{}' gave fib({}) = {}, expected {}",
                            variant.name, n, got, expected
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    fn complexity_n(&self, size: usize) -> usize {
        depth_for_size(size) as usize
    }
}
