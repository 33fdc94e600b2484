//! # Power Function
//!
//! The classic micro-benchmark pitfall: timing `pow(1.2, 1.2)`.
//!
//! With literal operands the optimizer is free to evaluate the call at
//! compile time, and without an observable result it may drop the loop
//! altogether. The variants here show the progression:
//!
//! - **original**: literal operands, only the result is black-boxed
//! - **black_box**: operands laundered through `std::hint::black_box`
//! - **random**: operands drawn at runtime from `[1, 10)`, so nothing can fold
//! - **f32** / **exp_ln** / **c-original**: alternative implementations over
//!   the same random operands
//!
//! Every sample evaluates `size` powers and hands the last value back to the
//! harness, which prints it next to the timings.

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use crate::error::{BenchError, Result};
use crate::registry::{AlgorithmRunner, VariantClosure};
use std::sync::Arc;

/// Approximate value of `1.2^1.2`
pub const LITERAL_RESULT_APPROX: f64 = 1.2445;

/// Runner for the power function benchmark
pub struct PowRunner;

impl AlgorithmRunner for PowRunner {
    fn name(&self) -> &'static str {
        "pow"
    }

    fn description(&self) -> &'static str {
        "Raises a double to a double power, guarding against constant folding"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>> {
        let inputs = Arc::new(PowInputs::random(size, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let inputs = Arc::clone(&inputs);
                let kernel = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, y) = crate::measure!(kernel.run(&inputs));
                        (elapsed, Some(y))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        let literal = pow_original(LITERAL_BASE, LITERAL_EXPONENT);
        if (literal - LITERAL_RESULT_APPROX).abs() > 1e-4 {
            return Err(BenchError::verification(
                self.name(),
                format!("pow(1.2, 1.2) = {}, expected ~{}", literal, LITERAL_RESULT_APPROX),
            ));
        }

        let inputs = PowInputs::random(1024, 0x5EED_0F_9041);

        for variant in code::available_variants() {
            let kernel = variant.function;
            for (base, exponent) in inputs.pairs() {
                let expected = base.powf(exponent);
                let got = kernel.apply(base, exponent);

                if !got.is_finite() || got <= 0.0 {
                    return Err(BenchError::verification(
                        self.name(),
                        format!(
                            "variant '{}' produced {} for pow({}, {})",
                            variant.name, got, base, exponent
                        ),
                    ));
                }

                let rel_error = (got - expected).abs() / expected;
                if rel_error > kernel.tolerance() {
                    return Err(BenchError::verification(
                        self.name(),
                        format!(
                            "variant '{}' pow({}, {}) = {}, expected {}, relative error {:e}",
                            variant.name, base, exponent, got, expected, rel_error
                        ),
                    ));
                }
            }
        }

        Ok(())
    }
}
