//! Power function implementations and the loops that drive them.
//!
//! The variants differ in two ways: which `pow` implementation runs, and
//! how its operands reach it. Literal operands let the optimizer fold the
//! whole call away; operands hidden behind `black_box` or read from a
//! random table cannot be folded.

pub mod c_impl;
mod exp_ln;
mod original;

pub use c_impl::{pow_c_original, C_IMPL_AVAILABLE};
pub use exp_ln::pow_exp_ln;
pub use original::{pow_f32, pow_original};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::ops::Range;

use crate::utils::VariantInfo;

/// Operand range for randomized inputs
pub const POW_RANGE: Range<f64> = 1.0..10.0;

/// Operands of the classic `pow(1.2, 1.2)` example
pub const LITERAL_BASE: f64 = 1.2;
pub const LITERAL_EXPONENT: f64 = 1.2;

/// Double-precision signature
pub type PowFn = fn(f64, f64) -> f64;

/// Single-precision signature
pub type PowF32Fn = fn(f32, f32) -> f32;

/// Operand table shared by all variants of one sample size
#[derive(Clone, Debug)]
pub struct PowInputs {
    bases: Vec<f64>,
    exponents: Vec<f64>,
    bases_f32: Vec<f32>,
    exponents_f32: Vec<f32>,
}

impl PowInputs {
    /// `len` operand pairs drawn uniformly from [`POW_RANGE`].
    pub fn random(len: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (bases, exponents): (Vec<f64>, Vec<f64>) = (0..len)
            .map(|_| (rng.random_range(POW_RANGE), rng.random_range(POW_RANGE)))
            .unzip();
        Self::from_pairs(bases, exponents)
    }

    /// Build a table from explicit operands.
    ///
    /// # Panics
    /// Panics if the two vectors have different lengths.
    pub fn from_pairs(bases: Vec<f64>, exponents: Vec<f64>) -> Self {
        assert_eq!(bases.len(), exponents.len(), "Operand vectors must have the same length");
        let bases_f32 = bases.iter().map(|&b| b as f32).collect();
        let exponents_f32 = exponents.iter().map(|&e| e as f32).collect();
        Self {
            bases,
            exponents,
            bases_f32,
            exponents_f32,
        }
    }

    pub fn bases(&self) -> &[f64] {
        &self.bases
    }

    pub fn exponents(&self) -> &[f64] {
        &self.exponents
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.bases.iter().copied().zip(self.exponents.iter().copied())
    }
}

/// A `pow` implementation bound to an operand feeding strategy
#[derive(Clone, Copy, Debug)]
pub enum PowKernel {
    /// Literal operands; only the result goes through `black_box`
    Literal(PowFn),
    /// Literal operands laundered through `black_box`
    Opaque(PowFn),
    /// Operands read from the random table
    Table(PowFn),
    /// Table operands narrowed to `f32`
    TableF32(PowF32Fn),
}

impl PowKernel {
    /// Evaluate `pow` once per table entry and return the last value.
    ///
    /// Every intermediate result passes through `black_box`, so no
    /// iteration is dead code. An empty table returns 0.
    pub fn run(self, inputs: &PowInputs) -> f64 {
        let mut y = 0.0;
        match self {
            PowKernel::Literal(f) => {
                for _ in 0..inputs.len() {
                    y = black_box(f(LITERAL_BASE, LITERAL_EXPONENT));
                }
            }
            PowKernel::Opaque(f) => {
                for _ in 0..inputs.len() {
                    y = black_box(f(black_box(LITERAL_BASE), black_box(LITERAL_EXPONENT)));
                }
            }
            PowKernel::Table(f) => {
                for (base, exponent) in inputs.pairs() {
                    y = black_box(f(base, exponent));
                }
            }
            PowKernel::TableF32(f) => {
                let mut y32 = 0.0f32;
                for (&base, &exponent) in inputs.bases_f32.iter().zip(&inputs.exponents_f32) {
                    y32 = black_box(f(base, exponent));
                }
                y = f64::from(y32);
            }
        }
        y
    }

    /// Apply the underlying implementation to one operand pair
    pub fn apply(self, base: f64, exponent: f64) -> f64 {
        match self {
            PowKernel::Literal(f) | PowKernel::Opaque(f) | PowKernel::Table(f) => f(base, exponent),
            PowKernel::TableF32(f) => f64::from(f(base as f32, exponent as f32)),
        }
    }

    /// Relative tolerance against `f64::powf` for this kernel's precision
    pub fn tolerance(self) -> f64 {
        match self {
            PowKernel::TableF32(_) => 1e-5,
            _ => 1e-12,
        }
    }
}

/// Get all available variants for this build
pub fn available_variants() -> Vec<VariantInfo<PowKernel>> {
    let mut variants = vec![
        VariantInfo {
            name: "original",
            description: "pow(1.2, 1.2) with literal operands (foldable)",
            function: PowKernel::Literal(pow_original),
        },
        VariantInfo {
            name: "black_box",
            description: "Literal operands hidden behind black_box",
            function: PowKernel::Opaque(pow_original),
        },
        VariantInfo {
            name: "random",
            description: "Random operands in [1, 10) read from a table",
            function: PowKernel::Table(pow_original),
        },
        VariantInfo {
            name: "f32",
            description: "Random operands narrowed to f32",
            function: PowKernel::TableF32(pow_f32),
        },
        VariantInfo {
            name: "exp_ln",
            description: "exp(exponent * ln(base)) on random operands",
            function: PowKernel::Table(pow_exp_ln),
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C libm pow() on random operands",
            function: PowKernel::Table(pow_c_original),
        });
    }

    variants
}
