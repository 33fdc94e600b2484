//! # memcpy
//!
//! Throughput demonstration: copying `size` bytes per sample, reported as
//! bytes per second (or per cycle in cycle-counter mode).

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use crate::error::{BenchError, Result};
use crate::registry::{AlgorithmRunner, VariantClosure};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::hint::black_box;

/// Random source buffer of `size` bytes
fn generate_source(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut buf = vec![0u8; size];
    rng.fill_bytes(&mut buf);
    buf
}

pub struct MemcpyRunner;

impl AlgorithmRunner for MemcpyRunner {
    fn name(&self) -> &'static str {
        "memcpy"
    }

    fn description(&self) -> &'static str {
        "Copies a byte buffer; reports bytes processed per unit of time"
    }

    fn category(&self) -> &'static str {
        "memory"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>> {
        let src = generate_source(size, seed);

        code::available_variants()
            .into_iter()
            .map(|v| {
                let src = src.clone();
                let mut dst = vec![0u8; size];
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, _) =
                            crate::measure!(func(black_box(dst.as_mut_slice()), black_box(src.as_slice())));
                        (elapsed, Some(f64::from(checksum(black_box(dst.as_slice())))))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        for size in [0usize, 1, 63, 4097] {
            let src = generate_source(size, size as u64);
            for variant in code::available_variants() {
                let mut dst = vec![0u8; size];
                (variant.function)(&mut dst, &src);
                if dst != src {
                    return Err(BenchError::verification(
                        self.name(),
                        format!("variant '{}' corrupted a {}-byte copy", variant.name, size),
                    ));
                }
            }
        }
        Ok(())
    }

    fn bytes_per_run(&self, size: usize) -> Option<u64> {
        Some(size as u64)
    }
}
