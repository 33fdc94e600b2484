//! Fibonacci implementations with very different growth rates.

use crate::utils::VariantInfo;

/// Largest depth accepted by the benchmark; fib(93) is the last to fit u64
pub const MAX_DEPTH: u32 = 40;

/// Type alias for fibonacci function signature
pub type FibFn = fn(u32) -> u64;

/// Naive doubly recursive definition, O(φ^n) calls.
///
/// # Example
/// ```
/// use pow_microbench::math::fibonacci::fib_recursive;
///
/// assert_eq!(fib_recursive(10), 55);
/// ```
pub fn fib_recursive(n: u32) -> u64 {
    if n < 2 {
        u64::from(n)
    } else {
        fib_recursive(n - 1) + fib_recursive(n - 2)
    }
}

/// Bottom-up loop, O(n)
pub fn fib_iterative(n: u32) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    a
}

/// Fast doubling, O(log n):
/// F(2k) = F(k)·(2F(k+1) − F(k)), F(2k+1) = F(k)² + F(k+1)²
pub fn fib_fast_doubling(n: u32) -> u64 {
    let mut a = 0u64; // F(k)
    let mut b = 1u64; // F(k+1)
    for bit in (0..u32::BITS - n.leading_zeros()).rev() {
        let c = a.wrapping_mul(b.wrapping_mul(2).wrapping_sub(a));
        let d = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));
        if (n >> bit) & 1 == 0 {
            a = c;
            b = d;
        } else {
            a = d;
            b = c.wrapping_add(d);
        }
    }
    a
}

/// Map a harness size to a recursion depth: `2 * log2(size)`, clamped.
pub fn depth_for_size(size: usize) -> u32 {
    (2 * size.checked_ilog2().unwrap_or(0)).clamp(2, MAX_DEPTH)
}

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<FibFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Naive recursion (exponential)",
            function: fib_recursive,
        },
        VariantInfo {
            name: "iterative",
            description: "Bottom-up loop (linear)",
            function: fib_iterative,
        },
        VariantInfo {
            name: "fast_doubling",
            description: "Fast doubling identities (logarithmic)",
            function: fib_fast_doubling,
        },
    ]
}
