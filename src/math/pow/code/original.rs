//! Reference implementations: the standard library's `powf`.

/// Raise `base` to `exponent` in double precision.
///
/// # Example
/// ```
/// use pow_microbench::math::pow::pow_original;
///
/// let y = pow_original(1.2, 1.2);
/// assert!((y - 1.2445).abs() < 1e-4);
/// ```
pub fn pow_original(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Single-precision counterpart of [`pow_original`].
pub fn pow_f32(base: f32, exponent: f32) -> f32 {
    base.powf(exponent)
}
