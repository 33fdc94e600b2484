//! FFI binding for the C `pow()` reference.

#[cfg(c_implementation_active)]
mod ffi {
    use std::os::raw::c_double;

    extern "C" {
        pub fn pow_c_original(base: c_double, exponent: c_double) -> c_double;
    }
}

/// C `pow()` from the platform math library
#[cfg(c_implementation_active)]
#[inline(never)]
pub fn pow_c_original(base: f64, exponent: f64) -> f64 {
    // SAFETY: pure function over two doubles, no pointers involved.
    unsafe { ffi::pow_c_original(base, exponent) }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Never registered when the C library was not built
#[cfg(not(c_implementation_active))]
pub fn pow_c_original(_base: f64, _exponent: f64) -> f64 {
    panic!("C implementation not compiled (requires GCC, MSVC or Apple Clang)")
}
