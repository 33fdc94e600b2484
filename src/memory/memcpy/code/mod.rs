//! Byte copy implementations.

use crate::utils::VariantInfo;

/// Type alias for copy function signature: `(dst, src)`
pub type CopyFn = fn(&mut [u8], &[u8]);

/// `slice::copy_from_slice`, lowered by rustc to a `memcpy` call.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn copy_original(dst: &mut [u8], src: &[u8]) {
    dst.copy_from_slice(src);
}

/// Byte-at-a-time loop. The optimizer is likely to recognise the idiom and
/// turn it into `memcpy` anyway; the numbers tell whether it did.
pub fn copy_loop(dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len(), "Buffers must have the same length");
    for (d, s) in dst.iter_mut().zip(src) {
        *d = *s;
    }
}

/// `memcpy` from the platform C library.
pub fn copy_libc(dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len(), "Buffers must have the same length");
    // SAFETY: both buffers are valid for `len` bytes and cannot overlap,
    // since one is borrowed mutably and the other shared.
    unsafe {
        libc::memcpy(
            dst.as_mut_ptr().cast::<libc::c_void>(),
            src.as_ptr().cast::<libc::c_void>(),
            src.len(),
        );
    }
}

/// Cheap fingerprint of a buffer: first, middle and last byte.
pub fn checksum(buf: &[u8]) -> u32 {
    match buf.len() {
        0 => 0,
        len => u32::from(buf[0]) + u32::from(buf[len / 2]) + u32::from(buf[len - 1]),
    }
}

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<CopyFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "copy_from_slice",
            function: copy_original,
        },
        VariantInfo {
            name: "loop",
            description: "Element-wise copy loop",
            function: copy_loop,
        },
        VariantInfo {
            name: "libc-memcpy",
            description: "memcpy from the C library",
            function: copy_libc,
        },
    ]
}
