//! Hardware counter access for the `cpu_cycles` measurement mode.
//!
//! x86/x86_64 read the timestamp counter fenced with LFENCE on both sides so
//! that neighbouring instructions cannot drift into or out of the timed
//! region. aarch64 reads `CNTVCT_EL0`, a fixed-frequency virtual timer that
//! user space may access; it ticks slower than the core clock.

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{_mm_lfence, _rdtsc};

#[cfg(target_arch = "x86")]
use core::arch::x86::{_mm_lfence, _rdtsc};

/// Read the counter.
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
pub fn read_cycles() -> u64 {
    // SAFETY: LFENCE and RDTSC are available on every x86 CPU that runs
    // 64-bit code and on every SSE2-capable 32-bit CPU.
    unsafe {
        _mm_lfence();
        let tsc = _rdtsc();
        _mm_lfence();
        tsc
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn read_cycles() -> u64 {
    let ticks: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0 on all supported kernels.
    unsafe {
        core::arch::asm!("isb", "mrs {}, cntvct_el0", out(reg) ticks, options(nomem, nostack));
    }
    ticks
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
compile_error!("the cpu_cycles feature needs x86, x86_64 or aarch64; build with --features use_time");
