//! Thread pinning for timing stability.
//!
//! On Linux the calling thread is bound to the core it currently runs on
//! through `sched_setaffinity`, and the previous mask is restored when the
//! guard drops. Other platforms get a guard that reports "not pinned";
//! measurements still run, just with scheduler migrations possible.

#[cfg(target_os = "linux")]
mod platform {
    use std::mem;

    /// Saved affinity mask of the calling thread.
    pub struct SavedMask(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn save() -> Option<SavedMask> {
        // SAFETY: a zeroed cpu_set_t is a valid empty set, and the size we
        // pass matches the buffer.
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            if libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                Some(SavedMask(set))
            } else {
                None
            }
        }
    }

    pub fn pin(core: usize) -> bool {
        if core >= libc::CPU_SETSIZE as usize {
            return false;
        }
        // SAFETY: as above; `core` is within the set capacity.
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &SavedMask) -> bool {
        // SAFETY: the mask came from sched_getaffinity on this thread.
        unsafe { libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0 }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct SavedMask;

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn save() -> Option<SavedMask> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn restore(_saved: &SavedMask) -> bool {
        true
    }
}

/// Number of online CPUs as reported by the OS.
pub fn online_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// RAII guard: pins the current thread on creation, restores on drop.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new();
///     // timed region
/// } // original affinity restored
/// ```
pub struct CpuPinGuard {
    core: Option<usize>,
    saved: Option<platform::SavedMask>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is running on right now (core 0 if that
    /// cannot be determined).
    pub fn new() -> Self {
        let core = platform::current_cpu().unwrap_or(0);
        Self::with_core(core)
    }

    /// Pin to a specific core.
    pub fn with_core(core: usize) -> Self {
        let saved = platform::save();
        if saved.is_some() && platform::pin(core) {
            Self {
                core: Some(core),
                saved,
            }
        } else {
            tracing::trace!(core, "CPU pinning unavailable");
            Self {
                core: None,
                saved: None,
            }
        }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.core
    }

    pub fn is_pinned(&self) -> bool {
        self.core.is_some()
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if !platform::restore(&saved) {
                tracing::warn!("Failed to restore CPU affinity");
            }
        }
    }
}
