//! Memory movement kernels.

pub mod memcpy;
