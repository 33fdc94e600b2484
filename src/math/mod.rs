//! Numeric kernels.

pub mod fibonacci;
pub mod pow;
