//! Bit-error counting, leakage normalization and bit-level expansion

/// Bit-level expansion of byte matrices for inspection
pub mod bits;
/// Bitwise distance between readout rows and the reference page
pub mod hamming;
/// Leakage normalization over a readout sweep
pub mod leakage;

pub use leakage::LeakageSeries;
