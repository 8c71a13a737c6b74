//! Leakage normalization over a readout sweep

use crate::analysis::hamming::row_bitflips;
use crate::io::error::{AnalysisError, Result};
use ndarray::ArrayView2;

const BITS_PER_BYTE: u64 = 8;

/// Per-step leakage derived from bitflip counts against the reference page
///
/// Rows are expected in sweep order, so index `i` of the series describes
/// step `i` of the offset sweep.
#[derive(Debug, Clone)]
pub struct LeakageSeries {
    bitflips: Vec<u64>,
    bits_per_row: u64,
}

impl LeakageSeries {
    /// Compute the series for a realigned capture
    ///
    /// # Errors
    ///
    /// Returns an error if the capture is empty or its column count differs
    /// from the reference length
    pub fn compute(reference: &[u8], readouts: ArrayView2<'_, u8>) -> Result<Self> {
        if readouts.ncols() == 0 {
            return Err(AnalysisError::InvalidSourceData {
                reason: "readout matrix has no columns".to_string(),
            });
        }

        let bitflips = row_bitflips(reference, readouts)?;

        Ok(Self {
            bitflips,
            bits_per_row: readouts.ncols() as u64 * BITS_PER_BYTE,
        })
    }

    /// Number of steps in the series
    pub const fn len(&self) -> usize {
        self.bitflips.len()
    }

    /// Test whether the series holds no steps
    pub const fn is_empty(&self) -> bool {
        self.bitflips.is_empty()
    }

    /// Raw bitflip counts per step
    pub const fn bitflips(&self) -> &[u64] {
        self.bitflips.as_slice()
    }

    /// Bits compared per step
    pub const fn bits_per_row(&self) -> u64 {
        self.bits_per_row
    }

    /// Leakage percentage for one step, in [0, 100]
    pub fn leakage_percent(&self, index: usize) -> Option<f64> {
        self.bitflips
            .get(index)
            .map(|&flips| 100.0 * flips as f64 / self.bits_per_row as f64)
    }

    /// Iterate leakage percentages in sweep order
    pub fn leakage_percentages(&self) -> impl Iterator<Item = f64> + '_ {
        self.bitflips
            .iter()
            .map(|&flips| 100.0 * flips as f64 / self.bits_per_row as f64)
    }

    /// Iterate the recovered-data match curve, `100 - leakage%`
    pub fn match_percentages(&self) -> impl Iterator<Item = f64> + '_ {
        self.leakage_percentages().map(|leakage| 100.0 - leakage)
    }
}
