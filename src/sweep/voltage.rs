//! Validated offset-voltage range and per-step metadata

use crate::io::configuration::{SWEEP_END_MV, SWEEP_START_MV, SWEEP_STEP_MV};
use crate::io::error::{AnalysisError, Result, invalid_parameter};

/// A single step of the offset sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetStep {
    /// Position within the voltage-ordered sweep
    pub index: usize,
    /// Applied offset in millivolts
    pub millivolts: i32,
}

impl OffsetStep {
    /// Offset expressed in volts
    pub const fn volts(&self) -> f64 {
        self.millivolts as f64 / 1000.0
    }

    /// Filename for the page recovered at this step
    pub fn page_filename(&self) -> String {
        format!("Voff_{}V.png", self.millivolts)
    }
}

/// Inclusive offset-voltage range with a fixed increment
///
/// Steps are ordered from most negative to most positive offset and are
/// aligned index-for-index with a realigned readout capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetSweep {
    start_mv: i32,
    end_mv: i32,
    step_mv: i32,
}

impl OffsetSweep {
    /// Create a validated sweep over `[start_mv, end_mv]` in `step_mv` steps
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the step is not positive, the
    /// range is reversed, or the endpoints are not step-aligned
    pub fn new(start_mv: i32, end_mv: i32, step_mv: i32) -> Result<Self> {
        if step_mv <= 0 {
            return Err(invalid_parameter(
                "step_mv",
                &step_mv,
                &"step must be positive",
            ));
        }
        if end_mv < start_mv {
            return Err(invalid_parameter(
                "end_mv",
                &end_mv,
                &format!("end must not precede start ({start_mv})"),
            ));
        }
        if (end_mv - start_mv) % step_mv != 0 {
            return Err(invalid_parameter(
                "step_mv",
                &step_mv,
                &format!("range {start_mv}..={end_mv} is not step-aligned"),
            ));
        }
        Ok(Self {
            start_mv,
            end_mv,
            step_mv,
        })
    }

    /// The sweep applied by the capture procedure: -1280 mV to +1270 mV in
    /// 10 mV increments, 256 steps
    pub const fn standard() -> Self {
        Self {
            start_mv: SWEEP_START_MV,
            end_mv: SWEEP_END_MV,
            step_mv: SWEEP_STEP_MV,
        }
    }

    /// Number of steps in the sweep
    pub const fn len(&self) -> usize {
        ((self.end_mv - self.start_mv) / self.step_mv) as usize + 1
    }

    /// Test whether the sweep holds no steps; a validated sweep never does
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset in millivolts at a step index, if in range
    pub fn millivolts_at(&self, index: usize) -> Option<i32> {
        (index < self.len()).then_some(self.start_mv + self.step_mv * index as i32)
    }

    /// Iterate the sweep steps from most negative to most positive offset
    pub fn steps(&self) -> impl Iterator<Item = OffsetStep> + '_ {
        (0..self.len()).map(move |index| OffsetStep {
            index,
            millivolts: self.start_mv + self.step_mv * index as i32,
        })
    }

    /// Validate that a capture has one row per sweep step
    ///
    /// # Errors
    ///
    /// Returns a sweep mismatch error when the row count differs from the
    /// step count
    pub const fn check_alignment(&self, rows: usize) -> Result<()> {
        if rows == self.len() {
            Ok(())
        } else {
            Err(AnalysisError::SweepMismatch {
                steps: self.len(),
                rows,
            })
        }
    }
}
