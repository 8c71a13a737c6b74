//! Reshape and rotation of readout rows into page grids

use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::page::geometry::PageGeometry;
use ndarray::{Array2, ArrayView1, Axis};

/// Quarter-turn rotation applied to reconstructed pages
///
/// The capture hardware streams the page in its native orientation, so the
/// default is no rotation. Other orientations are exposed for captures taken
/// with a transposed column decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Native orientation
    #[default]
    None,
    /// One counterclockwise quarter turn
    Quarter,
    /// Two quarter turns
    Half,
    /// Three counterclockwise quarter turns
    ThreeQuarter,
}

impl Rotation {
    /// Build a rotation from a quarter-turn count
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for counts above 3
    pub fn from_quarter_turns(turns: u8) -> Result<Self> {
        match turns {
            0 => Ok(Self::None),
            1 => Ok(Self::Quarter),
            2 => Ok(Self::Half),
            3 => Ok(Self::ThreeQuarter),
            _ => Err(invalid_parameter(
                "rotate",
                &turns,
                &"quarter turns must be between 0 and 3",
            )),
        }
    }

    /// Number of counterclockwise quarter turns
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Quarter => 1,
            Self::Half => 2,
            Self::ThreeQuarter => 3,
        }
    }
}

/// Reshape one readout row into the page grid and rotate it
///
/// The row is interpreted as row-major pixel bytes. Values pass through
/// unchanged, so the 0-255 range of the input is preserved.
///
/// # Errors
///
/// Returns an error if the row length does not match the page pixel count
pub fn reconstruct_page(
    row: ArrayView1<'_, u8>,
    geometry: PageGeometry,
    rotation: Rotation,
) -> Result<Array2<u8>> {
    geometry.check_row_length(row.len())?;

    let grid = Array2::from_shape_vec((geometry.rows(), geometry.cols()), row.to_vec())
        .map_err(|e| computation_error("page reshape", &e))?;

    Ok(rotate_quarter_turns(grid, rotation))
}

// Counterclockwise rotation matching the transpose/flip identities:
// one turn maps (i, j) to (j, cols - 1 - i)
fn rotate_quarter_turns(grid: Array2<u8>, rotation: Rotation) -> Array2<u8> {
    match rotation {
        Rotation::None => grid,
        Rotation::Quarter => {
            let mut rotated = grid.t().to_owned();
            rotated.invert_axis(Axis(0));
            rotated
        }
        Rotation::Half => {
            let mut rotated = grid;
            rotated.invert_axis(Axis(0));
            rotated.invert_axis(Axis(1));
            rotated
        }
        Rotation::ThreeQuarter => {
            let mut rotated = grid.t().to_owned();
            rotated.invert_axis(Axis(1));
            rotated
        }
    }
}
