//! Fixed page grid dimensions and validation

use crate::io::configuration::{PAGE_COLS, PAGE_ROWS};
use crate::io::error::{AnalysisError, Result};

/// Dimensions of the reconstructed page grid
///
/// One readout row holds the page as a flattened row-major byte stream, so
/// the row length must equal `rows * cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    rows: usize,
    cols: usize,
}

impl PageGeometry {
    /// Create a geometry with the given grid dimensions
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// The geometry of the captured page (133 rows by 69 columns)
    pub const fn standard() -> Self {
        Self::new(PAGE_ROWS, PAGE_COLS)
    }

    /// Number of grid rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total pixels in the page grid
    pub const fn pixel_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Validate that a flattened row holds exactly one page
    ///
    /// # Errors
    ///
    /// Returns a geometry mismatch error when `actual` differs from the
    /// page pixel count
    pub const fn check_row_length(&self, actual: usize) -> Result<()> {
        if actual == self.pixel_count() {
            Ok(())
        } else {
            Err(AnalysisError::GeometryMismatch {
                context: "page pixel count",
                expected: self.pixel_count(),
                actual,
            })
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::standard()
    }
}
