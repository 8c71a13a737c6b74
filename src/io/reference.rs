//! Reference page loading

use crate::io::error::{AnalysisError, Result};
use crate::page::geometry::PageGeometry;
use std::fs;
use std::path::Path;

/// The known page content that readouts are compared against
///
/// Loaded once per run from a text file of comma-separated decimal bytes,
/// flattened in the same row-major order as the readout rows.
#[derive(Debug, Clone)]
pub struct ReferencePage {
    pixels: Vec<u8>,
}

impl ReferencePage {
    /// Load the reference page from a delimited text file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a token is not a byte
    /// value, or the value count differs from the page pixel count
    pub fn from_file(path: &Path, geometry: PageGeometry) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AnalysisError::FileSystem {
            path: path.to_path_buf(),
            operation: "read reference",
            source: e,
        })?;

        Self::from_text(&contents, path, geometry)
    }

    /// Parse reference pixels from text; `path` is used for error reporting
    ///
    /// Values may be separated by commas, spaces or newlines.
    ///
    /// # Errors
    ///
    /// Returns an error if a token is not a byte value or the value count
    /// differs from the page pixel count
    pub fn from_text(contents: &str, path: &Path, geometry: PageGeometry) -> Result<Self> {
        let mut pixels = Vec::with_capacity(geometry.pixel_count());

        let tokens = contents
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());

        for token in tokens {
            let value = token.parse::<u8>().map_err(|e| AnalysisError::ReferenceData {
                path: path.to_path_buf(),
                reason: format!("`{token}` is not a byte value ({e})"),
            })?;
            pixels.push(value);
        }

        if pixels.len() != geometry.pixel_count() {
            return Err(AnalysisError::GeometryMismatch {
                context: "reference pixel count",
                expected: geometry.pixel_count(),
                actual: pixels.len(),
            });
        }

        Ok(Self { pixels })
    }

    /// Flattened reference pixels in row-major order
    pub const fn pixels(&self) -> &[u8] {
        self.pixels.as_slice()
    }

    /// Number of reference pixels
    pub const fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Test whether the page holds no pixels
    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
