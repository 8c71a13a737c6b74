//! Readout capture parsing and realignment
//!
//! Each capture line carries a set-feature descriptor, a page tag and two
//! bookkeeping fields ahead of the page bytes:
//!
//! `<label>: <feature> P<page>,<meta1>,<meta2>,<v1>,<v2>,...`
//!
//! Every field is validated during parsing; a malformed line fails the run
//! with its line number rather than producing a silently truncated record.

use crate::io::error::{AnalysisError, Result, computation_error};
use crate::sweep::reorder::{rotate_half, rotate_rows_half};
use ndarray::{Array2, ArrayView2};
use std::fs;
use std::path::Path;

/// One parsed capture line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadoutRecord {
    /// Set-feature descriptor controlling the offset DAC for this row
    pub set_feature: String,
    /// Page tag following the `P` separator
    pub page_tag: String,
    /// Bookkeeping fields between the page tag and the data
    pub metadata: [String; 2],
    /// Raw page bytes
    pub values: Vec<u8>,
}

/// Parse a single capture line
///
/// # Errors
///
/// Returns a record parse error naming `line_number` when a delimiter or
/// field is missing, or when a data token is not a decimal byte value
pub fn parse_record(line: &str, line_number: usize, path: &Path) -> Result<ReadoutRecord> {
    let parse_error = |reason: String| AnalysisError::RecordParse {
        path: path.to_path_buf(),
        line: line_number,
        reason,
    };

    let (_, after_label) = line
        .split_once(": ")
        .ok_or_else(|| parse_error("missing `: ` after the record label".to_string()))?;
    let (set_feature, tail) = after_label
        .split_once(" P")
        .ok_or_else(|| parse_error("missing ` P` page separator".to_string()))?;

    let mut fields = tail.split(',');
    let page_tag = fields
        .next()
        .ok_or_else(|| parse_error("missing page tag".to_string()))?;
    let meta_first = fields
        .next()
        .ok_or_else(|| parse_error("missing first metadata field".to_string()))?;
    let meta_second = fields
        .next()
        .ok_or_else(|| parse_error("missing second metadata field".to_string()))?;

    let mut values = Vec::new();
    for (column, token) in fields.enumerate() {
        let token = token.trim();
        let value = token.parse::<u8>().map_err(|e| {
            parse_error(format!("column {column}: `{token}` is not a byte value ({e})"))
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(parse_error("record carries no data values".to_string()));
    }

    Ok(ReadoutRecord {
        set_feature: set_feature.to_string(),
        page_tag: page_tag.to_string(),
        metadata: [meta_first.to_string(), meta_second.to_string()],
        values,
    })
}

/// A full capture: one row of page bytes per offset step
///
/// Rows start in file order (set-feature code order) and are realigned to
/// voltage order with [`ReadoutCapture::align_half`].
#[derive(Debug, Clone)]
pub struct ReadoutCapture {
    descriptors: Vec<String>,
    values: Array2<u8>,
}

impl ReadoutCapture {
    /// Parse a capture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, any line fails to parse,
    /// or rows disagree on their value count
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AnalysisError::FileSystem {
            path: path.to_path_buf(),
            operation: "read capture",
            source: e,
        })?;

        Self::from_text(&contents, path)
    }

    /// Parse capture records from text; `path` is used for error reporting
    ///
    /// Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if any line fails to parse, rows disagree on their
    /// value count, or no records are present
    pub fn from_text(contents: &str, path: &Path) -> Result<Self> {
        let mut descriptors = Vec::new();
        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut columns: Option<usize> = None;

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record = parse_record(line, index + 1, path)?;
            match columns {
                None => columns = Some(record.values.len()),
                Some(expected) if expected != record.values.len() => {
                    return Err(AnalysisError::GeometryMismatch {
                        context: "capture row length",
                        expected,
                        actual: record.values.len(),
                    });
                }
                Some(_) => {}
            }

            descriptors.push(record.set_feature);
            rows.push(record.values);
        }

        let columns = columns.ok_or_else(|| AnalysisError::InvalidSourceData {
            reason: format!("capture '{}' contains no records", path.display()),
        })?;

        let flat: Vec<u8> = rows.into_iter().flatten().collect();
        let values = Array2::from_shape_vec((descriptors.len(), columns), flat)
            .map_err(|e| computation_error("capture matrix assembly", &e))?;

        Ok(Self {
            descriptors,
            values,
        })
    }

    /// Number of readout rows
    pub fn row_count(&self) -> usize {
        self.values.nrows()
    }

    /// Number of byte values per row
    pub fn column_count(&self) -> usize {
        self.values.ncols()
    }

    /// Set-feature descriptors, in current row order
    pub const fn descriptors(&self) -> &[String] {
        self.descriptors.as_slice()
    }

    /// The value matrix, in current row order
    pub fn values(&self) -> ArrayView2<'_, u8> {
        self.values.view()
    }

    /// Rotate rows and descriptors by half the row count so that offset
    /// voltage ascends monotonically
    ///
    /// # Errors
    ///
    /// Returns a computation error if the matrix halves cannot be rejoined
    pub fn align_half(&mut self) -> Result<()> {
        self.values = rotate_rows_half(self.values.view())?;
        rotate_half(&mut self.descriptors);
        Ok(())
    }
}
