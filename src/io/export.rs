//! Leakage series and bit-matrix file exports

use crate::analysis::leakage::LeakageSeries;
use crate::io::error::{AnalysisError, Result};
use crate::sweep::voltage::OffsetSweep;
use ndarray::ArrayView2;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Write the per-step leakage series as CSV
///
/// Columns: offset millivolts, raw bitflip count, leakage percentage.
///
/// # Errors
///
/// Returns an error if the sweep and series lengths disagree, or if the file
/// cannot be written
pub fn write_leakage_csv(
    sweep: &OffsetSweep,
    series: &LeakageSeries,
    output_path: &Path,
) -> Result<()> {
    if sweep.len() != series.len() {
        return Err(AnalysisError::SweepMismatch {
            steps: sweep.len(),
            rows: series.len(),
        });
    }

    let mut contents = String::from("offset_mv,bitflips,leakage_percent\n");
    for (step, leakage) in sweep.steps().zip(series.leakage_percentages()) {
        let flips = series.bitflips().get(step.index).copied().unwrap_or(0);
        // Writing to a String cannot fail
        let _ = writeln!(contents, "{},{flips},{leakage:.6}", step.millivolts);
    }

    write_file(output_path, &contents, "write leakage csv")
}

/// Dump a bit matrix as comma-separated 0/1 rows
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn write_bit_matrix(bits: ArrayView2<'_, u8>, output_path: &Path) -> Result<()> {
    let mut contents = String::with_capacity(bits.len() * 2);
    for row in bits.rows() {
        let mut first = true;
        for value in &row {
            if !first {
                contents.push(',');
            }
            first = false;
            let _ = write!(contents, "{value}");
        }
        contents.push('\n');
    }

    write_file(output_path, &contents, "write bit matrix")
}

fn write_file(path: &Path, contents: &str, operation: &'static str) -> Result<()> {
    if let Some(parent) = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(|e| AnalysisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| AnalysisError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source: e,
    })
}
