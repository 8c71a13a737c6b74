//! Bitwise distance between readout rows and the reference page

use crate::io::error::{AnalysisError, Result};
use ndarray::ArrayView2;
use num_traits::PrimInt;

/// Count differing bits between two equal-length word slices
///
/// Symmetric, and zero exactly when the slices are equal.
///
/// # Errors
///
/// Returns a geometry mismatch error when the slices differ in length
pub fn hamming_distance<T: PrimInt>(a: &[T], b: &[T]) -> Result<u64> {
    if a.len() != b.len() {
        return Err(AnalysisError::GeometryMismatch {
            context: "hamming distance operands",
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| u64::from((x ^ y).count_ones()))
        .sum())
}

/// Per-row bitflip counts of a readout matrix against the reference page
///
/// Each row is XORed byte-for-byte against the reference and the set bits of
/// the differences are summed.
///
/// # Errors
///
/// Returns a geometry mismatch error when the matrix column count differs
/// from the reference length
pub fn row_bitflips(reference: &[u8], readouts: ArrayView2<'_, u8>) -> Result<Vec<u64>> {
    if readouts.ncols() != reference.len() {
        return Err(AnalysisError::GeometryMismatch {
            context: "readout columns",
            expected: reference.len(),
            actual: readouts.ncols(),
        });
    }

    let mut counts = Vec::with_capacity(readouts.nrows());
    for row in readouts.rows() {
        let flips = row
            .iter()
            .zip(reference.iter())
            .map(|(&value, &expected)| u64::from((value ^ expected).count_ones()))
            .sum();
        counts.push(flips);
    }

    Ok(counts)
}
