//! Row realignment for monotonic voltage ordering
//!
//! Capture files order rows by set-feature code: zero and positive offsets
//! first, then the negative offsets. Rotating the sequence by half its length
//! restores the order from most negative to most positive offset.

use crate::io::error::{Result, computation_error};
use ndarray::{Array2, ArrayView2, Axis, concatenate, s};

/// Move the second half of a sequence before the first half, in place
///
/// For an odd length the extra element stays with the leading half. The
/// rotation permutes indices without dropping elements, and applying it twice
/// to an even-length sequence restores the original order.
pub fn rotate_half<T>(items: &mut [T]) {
    let mid = items.len() / 2;
    items.rotate_left(mid);
}

/// Rotate the rows of a matrix by half the row count
///
/// # Errors
///
/// Returns a computation error if the halves cannot be rejoined
pub fn rotate_rows_half(matrix: ArrayView2<'_, u8>) -> Result<Array2<u8>> {
    let mid = matrix.nrows() / 2;
    let tail = matrix.slice(s![mid.., ..]);
    let head = matrix.slice(s![..mid, ..]);

    concatenate(Axis(0), &[tail, head]).map_err(|e| computation_error("row realignment", &e))
}
