//! Bit-level expansion of byte matrices for inspection

use bitvec::order::Msb0;
use bitvec::view::BitView;
use ndarray::{Array2, ArrayView2};

/// Expand each byte into its eight binary digits, most significant first
///
/// The output matrix has eight times the input column count and contains only
/// 0 and 1 values. Used for bit-level inspection of captures; the leakage
/// computation works on the byte matrix directly.
pub fn expand_to_bits(values: ArrayView2<'_, u8>) -> Array2<u8> {
    let (rows, cols) = values.dim();
    let mut bits = Array2::zeros((rows, cols * 8));

    for ((row, col), value) in values.indexed_iter() {
        for (offset, bit) in value.view_bits::<Msb0>().iter().by_vals().enumerate() {
            if let Some(cell) = bits.get_mut((row, col * 8 + offset)) {
                *cell = u8::from(bit);
            }
        }
    }

    bits
}
