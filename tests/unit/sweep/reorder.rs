//! Tests for half-rotation row realignment

#[cfg(test)]
mod tests {
    use nandleak::sweep::reorder::{rotate_half, rotate_rows_half};
    use ndarray::array;

    // Tests the second half moves before the first half
    // Verified by rotating right instead of left
    #[test]
    fn test_rotate_half_even_length() {
        let mut items = vec![0, 1, 2, 3, 4, 5];

        rotate_half(&mut items);

        assert_eq!(items, vec![3, 4, 5, 0, 1, 2]);
    }

    // Tests the extra element of an odd-length sequence stays in front
    // Verified by rounding the midpoint up
    #[test]
    fn test_rotate_half_odd_length() {
        let mut items = vec![0, 1, 2, 3, 4];

        rotate_half(&mut items);

        assert_eq!(items, vec![2, 3, 4, 0, 1]);
    }

    // Tests double rotation restores an even-length sequence
    // Verified by dropping an element during rotation
    #[test]
    fn test_rotate_half_twice_is_identity() {
        let original: Vec<u32> = (0..256).collect();
        let mut items = original.clone();

        rotate_half(&mut items);
        assert_ne!(items, original);
        rotate_half(&mut items);
        assert_eq!(items, original);
    }

    // Tests rotation permutes elements without loss
    // Verified by duplicating the pivot row
    #[test]
    fn test_rotate_half_is_bijection() {
        let original = vec![9, 1, 7, 7, 3, 5];
        let mut items = original.clone();

        rotate_half(&mut items);

        let mut sorted_original = original;
        let mut sorted_rotated = items;
        sorted_original.sort_unstable();
        sorted_rotated.sort_unstable();
        assert_eq!(sorted_rotated, sorted_original);
    }

    // Tests matrix rows rotate together with their contents intact
    // Verified by rotating columns instead of rows
    #[test]
    fn test_rotate_rows_half_matrix() {
        let matrix = array![[0u8, 0], [1, 1], [2, 2], [3, 3]];

        let rotated = match rotate_rows_half(matrix.view()) {
            Ok(rotated) => rotated,
            Err(e) => unreachable!("{e}"),
        };

        assert_eq!(rotated, array![[2u8, 2], [3, 3], [0, 0], [1, 1]]);
    }
}
