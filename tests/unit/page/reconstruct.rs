//! Tests for page reshape and quarter-turn rotation

#[cfg(test)]
mod tests {
    use nandleak::AnalysisError;
    use nandleak::page::geometry::PageGeometry;
    use nandleak::page::reconstruct::{Rotation, reconstruct_page};
    use ndarray::{Array1, array};

    fn sample_row() -> Array1<u8> {
        Array1::from_vec(vec![1, 2, 3, 4, 5, 6])
    }

    // Tests row-major reshape into the page grid
    // Verified by reshaping column-major
    #[test]
    fn test_reconstruct_native_orientation() {
        let row = sample_row();

        let page = match reconstruct_page(row.view(), PageGeometry::new(2, 3), Rotation::None) {
            Ok(page) => page,
            Err(e) => unreachable!("{e}"),
        };

        assert_eq!(page, array![[1u8, 2, 3], [4, 5, 6]]);
    }

    // Tests one counterclockwise quarter turn
    // Verified by rotating clockwise instead
    #[test]
    fn test_reconstruct_quarter_turn() {
        let row = sample_row();

        let page = match reconstruct_page(row.view(), PageGeometry::new(2, 3), Rotation::Quarter) {
            Ok(page) => page,
            Err(e) => unreachable!("{e}"),
        };

        assert_eq!(page, array![[3u8, 6], [2, 5], [1, 4]]);
    }

    // Tests two quarter turns reverse both axes
    // Verified by reversing a single axis
    #[test]
    fn test_reconstruct_half_turn() {
        let row = sample_row();

        let page = match reconstruct_page(row.view(), PageGeometry::new(2, 3), Rotation::Half) {
            Ok(page) => page,
            Err(e) => unreachable!("{e}"),
        };

        assert_eq!(page, array![[6u8, 5, 4], [3, 2, 1]]);
    }

    // Tests three counterclockwise quarter turns
    // Verified by composing a quarter turn with a transpose
    #[test]
    fn test_reconstruct_three_quarter_turn() {
        let row = sample_row();

        let page = match reconstruct_page(
            row.view(),
            PageGeometry::new(2, 3),
            Rotation::ThreeQuarter,
        ) {
            Ok(page) => page,
            Err(e) => unreachable!("{e}"),
        };

        assert_eq!(page, array![[4u8, 1], [5, 2], [6, 3]]);
    }

    // Tests rotation preserves the pixel multiset and value range
    // Verified by zeroing pixels during rotation
    #[test]
    fn test_rotation_preserves_pixels() {
        let row = Array1::from_vec(vec![0u8, 255, 17, 64, 128, 200]);

        for rotation in [
            Rotation::None,
            Rotation::Quarter,
            Rotation::Half,
            Rotation::ThreeQuarter,
        ] {
            let page = match reconstruct_page(row.view(), PageGeometry::new(2, 3), rotation) {
                Ok(page) => page,
                Err(e) => unreachable!("{e}"),
            };

            assert_eq!(page.len(), 6);
            let mut pixels: Vec<u8> = page.iter().copied().collect();
            pixels.sort_unstable();
            assert_eq!(pixels, vec![0, 17, 64, 128, 200, 255]);
        }
    }

    // Tests row length validation against the page geometry
    // Verified by padding short rows with zeros
    #[test]
    fn test_reconstruct_wrong_length() {
        let row = Array1::from_vec(vec![1u8, 2, 3]);

        let result = reconstruct_page(row.view(), PageGeometry::new(2, 3), Rotation::None);
        assert!(matches!(
            result,
            Err(AnalysisError::GeometryMismatch { .. })
        ));
    }

    // Tests quarter-turn counts map onto rotation variants
    // Verified by accepting counts above three
    #[test]
    fn test_rotation_from_quarter_turns() {
        for turns in 0u8..=3 {
            match Rotation::from_quarter_turns(turns) {
                Ok(rotation) => assert_eq!(rotation.quarter_turns(), turns),
                Err(e) => unreachable!("{e}"),
            }
        }

        assert!(matches!(
            Rotation::from_quarter_turns(4),
            Err(AnalysisError::InvalidParameter { .. })
        ));
    }
}
