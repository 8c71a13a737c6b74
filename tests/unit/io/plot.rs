//! Tests for leakage chart rendering

#[cfg(test)]
mod tests {
    use nandleak::AnalysisError;
    use nandleak::analysis::leakage::LeakageSeries;
    use nandleak::io::plot::render_leakage_plot;
    use nandleak::sweep::voltage::OffsetSweep;
    use ndarray::Array2;

    fn small_series(rows: usize) -> LeakageSeries {
        let reference = vec![0u8; 4];
        let readouts = Array2::from_shape_fn((rows, 4), |(row, _)| u8::from(row % 2 == 0));
        match LeakageSeries::compute(&reference, readouts.view()) {
            Ok(series) => series,
            Err(e) => unreachable!("{e}"),
        }
    }

    // Tests chart rendering writes a PNG for a matching sweep and series
    // Verified by disabling the file save operation
    #[test]
    fn test_render_leakage_plot_creates_file() {
        let sweep = match OffsetSweep::new(-20, 10, 10) {
            Ok(sweep) => sweep,
            Err(e) => unreachable!("{e}"),
        };
        let series = small_series(4);
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(e) => unreachable!("{e}"),
        };
        let output_path = dir.path().join("charts/leakage.png");

        let result = render_leakage_plot(&sweep, &series, &output_path);
        assert!(result.is_ok(), "chart rendering should succeed");
        assert!(output_path.exists(), "chart file should be created");
    }

    // Tests mismatched sweep and series lengths are rejected
    // Verified by truncating the longer side
    #[test]
    fn test_render_leakage_plot_length_mismatch() {
        let sweep = match OffsetSweep::new(-20, 10, 10) {
            Ok(sweep) => sweep,
            Err(e) => unreachable!("{e}"),
        };
        let series = small_series(3);
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(e) => unreachable!("{e}"),
        };

        let result = render_leakage_plot(&sweep, &series, &dir.path().join("leakage.png"));
        assert!(matches!(result, Err(AnalysisError::SweepMismatch { .. })));
    }
}
