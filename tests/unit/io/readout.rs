//! Tests for capture record parsing and realignment

#[cfg(test)]
mod tests {
    use nandleak::AnalysisError;
    use nandleak::io::readout::{ReadoutCapture, parse_record};
    use std::path::Path;

    const CAPTURE_PATH: &str = "capture.txt";

    // Tests a well-formed line splits into descriptor, tag, metadata and data
    // Verified by shifting the data offset by one field
    #[test]
    fn test_parse_record_well_formed() {
        let line = "Set Feature: 30 P0,blk28,page0,1,2,255";

        let record = match parse_record(line, 1, Path::new(CAPTURE_PATH)) {
            Ok(record) => record,
            Err(e) => unreachable!("{e}"),
        };

        assert_eq!(record.set_feature, "30");
        assert_eq!(record.page_tag, "0");
        assert_eq!(record.metadata, ["blk28".to_string(), "page0".to_string()]);
        assert_eq!(record.values, vec![1, 2, 255]);
    }

    // Tests the error names the offending line for missing delimiters
    // Verified by reporting a fixed line number
    #[test]
    fn test_parse_record_missing_delimiters() {
        let no_colon = "Set Feature 30 P0,blk28,page0,1";
        let result = parse_record(no_colon, 7, Path::new(CAPTURE_PATH));
        assert!(matches!(
            result,
            Err(AnalysisError::RecordParse { line: 7, .. })
        ));

        let no_page = "Set Feature: 30 0,blk28,page0,1";
        assert!(matches!(
            parse_record(no_page, 2, Path::new(CAPTURE_PATH)),
            Err(AnalysisError::RecordParse { line: 2, .. })
        ));
    }

    // Tests out-of-range and non-numeric data tokens are rejected
    // Verified by wrapping values modulo 256
    #[test]
    fn test_parse_record_bad_values() {
        let too_large = "Set Feature: 30 P0,blk28,page0,1,300";
        assert!(matches!(
            parse_record(too_large, 1, Path::new(CAPTURE_PATH)),
            Err(AnalysisError::RecordParse { .. })
        ));

        let not_a_number = "Set Feature: 30 P0,blk28,page0,1,abc";
        assert!(matches!(
            parse_record(not_a_number, 1, Path::new(CAPTURE_PATH)),
            Err(AnalysisError::RecordParse { .. })
        ));
    }

    // Tests records without data values are rejected
    // Verified by emitting an empty row
    #[test]
    fn test_parse_record_no_data() {
        let line = "Set Feature: 30 P0,blk28,page0";

        let result = parse_record(line, 1, Path::new(CAPTURE_PATH));
        assert!(matches!(result, Err(AnalysisError::RecordParse { .. })));
    }

    // Tests capture assembly from multiple consistent records
    // Verified by dropping the blank-line filter
    #[test]
    fn test_capture_from_text() {
        let contents = "\
Set Feature: 80 P0,blk28,page0,10,20,30
Set Feature: 81 P0,blk28,page0,40,50,60

Set Feature: 82 P0,blk28,page0,70,80,90
";

        let capture = match ReadoutCapture::from_text(contents, Path::new(CAPTURE_PATH)) {
            Ok(capture) => capture,
            Err(e) => unreachable!("{e}"),
        };

        assert_eq!(capture.row_count(), 3);
        assert_eq!(capture.column_count(), 3);
        assert_eq!(
            capture.descriptors(),
            &["80".to_string(), "81".to_string(), "82".to_string()]
        );
        assert_eq!(capture.values().row(1).to_vec(), vec![40, 50, 60]);
    }

    // Tests ragged rows are rejected with a geometry error
    // Verified by padding short rows
    #[test]
    fn test_capture_ragged_rows() {
        let contents = "\
Set Feature: 80 P0,blk28,page0,10,20,30
Set Feature: 81 P0,blk28,page0,40,50
";

        let result = ReadoutCapture::from_text(contents, Path::new(CAPTURE_PATH));
        assert!(matches!(
            result,
            Err(AnalysisError::GeometryMismatch { .. })
        ));
    }

    // Tests empty captures are rejected
    // Verified by producing a zero-row matrix
    #[test]
    fn test_capture_empty() {
        let result = ReadoutCapture::from_text("\n\n", Path::new(CAPTURE_PATH));
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidSourceData { .. })
        ));
    }

    // Tests realignment rotates rows and descriptors together
    // Verified by rotating only the value matrix
    #[test]
    fn test_capture_align_half() {
        let contents = "\
Set Feature: 00 P0,b,p,0,0
Set Feature: 01 P0,b,p,1,1
Set Feature: 80 P0,b,p,2,2
Set Feature: 81 P0,b,p,3,3
";

        let mut capture = match ReadoutCapture::from_text(contents, Path::new(CAPTURE_PATH)) {
            Ok(capture) => capture,
            Err(e) => unreachable!("{e}"),
        };

        if let Err(e) = capture.align_half() {
            unreachable!("{e}");
        }

        assert_eq!(
            capture.descriptors(),
            &[
                "80".to_string(),
                "81".to_string(),
                "00".to_string(),
                "01".to_string()
            ]
        );
        assert_eq!(capture.values().row(0).to_vec(), vec![2, 2]);
        assert_eq!(capture.values().row(3).to_vec(), vec![1, 1]);
    }
}
