//! Error types for capture parsing and analysis operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum AnalysisError {
    /// A capture line is missing a delimiter or field, or carries a bad value
    RecordParse {
        /// Path to the capture file
        path: PathBuf,
        /// One-based line number of the offending record
        line: usize,
        /// Description of what failed to parse
        reason: String,
    },

    /// The reference page file contains a value that is not a byte
    ReferenceData {
        /// Path to the reference file
        path: PathBuf,
        /// Description of the offending value
        reason: String,
    },

    /// Input data doesn't meet pipeline requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// An element count differs from the fixed page geometry
    GeometryMismatch {
        /// What was being measured
        context: &'static str,
        /// Expected element count
        expected: usize,
        /// Observed element count
        actual: usize,
    },

    /// Capture row count differs from the offset sweep length
    ///
    /// Leakage values are aligned with sweep steps by index, so a capture
    /// with the wrong row count cannot be labeled with offset voltages.
    SweepMismatch {
        /// Number of steps in the configured sweep
        steps: usize,
        /// Number of rows in the capture
        rows: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a recovered page image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to render the leakage chart
    PlotRender {
        /// Path where the chart was being written
        path: PathBuf,
        /// Description of the rendering failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordParse { path, line, reason } => {
                write!(
                    f,
                    "Failed to parse record at {}:{line}: {reason}",
                    path.display()
                )
            }
            Self::ReferenceData { path, reason } => {
                write!(f, "Invalid reference data in '{}': {reason}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::GeometryMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Geometry mismatch in {context}: expected {expected} elements, found {actual}"
                )
            }
            Self::SweepMismatch { steps, rows } => {
                write!(
                    f,
                    "Capture has {rows} rows but the offset sweep has {steps} steps"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::PlotRender { path, reason } => {
                write!(f, "Failed to render chart '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<image::ImageError> for AnalysisError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AnalysisError {
    AnalysisError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a generic I/O error for target validation failures
pub fn io_error(msg: &str) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
