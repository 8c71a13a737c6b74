//! Sweep constants and runtime configuration defaults

// Page geometry of the captured flash page
/// Rows in the reconstructed page grid
pub const PAGE_ROWS: usize = 133;
/// Columns in the reconstructed page grid
pub const PAGE_COLS: usize = 69;

// Offset range applied by the read-offset capture procedure
/// Most negative offset in the sweep, in millivolts
pub const SWEEP_START_MV: i32 = -1280;
/// Most positive offset in the sweep, in millivolts
pub const SWEEP_END_MV: i32 = 1270;
/// Offset increment between consecutive sweep steps, in millivolts
pub const SWEEP_STEP_MV: i32 = 10;

// Default input and output locations
/// Default reference page file (flattened decimal byte stream)
pub const DEFAULT_REFERENCE_FILE: &str = "Raw_data_files/3D_tesla_1page_size133x69_dec.txt";
/// Default directory for recovered page images
pub const DEFAULT_OUTPUT_DIR: &str = "Plot_results";
/// Default leakage chart filename
pub const DEFAULT_PLOT_FILE: &str = "Plot_data_leakage_vs_offset_voltage.png";

// Chart geometry reproduces the reference figure (4 x 2.5 inches at 800 DPI)
/// Width of the leakage chart in pixels
pub const PLOT_WIDTH_PX: u32 = 3200;
/// Height of the leakage chart in pixels
pub const PLOT_HEIGHT_PX: u32 = 2000;
/// Radius of scatter markers in pixels
pub const PLOT_MARKER_RADIUS: i32 = 5;
