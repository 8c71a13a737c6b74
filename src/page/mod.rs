//! Page grid geometry and image reconstruction
//!
//! This module contains the fixed geometry of the captured flash page and the
//! reshape/rotate step that turns one readout row back into a 2D pixel grid.

/// Fixed page grid dimensions and validation
pub mod geometry;
/// Reshape and rotation of readout rows into page grids
pub mod reconstruct;

pub use geometry::PageGeometry;
