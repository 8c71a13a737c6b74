//! Grayscale PNG export for recovered pages

use crate::io::error::{AnalysisError, Result};
use image::{GrayImage, ImageBuffer, Luma};
use ndarray::ArrayView2;
use std::path::Path;

/// Save a reconstructed page as an 8-bit grayscale PNG
///
/// Grid rows map to image rows, so the saved image is `cols` wide and `rows`
/// tall. Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_page_png(page: ArrayView2<'_, u8>, output_path: &Path) -> Result<()> {
    let (rows, cols) = page.dim();
    let mut img: GrayImage = ImageBuffer::new(cols as u32, rows as u32);

    for ((row, col), &value) in page.indexed_iter() {
        img.put_pixel(col as u32, row as u32, Luma([value]));
    }

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| AnalysisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| AnalysisError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
