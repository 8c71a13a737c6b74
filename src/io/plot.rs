//! Leakage-vs-voltage chart rendering

use crate::analysis::leakage::LeakageSeries;
use crate::io::configuration::{PLOT_HEIGHT_PX, PLOT_MARKER_RADIUS, PLOT_WIDTH_PX};
use crate::io::error::{AnalysisError, Result};
use crate::sweep::voltage::OffsetSweep;
use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::element::Circle;
use plotters::style::{BLACK, BLUE, Color, WHITE};
use std::path::Path;

/// Render the recovered-data match curve across the sweep
///
/// Offset voltage in volts on the x axis, `100 - leakage%` on the y axis,
/// drawn as small filled markers over a light grid.
///
/// # Errors
///
/// Returns an error if:
/// - The sweep and series lengths disagree
/// - The parent directory cannot be created
/// - The chart cannot be rendered or written
pub fn render_leakage_plot(
    sweep: &OffsetSweep,
    series: &LeakageSeries,
    output_path: &Path,
) -> Result<()> {
    if sweep.len() != series.len() {
        return Err(AnalysisError::SweepMismatch {
            steps: sweep.len(),
            rows: series.len(),
        });
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

    draw_chart(sweep, series, output_path).map_err(|e| AnalysisError::PlotRender {
        path: output_path.to_path_buf(),
        reason: e.to_string(),
    })
}

// The plotters error types borrow the backend, so rendering is isolated
// behind a boxed error and converted at the boundary above
fn draw_chart(
    sweep: &OffsetSweep,
    series: &LeakageSeries,
    output_path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root =
        BitMapBackend::new(output_path, (PLOT_WIDTH_PX, PLOT_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = x_bounds(sweep);

    let mut chart = ChartBuilder::on(&root)
        .margin(40)
        .x_label_area_size(160)
        .y_label_area_size(220)
        .build_cartesian_2d(x_min..x_max, 0.0f64..100.0f64)?;

    chart
        .configure_mesh()
        .x_desc("Offset voltage (V)")
        .y_desc("Recovered data match (%)")
        .axis_desc_style(("sans-serif", 56))
        .label_style(("sans-serif", 44))
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&BLACK.mix(0.08))
        .draw()?;

    let points = sweep
        .steps()
        .zip(series.match_percentages())
        .map(|(step, pct)| (step.volts(), pct));
    chart.draw_series(points.map(|(x, y)| Circle::new((x, y), PLOT_MARKER_RADIUS, BLUE.filled())))?;

    root.present()?;
    Ok(())
}

// Pads a degenerate single-step range so the axis keeps a nonzero width
fn x_bounds(sweep: &OffsetSweep) -> (f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for step in sweep.steps() {
        x_min = x_min.min(step.volts());
        x_max = x_max.max(step.volts());
    }

    if (x_max - x_min).abs() < f64::EPSILON {
        (x_min - 0.5, x_max + 0.5)
    } else {
        (x_min, x_max)
    }
}
