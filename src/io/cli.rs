//! Command-line interface for batch processing readout capture files

use crate::analysis::bits::expand_to_bits;
use crate::analysis::leakage::LeakageSeries;
use crate::io::configuration::{DEFAULT_OUTPUT_DIR, DEFAULT_PLOT_FILE, DEFAULT_REFERENCE_FILE};
use crate::io::error::{Result, io_error};
use crate::io::export::{write_bit_matrix, write_leakage_csv};
use crate::io::image::save_page_png;
use crate::io::plot::render_leakage_plot;
use crate::io::progress::ProgressManager;
use crate::io::readout::ReadoutCapture;
use crate::io::reference::ReferencePage;
use crate::page::geometry::PageGeometry;
use crate::page::reconstruct::{Rotation, reconstruct_page};
use crate::sweep::voltage::OffsetSweep;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nandleak")]
#[command(
    author,
    version,
    about = "Analyze data leakage across a read-offset voltage sweep"
)]
/// Command-line arguments for the sweep analysis tool
pub struct Cli {
    /// Readout capture file or directory of capture files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Reference page file (flattened decimal byte stream)
    #[arg(short, long, default_value = DEFAULT_REFERENCE_FILE)]
    pub reference: PathBuf,

    /// Directory for recovered page images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Leakage chart output path
    #[arg(short, long, default_value = DEFAULT_PLOT_FILE)]
    pub plot: PathBuf,

    /// Quarter turns applied to recovered page images
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(..=3))]
    pub rotate: u8,

    /// Export the per-step leakage series as CSV
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Dump the realigned capture as a bit-level 0/1 matrix
    #[arg(long, value_name = "PATH")]
    pub bit_dump: Option<PathBuf>,

    /// Skip per-step page images
    #[arg(long)]
    pub no_pages: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if per-step page images should be written
    pub const fn should_write_pages(&self) -> bool {
        !self.no_pages
    }
}

/// Orchestrates the analysis pipeline over one or more capture files
pub struct SweepProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SweepProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process capture files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, reference loading or capture
    /// processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let geometry = PageGeometry::standard();
        let reference = ReferencePage::from_file(&self.cli.reference, geometry)?;
        let sweep = OffsetSweep::standard();
        let rotation = Rotation::from_quarter_turns(self.cli.rotate)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let batch = files.len() > 1;
        for file in &files {
            self.process_capture(file, &reference, geometry, sweep, rotation, batch)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("txt") {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(io_error("Target file must be a .txt readout capture"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("txt") {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error(
                "Target must be a readout capture file or directory",
            ))
        }
    }

    // In batch mode each capture gets its own subdirectory so outputs with
    // fixed filenames cannot collide across captures
    fn output_paths(&self, input_path: &Path, batch: bool) -> (PathBuf, PathBuf) {
        if batch {
            let stem = input_path.file_stem().unwrap_or_default();
            let pages_dir = self.cli.output_dir.join(stem);
            let plot_name = self
                .cli
                .plot
                .file_name()
                .map_or_else(|| PathBuf::from(DEFAULT_PLOT_FILE), PathBuf::from);
            let plot_path = pages_dir.join(plot_name);
            (pages_dir, plot_path)
        } else {
            (self.cli.output_dir.clone(), self.cli.plot.clone())
        }
    }

    fn side_output_path(pages_dir: &Path, configured: &Path, batch: bool) -> PathBuf {
        if batch {
            pages_dir.join(configured.file_name().unwrap_or_default())
        } else {
            configured.to_path_buf()
        }
    }

    fn process_capture(
        &self,
        input_path: &Path,
        reference: &ReferencePage,
        geometry: PageGeometry,
        sweep: OffsetSweep,
        rotation: Rotation,
        batch: bool,
    ) -> Result<()> {
        let (pages_dir, plot_path) = self.output_paths(input_path, batch);

        let mut capture = ReadoutCapture::from_file(input_path)?;
        sweep.check_alignment(capture.row_count())?;
        geometry.check_row_length(capture.column_count())?;
        capture.align_half()?;

        let series = LeakageSeries::compute(reference.pixels(), capture.values())?;

        if let Some(ref pm) = self.progress_manager {
            pm.start_capture(input_path, sweep.len());
        }

        if self.cli.should_write_pages() {
            for (step, row) in sweep.steps().zip(capture.values().rows()) {
                let page = reconstruct_page(row, geometry, rotation)?;
                save_page_png(page.view(), &pages_dir.join(step.page_filename()))?;

                if let Some(ref pm) = self.progress_manager {
                    pm.update_step(step.index + 1);
                }
            }
        }

        render_leakage_plot(&sweep, &series, &plot_path)?;

        if let Some(ref csv_path) = self.cli.csv {
            let resolved = Self::side_output_path(&pages_dir, csv_path, batch);
            write_leakage_csv(&sweep, &series, &resolved)?;
        }

        if let Some(ref bit_path) = self.cli.bit_dump {
            let bits = expand_to_bits(capture.values());
            let resolved = Self::side_output_path(&pages_dir, bit_path, batch);
            write_bit_matrix(bits.view(), &resolved)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_capture();
        }

        Ok(())
    }
}
