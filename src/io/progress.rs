//! Sweep progress reporting

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Captures: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch sweep analysis
///
/// One bar tracks sweep steps within the capture being processed; a second
/// batch bar appears above it when more than one capture file is queued.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    step_bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        let multi_progress = MultiProgress::new();
        let step_bar = multi_progress.add(ProgressBar::new(0));
        step_bar.set_style(STEP_STYLE.clone());

        Self {
            multi_progress,
            batch_bar: None,
            step_bar,
        }
    }

    /// Add the batch bar when more than one capture is queued
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.insert(0, batch_bar));
        }
    }

    /// Configure the step bar for a new capture
    pub fn start_capture(&self, path: &Path, steps: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.step_bar.reset();
        self.step_bar.set_length(steps as u64);
        self.step_bar.set_message(display_name);
    }

    /// Report the number of sweep steps completed for the current capture
    pub fn update_step(&self, completed: usize) {
        self.step_bar.set_position(completed as u64);
    }

    /// Mark the current capture as completed
    pub fn complete_capture(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All captures processed");
        }
        self.step_bar.finish();
        let _ = self.multi_progress.clear();
    }
}
