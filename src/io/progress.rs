//! Console progress for batches of files

use crate::algorithm::ExtrapolationReport;
use crate::io::configuration::{MIN_FILES_FOR_PROGRESS_BAR, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Per-file status lines plus a batch progress bar for larger batches
#[derive(Debug)]
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            batch_bar: None,
            file_count: 0,
        }
    }

    /// Prepare the display for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Single files only get the status line
        if file_count >= MIN_FILES_FOR_PROGRESS_BAR {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(bar);
        }
    }

    /// Number of files the display was initialized for
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Show which file is being worked on
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.batch_bar {
            bar.set_message(display_name(path));
        }
    }

    /// Record a file that was rewritten successfully
    pub fn complete_file(&self, path: &Path, report: &ExtrapolationReport, elapsed: Duration) {
        let mut line = format!(
            "Processing {} ... filled {} of {} transparent pixels ... OK ({:.2?})",
            path.display(),
            report.resolved,
            report.transparent,
            elapsed
        );
        if report.unresolved() > 0 {
            line.push_str(&format!(", {} left unreachable", report.unresolved()));
        }
        self.print_line(&line);
        self.advance();
    }

    /// Record a file that could not be read or decoded
    pub fn fail_file(&self, path: &Path) {
        self.print_line(&format!("File not processed: {}", path.display()));
        self.advance();
    }

    /// Record a file that was filled but could not be written back
    pub fn fail_write(&self, path: &Path) {
        self.print_line(&format!(
            "Processing {} ... Failed to write!",
            path.display()
        ));
        self.advance();
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All files processed");
        }
    }

    fn advance(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    // Status lines are the tool's user-facing output
    #[allow(clippy::print_stdout)]
    fn print_line(&self, line: &str) {
        match self.batch_bar {
            Some(ref bar) => bar.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
