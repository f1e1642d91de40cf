//! Command-line interface for rewriting PNG files in place

use crate::algorithm::{ExtrapolationReport, Strategy, extrapolate};
use crate::io::configuration::PNG_EXTENSION;
use crate::io::error::{BleedError, Result, file_system_error};
use crate::io::image::{load_png, save_png};
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "edgebleed")]
#[command(
    author,
    version,
    about = "Fill the color of fully transparent pixels from their visible neighbors",
    after_help = "Warning: modifies files in place!"
)]
/// Command-line arguments for the extrapolation tool
pub struct Cli {
    /// PNG files to rewrite, or directories whose PNG files should be rewritten
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Use the single-pass distance-ordered strategy instead of the exact one
    #[arg(short, long)]
    pub fast: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Strategy selected by the flags
    pub const fn strategy(&self) -> Strategy {
        if self.fast {
            Strategy::Fast
        } else {
            Strategy::Accurate
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Outcome counts for one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Files rewritten successfully
    pub processed: usize,
    /// Files that could not be found, read or decoded
    pub skipped: usize,
    /// Files that were decoded but could not be written back
    pub failed: usize,
}

impl BatchSummary {
    /// Count one file outcome
    pub fn record(&mut self, outcome: &std::result::Result<ExtrapolationReport, FileFailure>) {
        match outcome {
            Ok(_) => self.processed += 1,
            Err(FileFailure::Skipped(_)) => self.skipped += 1,
            Err(FileFailure::NotWritten(_)) => self.failed += 1,
        }
    }
}

/// Why a single file was not rewritten
#[derive(Debug)]
pub enum FileFailure {
    /// The file could not be read, decoded or filled; it was left as is
    Skipped(BleedError),
    /// The file was filled but writing it back failed
    NotWritten(BleedError),
}

impl FileFailure {
    /// Underlying error
    pub const fn error(&self) -> &BleedError {
        match self {
            Self::Skipped(error) | Self::NotWritten(error) => error,
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process every file named on the command line
    ///
    /// A file that fails is reported and skipped; the remaining files are
    /// still processed.
    pub fn process(&mut self) -> BatchSummary {
        let mut summary = BatchSummary::default();
        let files = self.collect_files(&mut summary);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            let start_time = Instant::now();
            let outcome = self.process_file(file);
            summary.record(&outcome);

            match outcome {
                Ok(report) => {
                    if let Some(ref pm) = self.progress_manager {
                        pm.complete_file(file, &report, start_time.elapsed());
                    }
                }
                Err(failure) => self.report_failure(file, &failure),
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        debug!(
            "{} processed, {} skipped, {} failed",
            summary.processed, summary.skipped, summary.failed
        );

        summary
    }

    /// Decode, extrapolate and rewrite a single file
    fn process_file(&self, path: &Path) -> std::result::Result<ExtrapolationReport, FileFailure> {
        let mut grid = load_png(path).map_err(FileFailure::Skipped)?;
        let report = extrapolate(&mut grid, self.cli.strategy()).map_err(FileFailure::Skipped)?;
        save_png(&grid, path).map_err(FileFailure::NotWritten)?;
        Ok(report)
    }

    fn report_failure(&self, path: &Path, failure: &FileFailure) {
        warn!("{}", failure.error());
        match (failure, &self.progress_manager) {
            (FileFailure::Skipped(_), Some(pm)) => pm.fail_file(path),
            (FileFailure::NotWritten(_), Some(pm)) => pm.fail_write(path),
            (_, None) => {}
        }
    }

    fn collect_files(&self, summary: &mut BatchSummary) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for target in &self.cli.files {
            if target.is_dir() {
                match png_files_in(target) {
                    Ok(found) => files.extend(found),
                    Err(error) => {
                        summary.skipped += 1;
                        warn!("{error}");
                    }
                }
            } else {
                // Missing files surface as read failures with the open error
                files.push(target.clone());
            }
        }

        files
    }
}

/// List the PNG files directly inside `directory`, sorted by path
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be read
pub fn png_files_in(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory)
        .map_err(|source| file_system_error(directory, "read directory", source))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| file_system_error(directory, "read directory", source))?
            .path();
        let is_png = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PNG_EXTENSION));
        if path.is_file() && is_png {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
