//! Algorithm constants and runtime configuration defaults

/// Largest possible count of solid 8-connected neighbors
pub const MAX_NEIGHBOR_COUNT: u32 = 8;

/// Extension of files picked up when a directory is given
pub const PNG_EXTENSION: &str = "png";

// Encoded output goes to a uniquely named `<file>.<random>.<suffix>` first and is
// renamed over the input
/// Extension appended to the staging file used while saving
pub const STAGING_SUFFIX: &str = "tmp";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Progress bars are skipped for batches smaller than this
pub const MIN_FILES_FOR_PROGRESS_BAR: usize = 2;
