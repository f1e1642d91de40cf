//! Error types for extrapolation and file handling

use std::collections::TryReserveError;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug, thiserror::Error)]
pub enum BleedError {
    /// Failed to decode an image from the filesystem
    #[error("Failed to load image '{}': {source}", .path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// The decoded image does not use 8-bit channels
    #[error("Unsupported pixel format {color} in '{}': only 8-bit channels are supported", .path.display())]
    UnsupportedFormat {
        /// Path to the image file
        path: PathBuf,
        /// Name of the decoded color type
        color: String,
    },

    /// Failed to encode an image back to disk
    #[error("Failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A pixel buffer does not match the stated dimensions
    #[error("Pixel buffer of {actual} entries does not match a {width}x{height} grid")]
    DimensionMismatch {
        /// Stated width
        width: u32,
        /// Stated height
        height: u32,
        /// Number of entries actually supplied
        actual: usize,
    },

    /// Working memory for an image could not be reserved
    #[error("Failed to allocate {elements} elements for {what}: {source}")]
    Allocation {
        /// Which buffer was being allocated
        what: &'static str,
        /// Requested element count
        elements: usize,
        /// Underlying reservation error
        source: TryReserveError,
    },
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, BleedError>;

/// Create an empty vector with room for exactly `elements` items
///
/// All per-image working buffers go through here so that running out of memory
/// surfaces as an error before any pixel has been written.
///
/// # Errors
///
/// Returns `Allocation` if the reservation fails
pub fn try_vec<T>(elements: usize, what: &'static str) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(elements)
        .map_err(|source| BleedError::Allocation {
            what,
            elements,
            source,
        })?;
    Ok(buffer)
}

/// Create a file system error for `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> BleedError {
    BleedError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
