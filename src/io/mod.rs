//! Everything outside the in-memory algorithms: command line, PNG codec,
//! console progress, constants and the error type

/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types and fallible allocation helpers
pub mod error;
/// PNG decoding and encoding
pub mod image;
/// Console progress display
pub mod progress;
