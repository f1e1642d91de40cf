//! Color extrapolation for fully transparent texture pixels
//!
//! Pixels with zero alpha often carry arbitrary RGB values that bleed into
//! visible edges once a texture is filtered, resized or mip-mapped. This crate
//! rewrites the color of every such pixel from its nearest solid neighbors,
//! leaving alpha and every visible pixel untouched.

#![forbid(unsafe_code)]

/// Extrapolation strategies and the work queue they share
pub mod algorithm;
/// Command line, PNG codec, progress output and error handling
pub mod io;
/// Pixel grid, masks, distance field and neighbor iteration
pub mod spatial;

pub use algorithm::{ExtrapolationReport, Strategy, extrapolate};
pub use io::error::{BleedError, Result};
pub use spatial::{Pixel, PixelGrid};
