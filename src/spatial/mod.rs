//! Spatial data structures shared by the extrapolation strategies
//!
//! This module contains:
//! - The RGBA pixel grid and its pixel value type
//! - Bitmask state for solid pixels
//! - The distance-to-opaque field used by the fast strategy
//! - Bounds-checked 8-neighbor iteration

/// Separable distance-to-opaque transform
pub mod distance;
/// Pixel grid storage and coordinate addressing
pub mod grid;
/// Bit-packed per-cell state
pub mod mask;
/// 8-connected neighbor iteration
pub mod neighbors;
/// Pixel values and channel accumulation
pub mod pixel;

pub use grid::PixelGrid;
pub use pixel::Pixel;
