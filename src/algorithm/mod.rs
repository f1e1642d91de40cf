//! Color extrapolation into fully transparent pixels
//!
//! Two interchangeable strategies share the same contract: every pixel with
//! zero alpha that is connected to a non-transparent pixel receives an averaged
//! color from its solid neighbors, while alpha and non-transparent pixels stay
//! byte-for-byte unchanged.

/// Exact round-based propagation
pub mod accurate;
/// Distance-ordered single-pass propagation
pub mod fast;
/// Bucketed priority queue for pending pixels
pub mod queue;

use crate::io::error::Result;
use crate::spatial::grid::PixelGrid;

pub use accurate::extrapolate_accurate;
pub use fast::extrapolate_fast;

/// Which propagation order to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Round-based propagation prioritized by solid-neighbor count
    #[default]
    Accurate,
    /// One pass ordered by approximate distance to the nearest opaque pixel
    Fast,
}

/// Counts describing what an extrapolation call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtrapolationReport {
    /// Pixels with zero alpha in the input
    pub transparent: usize,
    /// Transparent pixels that received a new color
    pub resolved: usize,
    /// Propagation rounds performed
    pub rounds: usize,
}

impl ExtrapolationReport {
    /// Report for a call that had nothing to do
    pub const fn untouched(transparent: usize) -> Self {
        Self {
            transparent,
            resolved: 0,
            rounds: 0,
        }
    }

    /// Transparent pixels left with their original color
    pub const fn unresolved(&self) -> usize {
        self.transparent.saturating_sub(self.resolved)
    }
}

/// Fill transparent pixels of `grid` in place using `strategy`
///
/// # Errors
///
/// Returns `Allocation` if working state for the grid cannot be allocated; the
/// grid is left unmodified.
pub fn extrapolate(grid: &mut PixelGrid, strategy: Strategy) -> Result<ExtrapolationReport> {
    match strategy {
        Strategy::Accurate => extrapolate_accurate(grid),
        Strategy::Fast => extrapolate_fast(grid),
    }
}
