//! Single-pass propagation ordered by a precomputed distance field
//!
//! The distance transform stands in for the round structure of the accurate
//! strategy: pixels are visited once, nearest to opaque first, and each one
//! becomes a source for the pixels after it as soon as it resolves.

use log::debug;

use crate::algorithm::ExtrapolationReport;
use crate::algorithm::queue::{BucketQueue, WorkItem};
use crate::io::error::{Result, try_vec};
use crate::spatial::distance::{DistanceField, UNREACHED};
use crate::spatial::grid::PixelGrid;
use crate::spatial::pixel::ColorSum;

/// Fill every reachable transparent pixel in one distance-ordered pass
///
/// Alpha and all non-transparent pixels are left untouched. A pixel whose
/// neighbors are all still unresolved when it is visited keeps its color and
/// is never used as a source.
///
/// # Errors
///
/// Returns `Allocation` if the working state cannot be allocated. The grid is
/// not modified in that case.
pub fn extrapolate_fast(grid: &mut PixelGrid) -> Result<ExtrapolationReport> {
    let transparent = grid.count_transparent();
    if transparent == 0 || transparent == grid.len() {
        return Ok(ExtrapolationReport::untouched(transparent));
    }

    let mut field = DistanceField::from_alpha(grid)?;
    let Some(max_distance) = field.max_pending() else {
        return Ok(ExtrapolationReport::untouched(transparent));
    };

    let (width, height) = grid.dimensions();
    let mut pending: Vec<WorkItem> = try_vec(field.count_pending(), "pending pixels")?;
    for y in 0..height {
        for x in 0..width {
            let distance = field.get(x, y);
            if distance != 0 && distance != UNREACHED {
                pending.push(WorkItem::new(x, y, distance));
            }
        }
    }

    let mut queue = BucketQueue::try_with_capacity(pending.len(), max_distance)?;
    queue.refill(&mut pending);

    let mut resolved = 0;
    for item in queue.iter_ascending() {
        let mut sum = ColorSum::default();
        for (nx, ny) in grid.neighbors(item.x, item.y) {
            if field.is_resolved(nx, ny) {
                sum.add(grid.get(nx, ny));
            }
        }

        if let Some(rgb) = sum.mean() {
            grid.set_rgb(item.x, item.y, rgb);
            field.resolve(item.x, item.y);
            resolved += 1;
        }
    }

    debug!(
        "distance-ordered pass resolved {resolved}/{transparent} pixels, farthest at {max_distance}"
    );

    Ok(ExtrapolationReport {
        transparent,
        resolved,
        rounds: 1,
    })
}
