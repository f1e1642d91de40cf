//! Multi-round nearest-neighbor propagation ordered by solid-neighbor count
//!
//! Each round takes the current frontier of transparent pixels touching solid
//! ones. Pixels with more solid neighbors resolve first, each to the mean of
//! whatever neighbors are solid at the moment it is visited, so pixels resolved
//! earlier in the round already feed later ones. Unresolved neighbors seen
//! during the round form the next frontier, re-prioritized once the round ends.

use log::debug;

use crate::algorithm::ExtrapolationReport;
use crate::algorithm::queue::{BucketQueue, WorkItem};
use crate::io::configuration::MAX_NEIGHBOR_COUNT;
use crate::io::error::{Result, try_vec};
use crate::spatial::grid::PixelGrid;
use crate::spatial::mask::CellMask;
use crate::spatial::pixel::ColorSum;

/// Fill every reachable transparent pixel using round-by-round propagation
///
/// Alpha and all non-transparent pixels are left untouched. Transparent regions
/// with no path to a non-transparent pixel keep their original colors.
///
/// # Errors
///
/// Returns `Allocation` if the working state cannot be allocated. The grid is
/// not modified in that case.
pub fn extrapolate_accurate(grid: &mut PixelGrid) -> Result<ExtrapolationReport> {
    let transparent = grid.count_transparent();
    if transparent == 0 || transparent == grid.len() {
        return Ok(ExtrapolationReport::untouched(transparent));
    }

    let (width, height) = grid.dimensions();

    let mut solid = CellMask::from_opaque(grid)?;
    let mut deferred_mask = CellMask::try_new(width, height)?;
    let mut deferred: Vec<WorkItem> = try_vec(transparent, "deferred pixels")?;
    let mut queue = BucketQueue::try_with_capacity(transparent, MAX_NEIGHBOR_COUNT)?;

    for y in 0..height {
        for x in 0..width {
            if solid.contains(x, y) {
                continue;
            }

            let solid_neighbors = solid.count_neighbors(x, y);
            if solid_neighbors > 0 {
                deferred.push(WorkItem::new(x, y, solid_neighbors));
            }
        }
    }
    queue.refill(&mut deferred);

    let mut resolved = 0;
    let mut rounds = 0;

    while !queue.is_empty() {
        rounds += 1;
        let frontier = queue.len();

        while let Some(item) = queue.pop_highest() {
            if solid.contains(item.x, item.y) {
                continue;
            }

            let mut sum = ColorSum::default();
            for (nx, ny) in grid.neighbors(item.x, item.y) {
                if solid.contains(nx, ny) {
                    sum.add(grid.get(nx, ny));
                } else if !deferred_mask.contains(nx, ny) {
                    deferred_mask.insert(nx, ny);
                    deferred.push(WorkItem::new(nx, ny, 0));
                }
            }

            if let Some(rgb) = sum.mean() {
                grid.set_rgb(item.x, item.y, rgb);
                solid.insert(item.x, item.y);
                resolved += 1;
            }
        }

        for item in &mut deferred {
            deferred_mask.remove(item.x, item.y);
            item.priority = solid.count_neighbors(item.x, item.y);
        }
        deferred.retain(|item| !solid.contains(item.x, item.y));

        debug!(
            "round {rounds}: frontier of {frontier}, {} deferred, {resolved}/{transparent} resolved",
            deferred.len()
        );

        queue.refill(&mut deferred);
    }

    Ok(ExtrapolationReport {
        transparent,
        resolved,
        rounds,
    })
}
