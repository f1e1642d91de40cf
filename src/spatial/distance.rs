//! Separable distance-to-opaque transform
//!
//! Each transparent cell ends up holding the smallest horizontal distance to an
//! opaque cell in some row plus the vertical distance to that row. Opaque cells
//! hold zero. Values are approximate, which is enough to order the fast
//! extrapolation pass.

use ndarray::Array2;

use crate::io::error::{BleedError, Result, try_vec};
use crate::spatial::grid::PixelGrid;

/// Distance of a cell that no opaque pixel can reach
pub const UNREACHED: u32 = u32::MAX;

/// Per-pixel approximate distance to the nearest originally opaque pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    /// Distances indexed `[y, x]`
    values: Array2<u32>,
}

impl DistanceField {
    /// Compute the field for the alpha channel of `grid`
    ///
    /// # Errors
    ///
    /// Returns `Allocation` if the field cannot be allocated
    pub fn from_alpha(grid: &PixelGrid) -> Result<Self> {
        let (width, height) = grid.dimensions();

        let mut seeds = try_vec::<u32>(grid.len(), "distance field")?;
        seeds.extend(grid.pixels().iter().map(|pixel| {
            if pixel.is_transparent() {
                UNREACHED
            } else {
                0
            }
        }));

        let values = Array2::from_shape_vec((height as usize, width as usize), seeds).map_err(
            |_shape_error| BleedError::DimensionMismatch {
                width,
                height,
                actual: grid.len(),
            },
        )?;

        let mut field = Self { values };
        field.sweep_rows();
        field.sweep_columns();
        Ok(field)
    }

    /// Distance stored at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the field
    pub fn get(&self, x: u32, y: u32) -> u32 {
        let (width, height) = self.dimensions();
        assert!(
            x < width && y < height,
            "cell ({x}, {y}) is outside the {width}x{height} distance field"
        );
        self.values
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(UNREACHED)
    }

    /// True when `(x, y)` is opaque or has been resolved
    pub fn is_resolved(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == 0
    }

    /// Drive the distance at `(x, y)` to zero
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the field
    pub fn resolve(&mut self, x: u32, y: u32) {
        let (width, height) = self.dimensions();
        assert!(
            x < width && y < height,
            "cell ({x}, {y}) is outside the {width}x{height} distance field"
        );
        if let Some(value) = self.values.get_mut([y as usize, x as usize]) {
            *value = 0;
        }
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        let (rows, cols) = self.values.dim();
        (cols as u32, rows as u32)
    }

    /// Largest finite, non-zero distance, if any cell is pending
    pub fn max_pending(&self) -> Option<u32> {
        self.values
            .iter()
            .copied()
            .filter(|&distance| distance != 0 && distance != UNREACHED)
            .max()
    }

    /// Number of cells with a finite, non-zero distance
    pub fn count_pending(&self) -> usize {
        self.values
            .iter()
            .filter(|&&distance| distance != 0 && distance != UNREACHED)
            .count()
    }

    fn sweep_rows(&mut self) {
        for mut row in self.values.rows_mut() {
            relax_lane(row.iter_mut());
            relax_lane(row.iter_mut().rev());
        }
    }

    fn sweep_columns(&mut self) {
        for mut column in self.values.columns_mut() {
            relax_lane(column.iter_mut());
            relax_lane(column.iter_mut().rev());
        }
    }
}

// One directional pass: every cell becomes min(itself, predecessor + 1)
fn relax_lane<'a>(lane: impl Iterator<Item = &'a mut u32>) {
    let mut carried = UNREACHED;
    for value in lane {
        carried = (*value).min(carried.saturating_add(1));
        *value = carried;
    }
}
