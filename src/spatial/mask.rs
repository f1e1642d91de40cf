//! Per-cell boolean state backed by a bit vector
//!
//! Used to track which pixels are solid, meaning their color is final and may
//! be sampled: originally non-transparent, or already resolved.

use bitvec::prelude::*;

use crate::io::error::{Result, try_vec};
use crate::spatial::grid::PixelGrid;
use crate::spatial::neighbors::Neighbors;

/// A `width` x `height` bitmask with row-major addressing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    width: u32,
    height: u32,
    bits: BitVec,
}

impl CellMask {
    /// Allocate a mask with every cell cleared
    ///
    /// # Errors
    ///
    /// Returns `Allocation` if the backing storage cannot be reserved
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let cells = width as usize * height as usize;
        let words = cells.div_ceil(usize::BITS as usize);

        let mut storage = try_vec::<usize>(words, "cell mask")?;
        storage.resize(words, 0);

        let mut bits = BitVec::from_vec(storage);
        bits.truncate(cells);

        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Mask with every pixel of non-zero alpha set
    ///
    /// # Errors
    ///
    /// Returns `Allocation` if the backing storage cannot be reserved
    pub fn from_opaque(grid: &PixelGrid) -> Result<Self> {
        let mut mask = Self::try_new(grid.width(), grid.height())?;

        for (index, pixel) in grid.pixels().iter().enumerate() {
            if !pixel.is_transparent() {
                mask.bits.set(index, true);
            }
        }

        Ok(mask)
    }

    /// Test whether `(x, y)` is set
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the mask
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let index = self.index_of(x, y);
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Set `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the mask
    pub fn insert(&mut self, x: u32, y: u32) {
        let index = self.index_of(x, y);
        self.bits.set(index, true);
    }

    /// Clear `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the mask
    pub fn remove(&mut self, x: u32, y: u32) {
        let index = self.index_of(x, y);
        self.bits.set(index, false);
    }

    /// Number of set cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of set cells among the 8-connected neighbors of `(x, y)`
    pub fn count_neighbors(&self, x: u32, y: u32) -> u32 {
        Neighbors::new(x, y, self.width, self.height)
            .filter(|&(nx, ny)| self.contains(nx, ny))
            .count() as u32
    }

    /// `(width, height)`
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside the {}x{} mask",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}
