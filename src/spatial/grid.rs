//! Fixed-size RGBA pixel grid with coordinate addressing
//!
//! Pixels are stored row-major. Coordinates outside the grid are a caller bug
//! and trip an assertion instead of being clamped or wrapped.

use crate::io::error::{BleedError, Result};
use crate::spatial::neighbors::Neighbors;
use crate::spatial::pixel::Pixel;

/// Rectangular RGBA image held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Create a grid filled with transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); len],
        }
    }

    /// Wrap a row-major pixel buffer
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the buffer length is not `width * height`
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if pixels.len() != width as usize * height as usize {
            return Err(BleedError::DimensionMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from packed `0xAABBGGRR` words
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the buffer length is not `width * height`
    pub fn from_packed(width: u32, height: u32, packed: &[u32]) -> Result<Self> {
        let pixels = packed.iter().copied().map(Pixel::from_packed).collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Pack every pixel into a `0xAABBGGRR` word, row-major
    pub fn to_packed(&self) -> Vec<u32> {
        self.pixels.iter().map(|pixel| pixel.to_packed()).collect()
    }

    /// Grid width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True for zero-width or zero-height grids
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Check whether a coordinate lies inside the grid
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Read the pixel at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        let index = self.index_of(x, y);
        self.pixels.get(index).copied().unwrap_or_default()
    }

    /// Overwrite the pixel at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
        let index = self.index_of(x, y);
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = pixel;
        }
    }

    /// Overwrite only the color channels at `(x, y)`, keeping alpha
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let index = self.index_of(x, y);
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = slot.with_rgb(rgb);
        }
    }

    /// In-bounds 8-connected neighbors of `(x, y)`
    pub const fn neighbors(&self, x: u32, y: u32) -> Neighbors {
        Neighbors::new(x, y, self.width, self.height)
    }

    /// Number of pixels whose alpha is zero
    pub fn count_transparent(&self) -> usize {
        self.pixels
            .iter()
            .filter(|pixel| pixel.is_transparent())
            .count()
    }

    /// Row-major view of every pixel
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        assert!(
            self.contains(x, y),
            "pixel ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}
