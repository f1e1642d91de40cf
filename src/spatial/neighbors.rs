//! Bounds-checked 8-connected neighborhood iteration

use std::iter::FusedIterator;

/// Offsets of the eight surrounding cells, visited row by row
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterator over the in-bounds neighbors of a cell
///
/// Cloning yields an independent iterator starting from the same point, so a
/// fresh clone replays the neighborhood from the beginning.
#[derive(Debug, Clone)]
pub struct Neighbors {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    next_offset: usize,
}

impl Neighbors {
    /// Neighbors of `(x, y)` inside a `width` x `height` grid
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            next_offset: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy)) = NEIGHBOR_OFFSETS.get(self.next_offset) {
            self.next_offset += 1;

            let nx = i64::from(self.x) + dx;
            let ny = i64::from(self.y) + dy;

            if nx >= 0 && ny >= 0 && nx < i64::from(self.width) && ny < i64::from(self.height) {
                return Some((nx as u32, ny as u32));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(NEIGHBOR_OFFSETS.len().saturating_sub(self.next_offset)))
    }
}

impl FusedIterator for Neighbors {}
