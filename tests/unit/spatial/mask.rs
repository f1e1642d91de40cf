//! Tests for bit-packed cell masks

#[cfg(test)]
mod tests {
    use edgebleed::spatial::mask::CellMask;
    use edgebleed::spatial::{Pixel, PixelGrid};

    // Tests a new mask starts empty
    // Verified by initializing storage with ones
    #[test]
    fn test_new_mask_is_empty() {
        let mask = CellMask::try_new(4, 3).unwrap();
        assert_eq!(mask.count(), 0);
        assert_eq!(mask.dimensions(), (4, 3));
        assert!(!mask.contains(3, 2));
    }

    // Tests insert and remove toggle a single cell
    #[test]
    fn test_insert_and_remove() {
        let mut mask = CellMask::try_new(4, 3).unwrap();
        mask.insert(1, 2);
        assert!(mask.contains(1, 2));
        assert!(!mask.contains(2, 1));
        assert_eq!(mask.count(), 1);

        mask.remove(1, 2);
        assert!(!mask.contains(1, 2));
        assert_eq!(mask.count(), 0);
    }

    // Tests addressing past the first storage word
    // Verified by truncating the mask to a single word
    #[test]
    fn test_cells_beyond_first_word() {
        let mut mask = CellMask::try_new(13, 11).unwrap();
        mask.insert(12, 10);
        mask.insert(0, 10);
        assert!(mask.contains(12, 10));
        assert!(mask.contains(0, 10));
        assert_eq!(mask.count(), 2);
    }

    // Tests any non-zero alpha counts as solid
    // Verified by requiring full opacity
    #[test]
    fn test_from_opaque_uses_any_alpha() {
        let mut grid = PixelGrid::new(3, 1);
        grid.set(0, 0, Pixel::new(0, 0, 0, 1));
        grid.set(2, 0, Pixel::new(0, 0, 0, 255));

        let mask = CellMask::from_opaque(&grid).unwrap();
        assert!(mask.contains(0, 0));
        assert!(!mask.contains(1, 0));
        assert!(mask.contains(2, 0));
    }

    // Tests counting of set 8-connected neighbors
    // Verified by including the centre cell in the count
    #[test]
    fn test_count_neighbors() {
        let mut mask = CellMask::try_new(3, 3).unwrap();
        mask.insert(0, 0);
        mask.insert(2, 2);
        mask.insert(1, 1);

        assert_eq!(mask.count_neighbors(1, 1), 2);
        assert_eq!(mask.count_neighbors(1, 0), 2);
        assert_eq!(mask.count_neighbors(0, 2), 1);
    }

    // Tests degenerate masks
    #[test]
    fn test_zero_sized_mask() {
        let mask = CellMask::try_new(0, 0).unwrap();
        assert_eq!(mask.count(), 0);
    }

    // Tests out-of-bounds access is fatal
    #[test]
    #[should_panic(expected = "outside the 2x2 mask")]
    fn test_out_of_bounds_panics() {
        let mask = CellMask::try_new(2, 2).unwrap();
        let _ = mask.contains(2, 0);
    }
}
