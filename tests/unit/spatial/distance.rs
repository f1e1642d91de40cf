//! Tests for the separable distance-to-opaque transform

#[cfg(test)]
mod tests {
    use edgebleed::spatial::distance::{DistanceField, UNREACHED};
    use edgebleed::spatial::{Pixel, PixelGrid};

    const OPAQUE: Pixel = Pixel::new(0, 0, 0, 255);

    fn row_distances(field: &DistanceField) -> Vec<u32> {
        let (width, _) = field.dimensions();
        (0..width).map(|x| field.get(x, 0)).collect()
    }

    // Tests both horizontal sweeps contribute
    // Verified by skipping the right-to-left sweep
    #[test]
    fn test_row_distances() {
        let mut grid = PixelGrid::new(6, 1);
        grid.set(1, 0, OPAQUE);
        grid.set(5, 0, OPAQUE);

        let field = DistanceField::from_alpha(&grid).unwrap();
        assert_eq!(row_distances(&field), vec![1, 0, 1, 2, 1, 0]);
    }

    // Tests the first column is relaxed by the backward sweep
    #[test]
    fn test_leading_cell_reached_from_right() {
        let mut grid = PixelGrid::new(3, 1);
        grid.set(1, 0, OPAQUE);

        let field = DistanceField::from_alpha(&grid).unwrap();
        assert_eq!(row_distances(&field), vec![1, 0, 1]);
    }

    // Tests vertical propagation adds row offsets to horizontal distances
    // Verified by skipping the column sweeps
    #[test]
    fn test_corner_source_spreads_by_row_and_column() {
        let mut grid = PixelGrid::new(3, 3);
        grid.set(0, 0, OPAQUE);

        let field = DistanceField::from_alpha(&grid).unwrap();
        assert_eq!(field.get(2, 0), 2);
        assert_eq!(field.get(0, 2), 2);
        assert_eq!(field.get(1, 1), 2);
        assert_eq!(field.get(2, 2), 4);
        assert_eq!(field.max_pending(), Some(4));
        assert_eq!(field.count_pending(), 8);
    }

    // Tests an image without opaque pixels stays unreached
    #[test]
    fn test_fully_transparent_is_unreached() {
        let grid = PixelGrid::new(4, 2);
        let field = DistanceField::from_alpha(&grid).unwrap();

        assert_eq!(field.get(3, 1), UNREACHED);
        assert_eq!(field.max_pending(), None);
        assert_eq!(field.count_pending(), 0);
    }

    // Tests an opaque image has nothing pending
    #[test]
    fn test_fully_opaque_has_nothing_pending() {
        let grid = PixelGrid::from_pixels(2, 2, vec![OPAQUE; 4]).unwrap();
        let field = DistanceField::from_alpha(&grid).unwrap();

        assert!(field.is_resolved(1, 1));
        assert_eq!(field.max_pending(), None);
    }

    // Tests resolving a cell drives its distance to zero
    #[test]
    fn test_resolve() {
        let mut grid = PixelGrid::new(2, 1);
        grid.set(0, 0, OPAQUE);

        let mut field = DistanceField::from_alpha(&grid).unwrap();
        assert!(!field.is_resolved(1, 0));
        field.resolve(1, 0);
        assert!(field.is_resolved(1, 0));
        assert_eq!(field.count_pending(), 0);
    }
}
