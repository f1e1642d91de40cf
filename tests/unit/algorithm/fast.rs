//! Tests for distance-ordered single-pass extrapolation

#[cfg(test)]
mod tests {
    use edgebleed::algorithm::extrapolate_fast;
    use edgebleed::spatial::{Pixel, PixelGrid};

    const RED: Pixel = Pixel::new(255, 0, 0, 255);
    const BLUE: Pixel = Pixel::new(0, 0, 255, 255);
    const GARBAGE: Pixel = Pixel::new(13, 77, 201, 0);

    fn row(pixels: &[Pixel]) -> PixelGrid {
        PixelGrid::from_pixels(pixels.len() as u32, 1, pixels.to_vec()).unwrap()
    }

    // Tests a pixel between two colors gets their truncated mean
    #[test]
    fn test_between_red_and_blue() {
        let mut grid = row(&[RED, GARBAGE, BLUE]);
        let report = extrapolate_fast(&mut grid).unwrap();

        assert_eq!(grid.get(1, 0), Pixel::new(127, 0, 127, 0));
        assert_eq!(report.rounds, 1);
    }

    // Tests equal distances resolve in row-major order, each feeding the next
    // Verified by leaving resolved pixels at their original distance
    #[test]
    fn test_equal_distances_resolve_in_scan_order() {
        let mut grid = row(&[RED, GARBAGE, GARBAGE, BLUE]);
        let report = extrapolate_fast(&mut grid).unwrap();

        assert_eq!(grid.get(1, 0), Pixel::new(255, 0, 0, 0));
        assert_eq!(grid.get(2, 0), Pixel::new(127, 0, 127, 0));
        assert_eq!(report.resolved, 2);
    }

    // Tests far pixels are filled in a single pass
    #[test]
    fn test_chain_in_one_pass() {
        let mut grid = row(&[GARBAGE, GARBAGE, GARBAGE, BLUE]);
        let report = extrapolate_fast(&mut grid).unwrap();

        for x in 0..3 {
            assert_eq!(grid.get(x, 0), Pixel::new(0, 0, 255, 0));
        }
        assert_eq!(report.rounds, 1);
        assert_eq!(report.unresolved(), 0);
    }

    // Tests a surrounded hole takes the surrounding color
    #[test]
    fn test_surrounded_hole() {
        let color = Pixel::new(40, 90, 160, 1);
        let mut pixels = vec![color; 9];
        pixels[4] = GARBAGE;
        let mut grid = PixelGrid::from_pixels(3, 3, pixels).unwrap();

        extrapolate_fast(&mut grid).unwrap();
        assert_eq!(grid.get(1, 1), Pixel::new(40, 90, 160, 0));
    }

    // Tests diagonal spread from a single corner source
    #[test]
    fn test_corner_source_fills_square() {
        let mut grid = PixelGrid::new(3, 3);
        grid.set(0, 0, Pixel::new(9, 9, 9, 255));

        let report = extrapolate_fast(&mut grid).unwrap();
        assert_eq!(report.resolved, 8);
        assert_eq!(grid.get(2, 2), Pixel::new(9, 9, 9, 0));
    }

    // Tests an image with no opaque pixel keeps every color
    // Verified by resolving pixels even when no neighbor contributed
    #[test]
    fn test_fully_transparent_is_untouched() {
        let mut grid = row(&[GARBAGE, Pixel::new(1, 2, 3, 0), GARBAGE]);
        let before = grid.clone();
        let report = extrapolate_fast(&mut grid).unwrap();

        assert_eq!(grid, before);
        assert_eq!(report.resolved, 0);
    }

    // Tests an opaque image is a no-op
    #[test]
    fn test_fully_opaque_is_untouched() {
        let mut grid = row(&[RED, BLUE, RED]);
        let before = grid.clone();
        extrapolate_fast(&mut grid).unwrap();
        assert_eq!(grid, before);
    }
}
