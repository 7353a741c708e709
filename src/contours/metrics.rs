//! Area, perimeter and bounding box of a traced boundary.
//!
//! All metrics treat the point list as a closed polygon over pixel centers.
//! The shoelace area of a traced outline therefore reports the region
//! enclosed by the border pixel centers, slightly below the pixel count of
//! the filled component; the size thresholds downstream are set with this
//! convention in mind.

use crate::types::IntRect;

/// Enclosed area of a closed boundary via the shoelace formula, in px².
pub fn contour_area(points: &[[f32; 2]]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0f64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        acc += p[0] as f64 * q[1] as f64 - q[0] as f64 * p[1] as f64;
    }
    acc.abs() / 2.0
}

/// Closed arc length of a boundary, in px.
pub fn contour_perimeter(points: &[[f32; 2]]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let mut acc = 0.0f64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        let dx = (q[0] - p[0]) as f64;
        let dy = (q[1] - p[1]) as f64;
        acc += (dx * dx + dy * dy).sqrt();
    }
    acc
}

/// Axis-aligned integer bounding box of a boundary.
///
/// Width and height count pixels, so a boundary confined to one pixel
/// column reports `w == 1`.
pub fn bounding_rect(points: &[[f32; 2]]) -> IntRect {
    if points.is_empty() {
        return IntRect::default();
    }
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p[0]);
        min_y = min_y.min(p[1]);
        max_x = max_x.max(p[0]);
        max_y = max_y.max(p[1]);
    }
    let x = min_x.floor() as i32;
    let y = min_y.floor() as i32;
    IntRect {
        x,
        y,
        w: max_x.ceil() as i32 - x + 1,
        h: max_y.ceil() as i32 - y + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_boundary_metrics() {
        let square = [[0.0, 0.0], [3.0, 0.0], [3.0, 3.0], [0.0, 3.0]];
        assert!((contour_area(&square) - 9.0).abs() < 1e-9);
        assert!((contour_perimeter(&square) - 12.0).abs() < 1e-9);
        let bbox = bounding_rect(&square);
        assert_eq!(bbox, IntRect { x: 0, y: 0, w: 4, h: 4 });
    }

    #[test]
    fn traced_block_outline_encloses_the_center_area() {
        // The 8 border pixels of a 3x3 block, clockwise from (1, 1).
        let outline = [
            [1.0, 1.0],
            [2.0, 1.0],
            [3.0, 1.0],
            [3.0, 2.0],
            [3.0, 3.0],
            [2.0, 3.0],
            [1.0, 3.0],
            [1.0, 2.0],
        ];
        assert!((contour_area(&outline) - 4.0).abs() < 1e-9);
        assert!((contour_perimeter(&outline) - 8.0).abs() < 1e-9);
        assert_eq!(bounding_rect(&outline), IntRect { x: 1, y: 1, w: 3, h: 3 });
    }

    #[test]
    fn degenerate_inputs_report_zero() {
        assert_eq!(contour_area(&[]), 0.0);
        assert_eq!(contour_perimeter(&[]), 0.0);
        assert_eq!(bounding_rect(&[]), IntRect::default());

        let point = [[5.0, 7.0]];
        assert_eq!(contour_area(&point), 0.0);
        assert_eq!(contour_perimeter(&point), 0.0);
        assert_eq!(bounding_rect(&point), IntRect { x: 5, y: 7, w: 1, h: 1 });

        let pair = [[0.0, 0.0], [4.0, 0.0]];
        assert_eq!(contour_area(&pair), 0.0);
        assert!((contour_perimeter(&pair) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn bounding_box_aspect_matches_elongation() {
        let bar = [[10.0, 5.0], [29.0, 5.0], [29.0, 9.0], [10.0, 9.0]];
        let bbox = bounding_rect(&bar);
        assert_eq!((bbox.w, bbox.h), (20, 5));
        assert!((bbox.aspect() - 4.0).abs() < 1e-6);
    }
}
