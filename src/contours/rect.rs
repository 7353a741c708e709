//! Minimum-area oriented rectangle of a point set.
//!
//! Convex hull via the monotone chain, then rotating calipers: the smallest
//! enclosing rectangle has one side collinear with a hull edge, so scanning
//! every hull edge and projecting the hull onto that edge frame finds the
//! optimum. Ties keep the first edge in hull order, which is itself fixed
//! by the lexicographic point sort.

use nalgebra::Vector2;

use crate::types::OrientedRect;

/// Convex hull of a point set (monotone chain), collinear points removed.
pub fn convex_hull(points: &[[f32; 2]]) -> Vec<[f32; 2]> {
    let mut pts: Vec<[f32; 2]> = points.to_vec();
    pts.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    fn cross(o: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f64 {
        (a[0] - o[0]) as f64 * (b[1] - o[1]) as f64 - (a[1] - o[1]) as f64 * (b[0] - o[0]) as f64
    }

    let mut hull: Vec<[f32; 2]> = Vec::with_capacity(pts.len() + 1);
    for &p in &pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}

/// Minimum-area oriented rectangle enclosing the points, canonicalized so
/// that `width_px >= height_px`.
///
/// Degenerate inputs still produce a rectangle: a single point yields a
/// zero-size rectangle at that point, collinear points a zero-height one
/// along the segment.
pub fn min_area_rect(points: &[[f32; 2]]) -> OrientedRect {
    let hull = convex_hull(points);
    match hull.len() {
        0 => return OrientedRect::default(),
        1 => {
            return OrientedRect {
                center_x: hull[0][0],
                center_y: hull[0][1],
                ..OrientedRect::default()
            }
        }
        2 => return segment_rect(hull[0], hull[1]),
        _ => {}
    }

    let mut best: Option<(f32, OrientedRect)> = None;
    for i in 0..hull.len() {
        let p0 = Vector2::new(hull[i][0], hull[i][1]);
        let p1 = hull[(i + 1) % hull.len()];
        let edge = Vector2::new(p1[0], p1[1]) - p0;
        let len = edge.norm();
        if len <= f32::EPSILON {
            continue;
        }
        let u = edge / len;
        let v = Vector2::new(-u.y, u.x);

        let mut s_min = f32::INFINITY;
        let mut s_max = f32::NEG_INFINITY;
        let mut t_min = f32::INFINITY;
        let mut t_max = f32::NEG_INFINITY;
        for q in &hull {
            let d = Vector2::new(q[0], q[1]) - p0;
            let s = d.dot(&u);
            let t = d.dot(&v);
            s_min = s_min.min(s);
            s_max = s_max.max(s);
            t_min = t_min.min(t);
            t_max = t_max.max(t);
        }

        let width = s_max - s_min;
        let height = t_max - t_min;
        let area = width * height;
        if best.as_ref().map_or(true, |(a, _)| area < *a) {
            let center = p0 + u * (s_min + s_max) * 0.5 + v * (t_min + t_max) * 0.5;
            let rect = OrientedRect {
                center_x: center.x,
                center_y: center.y,
                width_px: width,
                height_px: height,
                angle_deg: u.y.atan2(u.x).to_degrees(),
            };
            best = Some((area, rect));
        }
    }

    match best {
        Some((_, rect)) => rect.canonicalized(),
        None => OrientedRect::default(),
    }
}

fn segment_rect(a: [f32; 2], b: [f32; 2]) -> OrientedRect {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    OrientedRect {
        center_x: (a[0] + b[0]) * 0.5,
        center_y: (a[1] + b[1]) * 0.5,
        width_px: (dx * dx + dy * dy).sqrt(),
        height_px: 0.0,
        angle_deg: dy.atan2(dx).to_degrees(),
    }
    .canonicalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hull_drops_interior_and_collinear_points() {
        let pts = [
            [0.0, 0.0],
            [10.0, 0.0],
            [10.0, 4.0],
            [0.0, 4.0],
            [5.0, 0.0], // collinear on the bottom edge
            [3.0, 2.0], // interior
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&[3.0, 2.0]));
        assert!(!hull.contains(&[5.0, 0.0]));
    }

    #[test]
    fn axis_aligned_rectangle_is_recovered() {
        let pts = [
            [0.0, 0.0],
            [10.0, 0.0],
            [10.0, 4.0],
            [0.0, 4.0],
            [3.0, 2.0],
            [7.0, 1.0],
        ];
        let rect = min_area_rect(&pts);
        assert!((rect.width_px - 10.0).abs() < 1e-4);
        assert!((rect.height_px - 4.0).abs() < 1e-4);
        assert!((rect.center_x - 5.0).abs() < 1e-4);
        assert!((rect.center_y - 2.0).abs() < 1e-4);
        assert!(rect.angle_deg.abs() < 1e-3);
    }

    #[test]
    fn rotated_square_keeps_its_side_and_tilt() {
        let pts = [[0.0, 0.0], [5.0, 5.0], [10.0, 0.0], [5.0, -5.0]];
        let rect = min_area_rect(&pts);
        let side = (50.0f32).sqrt();
        assert!((rect.width_px - side).abs() < 1e-3);
        assert!((rect.height_px - side).abs() < 1e-3);
        assert!((rect.center_x - 5.0).abs() < 1e-3);
        assert!(rect.center_y.abs() < 1e-3);
        assert!((rect.angle_deg.abs() - 45.0).abs() < 1e-2);
    }

    #[test]
    fn canonical_form_reports_the_long_side_first() {
        let pts = [[0.0, 0.0], [4.0, 0.0], [4.0, 12.0], [0.0, 12.0]];
        let rect = min_area_rect(&pts);
        assert!(rect.width_px >= rect.height_px);
        assert!((rect.width_px - 12.0).abs() < 1e-4);
        assert!((rect.height_px - 4.0).abs() < 1e-4);
        assert!((-90.0..90.0).contains(&rect.angle_deg));
    }

    #[test]
    fn collinear_points_collapse_to_a_segment() {
        let pts = [[1.0, 1.0], [3.0, 3.0], [5.0, 5.0], [7.0, 7.0]];
        let rect = min_area_rect(&pts);
        assert!((rect.width_px - (72.0f32).sqrt()).abs() < 1e-3);
        assert_eq!(rect.height_px, 0.0);
        assert!((rect.center_x - 4.0).abs() < 1e-4);
        assert!((rect.center_y - 4.0).abs() < 1e-4);
        assert!((rect.angle_deg - 45.0).abs() < 1e-3);
    }

    #[test]
    fn single_point_yields_a_zero_rect_at_the_point() {
        let rect = min_area_rect(&[[2.0, 9.0]]);
        assert_eq!((rect.center_x, rect.center_y), (2.0, 9.0));
        assert_eq!((rect.width_px, rect.height_px), (0.0, 0.0));
    }
}
