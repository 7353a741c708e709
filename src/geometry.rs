//! Geometric front-end: dominant-shape detection on a grayscale frame.
//!
//! Overview
//! - Luminance is smoothed with a separable Gaussian, differentiated with
//!   Sobel, thinned by NMS with hysteresis and closed morphologically.
//! - The resulting edge rings are traced; the largest boundary above the
//!   area floor becomes the detected shape, fitted with a minimum-area
//!   oriented rectangle in canonical (width >= height) form.
//!
//! Determinism
//! - Equal-area boundaries resolve by discovery order, which the tracer
//!   fixes to the raster order of each component's topmost-leftmost pixel.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::contours::{contour_area, contour_perimeter, find_external_contours, min_area_rect};
use crate::edges::{edge_mask, sobel_gradients};
use crate::image::{ImageU8, Mask};
use crate::morph::close3x3;
use crate::preprocess::{blur_f32, gaussian_taps, luminance_f32};
use crate::types::DetectedShape;

/// Knobs of the shape-detection front-end.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeometryParams {
    /// Boundaries enclosing less than this area (px²) are discarded.
    pub min_area_px: f64,
    /// Gaussian kernel size (odd) applied before gradients.
    pub blur_ksize: usize,
    /// Gaussian sigma; `<= 0` derives it from the kernel size.
    pub blur_sigma: f32,
    /// Hysteresis thresholds on [0, 1] luminance gradient magnitude.
    pub edge_low_thresh: f32,
    pub edge_high_thresh: f32,
    /// 3x3 morphological close passes over the edge map.
    pub close_iterations: usize,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            min_area_px: 5000.0,
            blur_ksize: 5,
            blur_sigma: 0.0,
            edge_low_thresh: 0.2,
            edge_high_thresh: 0.6,
            close_iterations: 1,
        }
    }
}

/// Closed binary edge map of a grayscale frame.
pub fn shape_mask(gray: ImageU8<'_>, params: &GeometryParams) -> Mask {
    let lum = luminance_f32(gray);
    let taps = gaussian_taps(params.blur_ksize, params.blur_sigma);
    let blurred = blur_f32(&lum, &taps);
    let grad = sobel_gradients(&blurred);
    let edges = edge_mask(&grad, params.edge_low_thresh, params.edge_high_thresh);
    close3x3(&edges, params.close_iterations)
}

/// Largest boundary above the area floor, fitted with an oriented rectangle.
///
/// Returns `None` when no boundary qualifies; the caller decides whether
/// that is an error.
pub fn detect_dominant_shape(gray: ImageU8<'_>, params: &GeometryParams) -> Option<DetectedShape> {
    debug!(
        "detect_dominant_shape: w={} h={} min_area={:.0}",
        gray.w, gray.h, params.min_area_px
    );
    let mask = shape_mask(gray, params);
    largest_shape_in_mask(&mask, params.min_area_px)
}

/// Shape extraction from an already-computed binary mask.
pub fn largest_shape_in_mask(mask: &Mask, min_area_px: f64) -> Option<DetectedShape> {
    let contours = find_external_contours(mask);
    let mut best: Option<(f64, usize)> = None;
    for (i, contour) in contours.iter().enumerate() {
        let area = contour_area(&contour.points);
        if area <= min_area_px {
            continue;
        }
        // Strict comparison keeps the first-discovered boundary on ties.
        if best.map_or(true, |(a, _)| area > a) {
            best = Some((area, i));
        }
    }

    let (area, index) = match best {
        Some(found) => found,
        None => {
            debug!(
                "largest_shape_in_mask: no boundary above {:.0} px^2 ({} traced)",
                min_area_px,
                contours.len()
            );
            return None;
        }
    };

    let contour = &contours[index];
    let rect = min_area_rect(&contour.points);
    debug!(
        "largest_shape_in_mask: area={:.1} rect={:.1}x{:.1} angle={:.2}",
        area, rect.width_px, rect.height_px, rect.angle_deg
    );
    Some(DetectedShape {
        rect,
        area,
        perimeter: contour_perimeter(&contour.points),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;

    fn frame_with_block(
        w: usize,
        h: usize,
        x0: usize,
        y0: usize,
        bw: usize,
        bh: usize,
    ) -> GrayImageU8 {
        let mut data = vec![220u8; w * h];
        for y in y0..y0 + bh {
            for x in x0..x0 + bw {
                data[y * w + x] = 40;
            }
        }
        GrayImageU8::new(w, h, data)
    }

    #[test]
    fn dark_block_is_detected_with_canonical_extents() {
        let gray = frame_with_block(320, 200, 60, 50, 180, 80);
        let shape = detect_dominant_shape(gray.as_view(), &GeometryParams::default())
            .expect("block should be found");

        assert!((shape.rect.width_px - 180.0).abs() < 4.0);
        assert!((shape.rect.height_px - 80.0).abs() < 4.0);
        assert!(shape.rect.width_px >= shape.rect.height_px);
        assert!((shape.rect.center_x - 150.0).abs() < 2.5);
        assert!((shape.rect.center_y - 90.0).abs() < 2.5);
        assert!(shape.rect.angle_deg.abs() < 2.0);
        assert!(shape.area > 12_000.0 && shape.area < 16_500.0);
        assert!(shape.perimeter > 400.0);
    }

    #[test]
    fn blank_frame_detects_nothing() {
        let gray = GrayImageU8::new(160, 120, vec![180u8; 160 * 120]);
        assert!(detect_dominant_shape(gray.as_view(), &GeometryParams::default()).is_none());
    }

    #[test]
    fn boundaries_below_the_area_floor_are_ignored() {
        let gray = frame_with_block(160, 120, 60, 50, 30, 20);
        assert!(detect_dominant_shape(gray.as_view(), &GeometryParams::default()).is_none());

        let relaxed = GeometryParams {
            min_area_px: 300.0,
            ..GeometryParams::default()
        };
        assert!(detect_dominant_shape(gray.as_view(), &relaxed).is_some());
    }

    #[test]
    fn largest_of_two_blocks_wins() {
        let mut data = vec![220u8; 400 * 200];
        for y in 60..120 {
            for x in 30..130 {
                data[y * 400 + x] = 40; // 100x60
            }
        }
        for y in 50..140 {
            for x in 220..360 {
                data[y * 400 + x] = 40; // 140x90
            }
        }
        let gray = GrayImageU8::new(400, 200, data);
        let shape = detect_dominant_shape(gray.as_view(), &GeometryParams::default())
            .expect("the larger block should qualify");
        assert!((shape.rect.width_px - 140.0).abs() < 4.0);
        assert!((shape.rect.center_x - 290.0).abs() < 2.5);
    }
}
