use serde::{Deserialize, Serialize};

/// Minimum-area rectangle fitted around a boundary, in pixel coordinates.
///
/// Canonical form: `width_px >= height_px`. The angle is the direction of the
/// long side in degrees, normalized to `[-90, 90)`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrientedRect {
    pub center_x: f32,
    pub center_y: f32,
    pub width_px: f32,
    pub height_px: f32,
    pub angle_deg: f32,
}

impl OrientedRect {
    /// Swap the sides so that `width_px >= height_px`, rotating the angle by
    /// 90° when a swap happens, and renormalize the angle into `[-90, 90)`.
    pub fn canonicalized(mut self) -> Self {
        if self.width_px < self.height_px {
            std::mem::swap(&mut self.width_px, &mut self.height_px);
            self.angle_deg += 90.0;
        }
        self.angle_deg = normalize_angle_deg(self.angle_deg);
        self
    }
}

/// Normalizes an angle in degrees into the range [-90, 90).
#[inline]
pub fn normalize_angle_deg(angle: f32) -> f32 {
    (angle + 90.0).rem_euclid(180.0) - 90.0
}

/// Axis-aligned integer rectangle (bounding boxes of defect candidates).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IntRect {
    /// Width over height of the box. Zero-height boxes report an aspect of 0.
    pub fn aspect(&self) -> f32 {
        if self.h <= 0 {
            0.0
        } else {
            self.w as f32 / self.h as f32
        }
    }
}

/// Largest detected boundary together with its fitted rectangle and the
/// boundary metrics the evaluators consume.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedShape {
    pub rect: OrientedRect,
    /// Area enclosed by the traced boundary, in px².
    pub area: f64,
    /// Closed arc length of the traced boundary, in px.
    pub perimeter: f64,
}

impl DetectedShape {
    /// Isoperimetric ratio `4πA / P²`: 1 for a circle, lower for elongated or
    /// ragged boundaries. Used as a segmentation-quality heuristic.
    pub fn circularity(&self) -> f64 {
        if self.perimeter <= 0.0 {
            return 0.0;
        }
        4.0 * std::f64::consts::PI * self.area / (self.perimeter * self.perimeter)
    }
}
