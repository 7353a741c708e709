//! sRGB to CIE Lab conversion (D65 reference white).
//!
//! The conversion is the standard two-step path: inverse sRGB gamma to
//! linear light, the linear transform to XYZ, then the Lab companding
//! function. Components are rounded to two decimals, the precision color
//! records are produced and compared at.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::image::RgbImageU8;

/// CIE Lab color. `l` serializes as `"L"` per colorimetric convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    #[serde(rename = "L")]
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabColor {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;
const LAB_EPSILON: f64 = 0.008856;
const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// Convert an 8-bit sRGB triple to Lab, rounded to two decimals.
pub fn lab_from_rgb(rgb: [u8; 3]) -> LabColor {
    let linear = Vector3::new(
        srgb_to_linear(rgb[0] as f64 / 255.0),
        srgb_to_linear(rgb[1] as f64 / 255.0),
        srgb_to_linear(rgb[2] as f64 / 255.0),
    ) * 100.0;

    // sRGB primaries to XYZ, D65.
    let m = Matrix3::new(
        0.4124564, 0.3575761, 0.1804375, //
        0.2126729, 0.7151522, 0.0721750, //
        0.0193339, 0.1191920, 0.9503041,
    );
    let xyz = m * linear;

    let fx = lab_f(xyz.x / D65_WHITE[0]);
    let fy = lab_f(xyz.y / D65_WHITE[1]);
    let fz = lab_f(xyz.z / D65_WHITE[2]);

    LabColor {
        l: round2(116.0 * fy - 16.0),
        a: round2(500.0 * (fx - fy)),
        b: round2(200.0 * (fy - fz)),
    }
}

/// Mean color of the central region (quarter margins on every side).
///
/// Frames too small to carve a margin from are averaged whole. Components
/// truncate toward zero, matching integer mean semantics.
pub fn mean_center_rgb(frame: &RgbImageU8<'_>) -> [u8; 3] {
    let (x0, x1, y0, y1) = if frame.w < 4 || frame.h < 4 {
        (0, frame.w, 0, frame.h)
    } else {
        (frame.w / 4, 3 * frame.w / 4, frame.h / 4, 3 * frame.h / 4)
    };

    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for y in y0..y1 {
        let row = frame.row(y);
        for x in x0..x1 {
            sum[0] += row[3 * x] as u64;
            sum[1] += row[3 * x + 1] as u64;
            sum[2] += row[3 * x + 2] as u64;
            count += 1;
        }
    }
    if count == 0 {
        return [0, 0, 0];
    }
    [
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    ]
}

fn srgb_to_linear(c: f64) -> f64 {
    if c > SRGB_LINEAR_THRESHOLD {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
