//! Dimensional conformity evaluation.
//!
//! Overview
//! - Converts the fitted rectangle of a detected part from pixels to
//!   physical units through the active [`Calibration`].
//! - The long side of the canonical rectangle is reported as the part
//!   length and the short side as the width. Height is not observable
//!   from a single top-down frame and stays unset.
//! - Each measured dimension is compared against the catalog nominal;
//!   a deviation beyond the allowed tolerance fails the part and adds a
//!   human-readable issue line.
//!
//! Determinism: pure arithmetic over the inputs, no I/O and no RNG.

use log::debug;
use serde::Serialize;

use crate::calibration::Calibration;
use crate::catalog::{Dimensions, ProductSpec};
use crate::types::DetectedShape;

/// Pass/fail verdict of a dimensional check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementStatus {
    Passed,
    Failed,
}

/// Outcome of comparing a detected shape against a product spec.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionalEvaluation {
    /// Measured dimensions in physical units, rounded to 0.01.
    pub measurements: Dimensions,
    /// Signed deviations from nominal, rounded to 0.01.
    pub deviations: Dimensions,
    pub status: MeasurementStatus,
    /// One line per dimension that exceeded its tolerance.
    pub issues: Vec<String>,
    /// Measurement confidence in percent, driven by boundary quality.
    pub confidence: f64,
}

/// Evaluates a detected shape against the nominal dimensions of `spec`.
///
/// The verdict is formed from the unrounded deviations; the rounded
/// values in the result are for reporting only.
pub fn evaluate(
    shape: &DetectedShape,
    spec: &ProductSpec,
    calibration: &Calibration,
) -> DimensionalEvaluation {
    let length = calibration.to_units(f64::from(shape.rect.width_px));
    let width = calibration.to_units(f64::from(shape.rect.height_px));

    let dev_length = length - spec.nominal.length;
    let dev_width = width - spec.nominal.width;

    let mut issues = Vec::new();
    if dev_length.abs() > spec.tolerance.length {
        issues.push(format!(
            "Length tolerance exceeded: {:.2} mm deviation (allowed ±{:.2} mm)",
            dev_length.abs(),
            spec.tolerance.length
        ));
    }
    if dev_width.abs() > spec.tolerance.width {
        issues.push(format!(
            "Width tolerance exceeded: {:.2} mm deviation (allowed ±{:.2} mm)",
            dev_width.abs(),
            spec.tolerance.width
        ));
    }

    let status = if issues.is_empty() {
        MeasurementStatus::Passed
    } else {
        MeasurementStatus::Failed
    };

    // Cleanly traced boundaries (closer to the isoperimetric ideal) earn
    // a small confidence bonus over ragged ones.
    let confidence = round1((95.0 + shape.circularity() * 5.0).min(99.9));

    debug!(
        "dimensional eval: code={} len_mm={:.2} wid_mm={:.2} status={:?} issues={}",
        spec.code,
        length,
        width,
        status,
        issues.len()
    );

    DimensionalEvaluation {
        measurements: Dimensions::new(round2(length), round2(width), None),
        deviations: Dimensions::new(round2(dev_length), round2(dev_width), None),
        status,
        issues,
        confidence,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
