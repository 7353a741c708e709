//! Surface defect scan: adaptive threshold, classification, ranking.
//!
//! Defects read darker than their local surroundings, so the scan compares
//! each pixel against a Gaussian-weighted local mean and keeps pixels at
//! least `offset` levels below it. Connected dark regions inside a
//! plausible size band are then classified by shape and ranked by area.
//!
//! Determinism
//! - Candidate confidences are placeholder values drawn from the generator
//!   handed in by the caller, in discovery order, so a seeded generator
//!   reproduces records exactly.
//! - The ranking sort is stable; equal-area candidates keep discovery order.

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::contours::{bounding_rect, contour_area, find_external_contours};
use crate::image::{ImageU8, ImageView, Mask};
use crate::preprocess::{blur_u8, gaussian_taps, local_mean_f32, GAUSSIAN_5TAP};
use crate::types::IntRect;

/// Defect morphology classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectKind {
    Scratch,
    Spot,
    Waviness,
}

impl DefectKind {
    /// Severity is fixed per class; isolated spots cut deeper into the
    /// finish than elongated handling marks.
    pub fn severity(self) -> Severity {
        match self {
            DefectKind::Scratch => Severity::Minor,
            DefectKind::Spot => Severity::Major,
            DefectKind::Waviness => Severity::Minor,
        }
    }
}

/// Defect severity grades, ordered from mild to rejecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

/// One ranked defect candidate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectCandidate {
    pub kind: DefectKind,
    pub severity: Severity,
    pub bounding_box: IntRect,
    /// Enclosed area of the defect boundary, px².
    pub area: f64,
    /// Placeholder detection confidence in percent, one decimal.
    pub confidence: f64,
}

/// Tuning knobs of the defect scan.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefectParams {
    /// Candidate area band in px², exclusive on both ends.
    pub min_area_px: f64,
    pub max_area_px: f64,
    /// Local-mean window size for the adaptive threshold (odd).
    pub window: usize,
    /// Levels below the local mean a pixel must sit to count as defect.
    pub offset: f32,
    /// Bounding-box aspect above which a candidate is a scratch.
    pub scratch_aspect: f32,
    /// Area below which a non-scratch candidate is a spot.
    pub spot_max_area: f64,
    /// Keep at most this many candidates, largest areas first.
    pub max_candidates: usize,
}

impl Default for DefectParams {
    fn default() -> Self {
        Self {
            min_area_px: 100.0,
            max_area_px: 5000.0,
            window: 11,
            offset: 2.0,
            scratch_aspect: 3.0,
            spot_max_area: 500.0,
            max_candidates: 5,
        }
    }
}

/// Foreground mask of pixels at least `offset` levels below their local
/// Gaussian mean. The frame is pre-smoothed so single-pixel noise does not
/// reach the comparison.
pub fn threshold_mask(gray: ImageU8<'_>, params: &DefectParams) -> Mask {
    let smoothed = blur_u8(gray, &GAUSSIAN_5TAP);
    let taps = gaussian_taps(params.window, 0.0);
    let mean = local_mean_f32(smoothed.as_view(), &taps);

    let view = smoothed.as_view();
    let mut mask = Mask::new(view.w, view.h);
    for y in 0..view.h {
        let src = view.row(y);
        let mean_row = mean.row(y);
        for x in 0..view.w {
            if (src[x] as f32) <= mean_row[x] - params.offset {
                mask.set(x, y);
            }
        }
    }
    mask
}

/// Scan a grayscale frame for defect candidates.
///
/// `rng` drives only the placeholder confidence values.
pub fn scan(gray: ImageU8<'_>, params: &DefectParams, rng: &mut StdRng) -> Vec<DefectCandidate> {
    let mask = threshold_mask(gray, params);
    let mut candidates: Vec<DefectCandidate> = Vec::new();

    for contour in find_external_contours(&mask) {
        let area = contour_area(&contour.points);
        if area <= params.min_area_px || area >= params.max_area_px {
            continue;
        }
        let bounding_box = bounding_rect(&contour.points);
        let kind = classify_kind(area, bounding_box.aspect(), params);
        candidates.push(DefectCandidate {
            kind,
            severity: kind.severity(),
            bounding_box,
            area,
            confidence: round1(rng.gen_range(70.0..95.0)),
        });
    }

    debug!("defect scan: {} candidates before ranking", candidates.len());
    candidates.sort_by(|a, b| b.area.total_cmp(&a.area));
    candidates.truncate(params.max_candidates);
    candidates
}

fn classify_kind(area: f64, aspect: f32, params: &DefectParams) -> DefectKind {
    if aspect > params.scratch_aspect {
        DefectKind::Scratch
    } else if area < params.spot_max_area {
        DefectKind::Spot
    } else {
        DefectKind::Waviness
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
