//! Result records produced by the inspection pipelines.
//!
//! Everything here serializes to camelCase JSON for downstream systems;
//! the structs bundle measured values with the catalog context they were
//! judged against so a report is self-describing.

use serde::{Deserialize, Serialize};

use crate::aggregate::Disposition;
use crate::catalog::{Dimensions, GlossRange};
use crate::color::{ColorVerdict, LabColor};
use crate::defects::DefectCandidate;
use crate::dimensional::MeasurementStatus;
use crate::types::OrientedRect;

/// Timing entry describing a single stage of an inspection run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one inspection run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Result of a dimensional measurement run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementResult {
    pub product_code: String,
    pub product_name: String,
    /// Measured dimensions in physical units.
    pub measurements: Dimensions,
    /// Catalog nominal the part was judged against.
    pub nominal: Dimensions,
    /// Signed measured-minus-nominal deviations.
    pub deviations: Dimensions,
    pub tolerance: Dimensions,
    pub status: MeasurementStatus,
    pub issues: Vec<String>,
    pub confidence: f64,
    /// Area enclosed by the traced part boundary, px².
    pub contour_area: f64,
    /// Fitted minimum-area rectangle in pixel coordinates.
    pub bounding_box: OrientedRect,
    pub latency_ms: f64,
    pub timing: TimingBreakdown,
}

/// Result of a color/surface analysis run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Mean color of the sampled center region.
    pub measured_lab: LabColor,
    pub reference_lab: LabColor,
    pub delta_e: f64,
    /// Tier tolerance the difference was classified against.
    pub delta_e_tolerance: f64,
    pub color_verdict: ColorVerdict,
    pub gloss_value: f64,
    pub gloss_range: GlossRange,
    pub gloss_in_range: bool,
    pub defects: Vec<DefectCandidate>,
    pub disposition: Disposition,
    pub recommendation: String,
    pub confidence: f64,
    pub latency_ms: f64,
    pub timing: TimingBreakdown,
}
