#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod calibration;
pub mod catalog;
pub mod error;
pub mod image;
pub mod inspector;
pub mod report;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
// (You can tighten or feature-gate these later.)
pub mod aggregate;
pub mod color;
pub mod config;
pub mod contours;
pub mod defects;
pub mod dimensional;
pub mod edges;
pub mod geometry;
pub mod morph;
pub mod preprocess;
pub mod synthetic;

// --- High-level re-exports -------------------------------------------------

// Main entry points: inspector + results.
pub use crate::error::{InspectError, Result};
pub use crate::inspector::{Inspector, InspectorParams};
pub use crate::report::{ColorAnalysisResult, MeasurementResult};

// Shared data model used throughout the operations.
pub use crate::calibration::{Calibration, CalibrationStore};
pub use crate::catalog::{ColorProduct, ColorStandard, GlossRange, ProductSpec, QualityTier};
pub use crate::defects::DefectCandidate;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use part_inspector::prelude::*;
///
/// # fn main() -> part_inspector::Result<()> {
/// let (w, h) = (1280usize, 720usize);
/// let pixels = vec![200u8; w * h * 3];
/// let frame = RgbImageU8 { w, h, stride: w * 3, data: &pixels };
///
/// let inspector = Inspector::new(InspectorParams::default());
/// let defects = inspector.detect_defects(&frame)?;
/// println!("defects={}", defects.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RgbImageU8;
    pub use crate::{InspectError, Inspector, InspectorParams, Result};
    pub use crate::{ColorAnalysisResult, MeasurementResult};
}
