//! Inspection entry points orchestrating the per-frame pipelines.
//!
//! Overview
//! - Dimensional measurement: grayscale conversion, dominant-shape
//!   detection, and tolerance evaluation against a catalog spec.
//! - Calibration: the same shape detection run on a reference object of
//!   known size, feeding the shared [`CalibrationStore`].
//! - Color analysis: center-region Lab estimation, simplified perceptual
//!   difference against a color standard, gloss estimation, defect scan
//!   and the final disposition.
//! - Defect scan: exposed standalone for surface-only checks.
//!
//! Modules
//! - [`params`] – configuration bundle consumed by [`Inspector::new`].
//! - `pipeline` – the [`Inspector`] implementation.
//!
//! [`CalibrationStore`]: crate::calibration::CalibrationStore

pub mod params;
mod pipeline;

pub use params::InspectorParams;
pub use pipeline::Inspector;
