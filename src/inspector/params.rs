//! Parameter types configuring the inspection pipelines.
//!
//! One bundle covers every operation; unset fields deserialize to the
//! defaults, so a config file only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::calibration::Calibration;
use crate::defects::DefectParams;
use crate::geometry::GeometryParams;

/// Inspector-wide parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectorParams {
    /// Shape-detection front-end shared by measurement and calibration.
    pub geometry: GeometryParams,
    /// Surface defect scan configuration.
    pub defects: DefectParams,
    /// Calibration loaded into the store at construction time.
    pub calibration: Calibration,
    /// Seed of the generator behind the placeholder confidence values.
    /// Runs with equal seeds over equal frames reproduce results exactly.
    pub confidence_seed: u64,
}

impl Default for InspectorParams {
    fn default() -> Self {
        Self {
            geometry: GeometryParams::default(),
            defects: DefectParams::default(),
            calibration: Calibration::default(),
            confidence_seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_deserializes_to_defaults() {
        let params: InspectorParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.confidence_seed, 42);
        assert_eq!(params.calibration.pixels_per_unit, 10.0);
        assert_eq!(params.geometry.blur_ksize, 5);
        assert_eq!(params.defects.max_candidates, 5);
    }

    #[test]
    fn partial_override_keeps_the_rest() {
        let params: InspectorParams =
            serde_json::from_str(r#"{"confidenceSeed": 7, "geometry": {"minAreaPx": 900.0}}"#)
                .unwrap();
        assert_eq!(params.confidence_seed, 7);
        assert_eq!(params.geometry.min_area_px, 900.0);
        assert_eq!(params.geometry.blur_ksize, 5);
    }
}
