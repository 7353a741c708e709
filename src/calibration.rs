//! Pixel-to-unit calibration state shared by the measurement operations.
//!
//! A `CalibrationStore` keeps the current scale behind a mutex so one store
//! can serve concurrent measurement calls. Updates go through a reference
//! object of known physical size; the stored ratio is the mean of the two
//! per-axis ratios, which tolerates a slightly anisotropic pixel grid.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::{InspectError, Result};

/// Scale assumed before any calibration has run: 10 px per unit.
pub const DEFAULT_PIXELS_PER_UNIT: f64 = 10.0;

/// ID-1 card dimensions in millimetres, the default calibration target.
pub const REFERENCE_CARD_WIDTH_MM: f64 = 85.6;
pub const REFERENCE_CARD_HEIGHT_MM: f64 = 53.98;

/// Current pixel-to-unit scale and the reference it was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    /// Scale in pixels per physical unit (mm for the built-in catalog).
    pub pixels_per_unit: f64,
    /// Physical width of the last calibration reference.
    pub reference_width: f64,
    /// Physical height of the last calibration reference.
    pub reference_height: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            reference_width: REFERENCE_CARD_WIDTH_MM,
            reference_height: REFERENCE_CARD_HEIGHT_MM,
        }
    }
}

impl Calibration {
    /// Convert a pixel extent to physical units.
    #[inline]
    pub fn to_units(&self, px: f64) -> f64 {
        px / self.pixels_per_unit
    }
}

/// Thread-safe holder of the current calibration.
#[derive(Debug, Default)]
pub struct CalibrationStore {
    state: Mutex<Calibration>,
}

impl CalibrationStore {
    pub fn new(initial: Calibration) -> Self {
        Self {
            state: Mutex::new(initial),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Calibration> {
        // A poisoned lock only means another caller panicked mid-update;
        // the stored value is a plain copy type and stays consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current pixels-per-unit ratio.
    pub fn ratio(&self) -> f64 {
        self.lock().pixels_per_unit
    }

    /// Copy of the full calibration state.
    pub fn snapshot(&self) -> Calibration {
        *self.lock()
    }

    /// Derive a new scale from a detected reference object.
    ///
    /// `measured_*` are the pixel extents of the detected rectangle,
    /// `known_*` the physical size of the reference. The state is left
    /// untouched when a reference dimension is not positive.
    pub fn update_from_reference(
        &self,
        measured_width_px: f64,
        measured_height_px: f64,
        known_width: f64,
        known_height: f64,
    ) -> Result<Calibration> {
        if known_width <= 0.0 || known_height <= 0.0 {
            return Err(InspectError::InvalidReference {
                width: known_width,
                height: known_height,
            });
        }
        let ratio = (measured_width_px / known_width + measured_height_px / known_height) / 2.0;
        let updated = Calibration {
            pixels_per_unit: ratio,
            reference_width: known_width,
            reference_height: known_height,
        };
        *self.lock() = updated;
        Ok(updated)
    }

    /// Set the scale directly, keeping the stored reference dimensions.
    ///
    /// Non-positive ratios are rejected with `InvalidReference` carrying the
    /// offending value in both fields.
    pub fn set_ratio(&self, pixels_per_unit: f64) -> Result<Calibration> {
        if pixels_per_unit <= 0.0 {
            return Err(InspectError::InvalidReference {
                width: pixels_per_unit,
                height: pixels_per_unit,
            });
        }
        let mut state = self.lock();
        state.pixels_per_unit = pixels_per_unit;
        Ok(*state)
    }
}
