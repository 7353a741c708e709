//! Color pipeline: Lab conversion, perceptual difference and gloss proxy.
//!
//! Overview
//! - `lab`: exact sRGB (D65) to CIE Lab conversion and the central-region
//!   mean color of a frame.
//! - `delta_e`: simplified CIE94-style color difference plus the verdict
//!   classification against a tier tolerance.
//! - `gloss`: brightness-histogram gloss estimate in gloss units.
//!
//! All public outputs are rounded to a fixed decimal precision so records
//! serialize identically across platforms and runs.

pub mod delta_e;
pub mod gloss;
pub mod lab;

pub use delta_e::{classify, color_difference, ColorVerdict};
pub use gloss::gloss_value;
pub use lab::{lab_from_rgb, mean_center_rgb, LabColor};
