//! Built-in product and color-standard catalogs.
//!
//! A small factory catalog: dimensional specifications of instrument-style
//! parts (millimetres), anodizing color standards with CIE Lab references,
//! and the finished products that point at them. Codes are the lookup keys
//! everywhere; misses surface as typed errors so callers never receive a
//! defaulted specification.

use serde::{Deserialize, Serialize};

use crate::color::LabColor;
use crate::error::{InspectError, Result};

/// Physical dimensions in millimetres.
///
/// `height` is `None` for parts whose specification only constrains the
/// silhouette (two dimensions), such as flat reference targets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Dimensions {
    pub const fn new(length: f64, width: f64, height: Option<f64>) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

/// Dimensional specification of one product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpec {
    pub code: String,
    pub name: String,
    pub nominal: Dimensions,
    /// Symmetric per-dimension tolerances, same layout as `nominal`.
    pub tolerance: Dimensions,
}

/// Commercial quality tier, selecting how tight the color tolerance is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Premium,
    Standard,
    Functional,
}

/// Per-tier ΔE acceptance thresholds of one color standard.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierTolerances {
    pub premium: f64,
    pub standard: f64,
    pub functional: f64,
}

impl TierTolerances {
    pub fn for_tier(&self, tier: QualityTier) -> f64 {
        match tier {
            QualityTier::Premium => self.premium,
            QualityTier::Standard => self.standard,
            QualityTier::Functional => self.functional,
        }
    }
}

/// One anodizing/finish color standard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStandard {
    pub code: String,
    pub name: String,
    /// Reference color in CIE Lab (D65).
    pub lab_reference: LabColor,
    /// Nominal sRGB rendering of the reference, used by the simulator.
    pub rgb_reference: [u8; 3],
    pub tolerances: TierTolerances,
}

/// Inclusive gloss acceptance band in gloss units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossRange {
    pub min: f64,
    pub max: f64,
}

impl GlossRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A finished product checked against a color standard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorProduct {
    pub code: String,
    pub name: String,
    /// Catalog code of the color standard this product is finished to.
    pub color_code: String,
    pub tier: QualityTier,
    pub gloss_range: GlossRange,
}

fn spec(code: &str, name: &str, nominal: Dimensions, tolerance: Dimensions) -> ProductSpec {
    ProductSpec {
        code: code.to_string(),
        name: name.to_string(),
        nominal,
        tolerance,
    }
}

fn dims(length: f64, width: f64, height: Option<f64>) -> Dimensions {
    Dimensions::new(length, width, height)
}

/// All dimensional product specifications.
pub fn product_specs() -> Vec<ProductSpec> {
    vec![
        spec(
            "FRC-180-STD",
            "Standard tissue forceps",
            dims(180.0, 12.0, Some(8.0)),
            dims(1.0, 0.3, Some(0.2)),
        ),
        spec(
            "SCR-120-PRO",
            "Surgical scissors Pro",
            dims(120.0, 15.0, Some(6.0)),
            dims(0.8, 0.4, Some(0.3)),
        ),
        spec(
            "CLM-090-ECO",
            "Economy clamp",
            dims(90.0, 8.0, Some(5.0)),
            dims(0.5, 0.2, Some(0.15)),
        ),
        spec(
            "RTR-150-MED",
            "Medical retractor",
            dims(150.0, 20.0, Some(10.0)),
            dims(1.2, 0.5, Some(0.4)),
        ),
        spec(
            "NHD-080-PRE",
            "Precision needle holder",
            dims(80.0, 6.0, Some(4.0)),
            dims(0.3, 0.15, Some(0.1)),
        ),
        spec(
            "CUSTOM",
            "Custom object",
            dims(100.0, 50.0, None),
            dims(5.0, 2.5, None),
        ),
        spec(
            "CARD-REF",
            "Calibration card (ID-1)",
            dims(85.6, 53.98, None),
            dims(0.5, 0.5, None),
        ),
    ]
}

fn standard(
    code: &str,
    name: &str,
    lab: LabColor,
    rgb: [u8; 3],
    tolerances: TierTolerances,
) -> ColorStandard {
    ColorStandard {
        code: code.to_string(),
        name: name.to_string(),
        lab_reference: lab,
        rgb_reference: rgb,
        tolerances,
    }
}

const ANODIZE_TOLERANCES: TierTolerances = TierTolerances {
    premium: 1.5,
    standard: 3.0,
    functional: 5.0,
};

/// All color standards.
pub fn color_standards() -> Vec<ColorStandard> {
    vec![
        standard(
            "BLUE",
            "Anodized blue",
            LabColor::new(45.0, -5.0, -35.0),
            [0, 102, 178],
            ANODIZE_TOLERANCES,
        ),
        standard(
            "GREEN",
            "Anodized green",
            LabColor::new(50.0, -40.0, 30.0),
            [0, 153, 76],
            ANODIZE_TOLERANCES,
        ),
        standard(
            "RED",
            "Anodized red",
            LabColor::new(40.0, 50.0, 30.0),
            [204, 51, 51],
            ANODIZE_TOLERANCES,
        ),
        standard(
            "YELLOW",
            "Anodized yellow",
            LabColor::new(85.0, -5.0, 80.0),
            [255, 204, 0],
            ANODIZE_TOLERANCES,
        ),
        standard(
            "PURPLE",
            "Anodized purple",
            LabColor::new(35.0, 40.0, -40.0),
            [128, 51, 153],
            ANODIZE_TOLERANCES,
        ),
        // Bead-blasted natural finish varies more batch to batch.
        standard(
            "GRAY",
            "Natural gray",
            LabColor::new(60.0, 0.0, 0.0),
            [140, 140, 140],
            TierTolerances {
                premium: 2.0,
                standard: 4.0,
                functional: 6.0,
            },
        ),
    ]
}

fn product(
    code: &str,
    name: &str,
    color_code: &str,
    tier: QualityTier,
    gloss_range: GlossRange,
) -> ColorProduct {
    ColorProduct {
        code: code.to_string(),
        name: name.to_string(),
        color_code: color_code.to_string(),
        tier,
        gloss_range,
    }
}

/// All finished products subject to color QC.
pub fn color_products() -> Vec<ColorProduct> {
    use QualityTier::{Premium, Standard};
    vec![
        product(
            "CNT-STR-001",
            "Sterilization container lid",
            "BLUE",
            Premium,
            GlossRange::new(70.0, 90.0),
        ),
        product(
            "ORT-SET-002",
            "Orthopedic set tray",
            "GREEN",
            Premium,
            GlossRange::new(70.0, 90.0),
        ),
        product(
            "FRC-BDY-003",
            "Forceps body",
            "GRAY",
            Standard,
            GlossRange::new(40.0, 60.0),
        ),
        product(
            "SCR-SRG-004",
            "Scissors handle",
            "GRAY",
            Standard,
            GlossRange::new(50.0, 70.0),
        ),
        product(
            "EMG-SET-005",
            "Emergency set box",
            "RED",
            Premium,
            GlossRange::new(75.0, 95.0),
        ),
        product(
            "NRO-SET-006",
            "Neuro set tray",
            "YELLOW",
            Premium,
            GlossRange::new(70.0, 90.0),
        ),
    ]
}

/// Look up a dimensional specification by product code.
pub fn product_spec(code: &str) -> Result<ProductSpec> {
    product_specs()
        .into_iter()
        .find(|s| s.code == code)
        .ok_or_else(|| InspectError::unknown_product(code))
}

/// Look up a color standard by code.
pub fn color_standard(code: &str) -> Result<ColorStandard> {
    color_standards()
        .into_iter()
        .find(|s| s.code == code)
        .ok_or_else(|| InspectError::unknown_color(code))
}

/// Look up a color-checked product by code.
pub fn color_product(code: &str) -> Result<ColorProduct> {
    color_products()
        .into_iter()
        .find(|p| p.code == code)
        .ok_or_else(|| InspectError::unknown_product(code))
}
