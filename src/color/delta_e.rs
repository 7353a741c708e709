//! Simplified perceptual color difference and verdict classification.
//!
//! The metric follows the CIE94 structure: separate lightness, chroma and
//! hue terms, with chroma-dependent weights on the last two. It is NOT the
//! plain Euclidean ΔE*ab; chroma and hue deviations of saturated colors are
//! deliberately downweighted, matching how finish deviations are judged on
//! anodized surfaces.

use serde::{Deserialize, Serialize};

use super::lab::LabColor;

/// Outcome of checking a color difference against a tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorVerdict {
    WithinSpec,
    Borderline,
    OutOfSpec,
}

/// Perceptual difference between a reference and a measured Lab color,
/// rounded to two decimals.
pub fn color_difference(reference: &LabColor, measured: &LabColor) -> f64 {
    let dl = measured.l - reference.l;
    let da = measured.a - reference.a;
    let db = measured.b - reference.b;

    let c1 = (reference.a * reference.a + reference.b * reference.b).sqrt();
    let c2 = (measured.a * measured.a + measured.b * measured.b).sqrt();
    let dc = c2 - c1;
    // Hue term is the residual of (Δa, Δb) once the chroma change is
    // removed; clamp against negative round-off.
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + 0.045 * (c1 + c2) / 2.0;
    let sh = 1.0 + 0.015 * (c1 + c2) / 2.0;

    round2((dl * dl + (dc / sc).powi(2) + dh_sq / (sh * sh)).sqrt())
}

/// Classify a color difference against a tier tolerance.
///
/// Up to the tolerance passes; up to 1.5x lands in the borderline band
/// subject to review; anything beyond is out of spec.
pub fn classify(difference: f64, tolerance: f64) -> ColorVerdict {
    if difference <= tolerance {
        ColorVerdict::WithinSpec
    } else if difference <= 1.5 * tolerance {
        ColorVerdict::Borderline
    } else {
        ColorVerdict::OutOfSpec
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_colors_have_zero_difference() {
        let lab = LabColor::new(45.0, -5.0, -35.0);
        assert_eq!(color_difference(&lab, &lab), 0.0);
    }

    #[test]
    fn known_pairs_match_the_formula() {
        let reference = LabColor::new(45.0, -5.0, -35.0);
        let measured = LabColor::new(46.0, -4.0, -33.0);
        assert!((color_difference(&reference, &measured) - 1.39).abs() < 1e-9);

        let gray_ref = LabColor::new(60.0, 0.0, 0.0);
        let gray_meas = LabColor::new(62.0, 1.0, -1.0);
        assert!((color_difference(&gray_ref, &gray_meas) - 2.42).abs() < 1e-9);
    }

    #[test]
    fn saturated_colors_downweight_chroma_shifts() {
        let neutral = color_difference(&LabColor::new(50.0, 0.0, 0.0), &LabColor::new(50.0, 3.0, 0.0));
        let saturated =
            color_difference(&LabColor::new(50.0, 40.0, 0.0), &LabColor::new(50.0, 43.0, 0.0));
        assert!(saturated < neutral);
        assert!((neutral - 2.81).abs() < 1e-9);
        assert!((saturated - 1.05).abs() < 1e-9);
    }

    #[test]
    fn classification_bands() {
        let reference = LabColor::new(45.0, -5.0, -35.0);
        let measured = LabColor::new(46.0, -4.0, -33.0);
        let de = color_difference(&reference, &measured); // 1.39

        assert_eq!(classify(de, 1.5), ColorVerdict::WithinSpec);
        assert_eq!(classify(de, 1.0), ColorVerdict::Borderline);
        assert_eq!(classify(de, 0.9), ColorVerdict::OutOfSpec);
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert_eq!(classify(1.0, 1.0), ColorVerdict::WithinSpec);
        assert_eq!(classify(1.5, 1.0), ColorVerdict::Borderline);
        assert_eq!(classify(1.5000001, 1.0), ColorVerdict::OutOfSpec);
    }

    #[test]
    fn verdict_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_value(ColorVerdict::WithinSpec).unwrap(),
            "WITHIN_SPEC"
        );
        assert_eq!(
            serde_json::to_value(ColorVerdict::OutOfSpec).unwrap(),
            "OUT_OF_SPEC"
        );
    }
}
