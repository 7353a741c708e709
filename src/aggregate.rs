//! Final disposition policy for a color analysis.
//!
//! Folds the color verdict, the gloss band check and the defect list into
//! one of three dispositions:
//!
//! - `REJECT` on any hard failure: color out of spec, gloss outside the
//!   acceptance band, or a critical surface defect.
//! - `REVIEW` when the part is salvageable but suspect: borderline color
//!   or more than two surface defects.
//! - `APPROVE` otherwise.
//!
//! Rejections take precedence over review triggers, so a borderline color
//! with a failed gloss check still rejects.

use serde::{Deserialize, Serialize};

use crate::color::ColorVerdict;
use crate::defects::{DefectCandidate, Severity};

/// Final call for an inspected part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Disposition {
    Approve,
    Review,
    Reject,
}

/// Combines the per-channel findings into a disposition.
pub fn disposition(
    color: ColorVerdict,
    gloss_in_range: bool,
    defects: &[DefectCandidate],
) -> Disposition {
    let critical = defects.iter().any(|d| d.severity == Severity::Critical);
    if color == ColorVerdict::OutOfSpec || !gloss_in_range || critical {
        return Disposition::Reject;
    }
    if color == ColorVerdict::Borderline || defects.len() > 2 {
        return Disposition::Review;
    }
    Disposition::Approve
}

/// Operator-facing summary of what to do about the findings.
///
/// Notes are emitted in a fixed order (color, gloss, defects) and joined
/// with `" | "`. A clean part gets a single standing phrase.
pub fn recommendation(
    delta_e: f64,
    tolerance: f64,
    gloss: f64,
    gloss_in_range: bool,
    defect_count: usize,
) -> String {
    let mut notes = Vec::new();
    if delta_e > tolerance {
        notes.push(format!(
            "Color deviation high (dE={delta_e:.2}, tolerance {tolerance:.2}); \
             check the anodizing bath parameters."
        ));
    }
    if !gloss_in_range {
        notes.push(format!(
            "Gloss level {gloss:.1} GU is outside the acceptance band; \
             review the surface finishing process."
        ));
    }
    if defect_count > 0 {
        notes.push(format!(
            "{defect_count} surface defect(s) detected; inspect the affected areas."
        ));
    }
    if notes.is_empty() {
        return "Part meets the quality standards.".to_string();
    }
    notes.join(" | ")
}
