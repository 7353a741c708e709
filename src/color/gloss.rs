//! Brightness-histogram gloss estimate.
//!
//! Without a goniophotometer the rig estimates gloss from the grayscale
//! statistics: the share of near-specular pixels (levels 200..=255) scaled
//! into gloss units, averaged with a contrast term from the brightness
//! standard deviation. Output lands in [0, 100] GU at one decimal.

use crate::image::{ImageU8, ImageView};

/// First brightness level counted as a specular highlight.
const SPECULAR_LEVEL: usize = 200;

/// Estimate the gloss of a grayscale frame in gloss units.
pub fn gloss_value(gray: ImageU8<'_>) -> f64 {
    let total = (gray.w * gray.h) as f64;
    if total == 0.0 {
        return 0.0;
    }

    let mut hist = [0u64; 256];
    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    for y in 0..gray.h {
        for &px in gray.row(y) {
            hist[px as usize] += 1;
            let v = px as f64;
            sum += v;
            sum_sq += v * v;
        }
    }
    let mean = sum / total;
    let std_dev = (sum_sq / total - mean * mean).max(0.0).sqrt();

    let specular: u64 = hist[SPECULAR_LEVEL..].iter().sum();
    let highlight = (specular as f64 / total * 100.0 * 1.5).clamp(0.0, 100.0);
    let contrast = std_dev / 2.55;

    round1((highlight + contrast) / 2.0)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
