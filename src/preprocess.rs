//! Grayscale reduction and separable Gaussian smoothing.
//!
//! Every analysis path starts here: frames are reduced to luminance with the
//! Rec.601 weights, then smoothed with a separable kernel before gradient or
//! threshold work. Border samples clamp to the image extents.
//!
//! Two value scales are used deliberately:
//! - `luminance_f32` produces `[0, 1]` images for the gradient stages.
//! - `blur_u8` / `local_mean_f32` stay in 8-bit units so the adaptive
//!   threshold offset keeps its intensity-level meaning.

use crate::image::{GrayImageU8, ImageF32, ImageU8, ImageView, ImageViewMut, RgbImageU8};

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Rec.601 luma weights, matching the common BGR→gray conversion.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Reduce an RGB frame to an owned 8-bit grayscale buffer.
pub fn rgb_to_gray(rgb: &RgbImageU8<'_>) -> GrayImageU8 {
    let mut data = vec![0u8; rgb.w * rgb.h];
    for y in 0..rgb.h {
        let src = rgb.row(y);
        let dst = &mut data[y * rgb.w..(y + 1) * rgb.w];
        for (x, px) in dst.iter_mut().enumerate() {
            let r = src[3 * x] as f32;
            let g = src[3 * x + 1] as f32;
            let b = src[3 * x + 2] as f32;
            *px = (LUMA_R * r + LUMA_G * g + LUMA_B * b).round().min(255.0) as u8;
        }
    }
    GrayImageU8::new(rgb.w, rgb.h, data)
}

/// Convert an 8-bit grayscale view to `[0, 1]` floats.
pub fn luminance_f32(gray: ImageU8<'_>) -> ImageF32 {
    let mut out = ImageF32::new(gray.w, gray.h);
    for y in 0..gray.h {
        let src = gray.row(y);
        let dst = out.row_mut(y);
        for x in 0..gray.w {
            dst[x] = src[x] as f32 / 255.0;
        }
    }
    out
}

/// Sampled Gaussian taps for an odd `ksize`, normalised to sum 1.
///
/// `sigma <= 0` falls back to `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`, the
/// conventional size-derived spread.
pub fn gaussian_taps(ksize: usize, sigma: f32) -> Vec<f32> {
    debug_assert!(ksize % 2 == 1, "kernel size must be odd");
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
    };
    let radius = (ksize / 2) as isize;
    let denom = 2.0 * sigma * sigma;
    let mut taps: Vec<f32> = (-radius..=radius)
        .map(|i| (-(i * i) as f32 / denom).exp())
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

/// Separable blur of a float image with clamped borders.
pub fn blur_f32(src: &ImageF32, taps: &[f32]) -> ImageF32 {
    let mut horiz = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        filter_row(src.row(y), horiz.row_mut(y), taps);
    }
    let mut out = ImageF32::new(src.w, src.h);
    filter_columns(&horiz, &mut out, taps);
    out
}

/// Separable blur of an 8-bit view, rounded back to 8 bits.
pub fn blur_u8(gray: ImageU8<'_>, taps: &[f32]) -> GrayImageU8 {
    let blurred = local_mean_f32(gray, taps);
    let mut data = vec![0u8; gray.w * gray.h];
    for y in 0..gray.h {
        let src = blurred.row(y);
        let dst = &mut data[y * gray.w..(y + 1) * gray.w];
        for x in 0..gray.w {
            dst[x] = src[x].round().clamp(0.0, 255.0) as u8;
        }
    }
    GrayImageU8::new(gray.w, gray.h, data)
}

/// Gaussian-weighted neighborhood mean of an 8-bit view, kept as floats in
/// 8-bit units. This is the comparison surface for the adaptive threshold.
pub fn local_mean_f32(gray: ImageU8<'_>, taps: &[f32]) -> ImageF32 {
    let mut as_f32 = ImageF32::new(gray.w, gray.h);
    for y in 0..gray.h {
        let src = gray.row(y);
        let dst = as_f32.row_mut(y);
        for x in 0..gray.w {
            dst[x] = src[x] as f32;
        }
    }
    blur_f32(&as_f32, taps)
}

fn filter_row(row: &[f32], out: &mut [f32], taps: &[f32]) {
    let len = row.len();
    if len == 0 {
        return;
    }
    let radius = (taps.len() / 2) as isize;
    for (x, dst_px) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let idx = clamp_index(x as isize + k as isize - radius, len);
            acc += tap * row[idx];
        }
        *dst_px = acc;
    }
}

fn filter_columns(src: &ImageF32, dst: &mut ImageF32, taps: &[f32]) {
    let radius = (taps.len() / 2) as isize;
    for y in 0..src.h {
        let dst_row = dst.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius, src.h);
            let src_row = src.row(sy);
            if k == 0 {
                for (x, d) in dst_row.iter_mut().enumerate() {
                    *d = tap * src_row[x];
                }
            } else {
                for (x, d) in dst_row.iter_mut().enumerate() {
                    *d += tap * src_row[x];
                }
            }
        }
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
