//! Thin edge maps: direction-aligned NMS with double-threshold hysteresis.
//!
//! For each pixel the quantized gradient direction selects the two
//! comparison neighbors, and only local magnitude maxima at or above the
//! low threshold survive. Survivors at or above the high threshold seed the
//! final map; the remaining (weak) survivors are kept only when 8-connected
//! to a seed through other survivors.
//!
//! Plateau ties break toward the pixel that comes first in scan order, so an
//! ideal two-pixel-wide step response keeps exactly one pixel. The outermost
//! 1-pixel frame is ignored to avoid out-of-bounds checks in neighbor lookup.
use crate::edges::grad::Grad;
use crate::image::{ImageView, Mask};

const TAN_22_5_DEG: f32 = 0.41421356237;

const WEAK: u8 = 1;
const STRONG: u8 = 2;

/// Run NMS and hysteresis over precomputed gradients.
///
/// Thresholds are expressed on the magnitude of gradients of a `[0, 1]`
/// luminance image (a full-contrast ideal step peaks at 2.5). `low_thresh`
/// gates NMS survivors, `high_thresh` selects the hysteresis seeds.
pub fn edge_mask(grad: &Grad, low_thresh: f32, high_thresh: f32) -> Mask {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut mask = Mask::new(w, h);
    if w < 3 || h < 3 {
        return mask;
    }

    let mut levels = vec![0u8; w * h];
    let mut seeds: Vec<(usize, usize)> = Vec::new();

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < low_thresh {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            // neighbor1 precedes the pixel in scan order, neighbor2 follows.
            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            if mag <= neighbor1 || mag < neighbor2 {
                continue;
            }

            let i = y * w + x;
            if mag >= high_thresh {
                levels[i] = STRONG;
                seeds.push((x, y));
            } else {
                levels[i] = WEAK;
            }
        }
    }

    // Flood the weak survivors reachable from a strong seed. Promoted
    // pixels flip to STRONG so each enqueues at most once.
    let mut stack = seeds;
    while let Some((x, y)) = stack.pop() {
        mask.set(x, y);
        for (dx, dy) in [
            (-1isize, -1isize),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ] {
            let xn = x as isize + dx;
            let yn = y as isize + dy;
            if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                continue;
            }
            let n = yn as usize * w + xn as usize;
            if levels[n] == WEAK {
                levels[n] = STRONG;
                stack.push((xn as usize, yn as usize));
            }
        }
    }

    mask
}
