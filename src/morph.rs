//! Binary morphology with a 3×3 structuring element.
//!
//! The close operation (dilate, then erode) bridges one-pixel gaps in traced
//! edge rings before boundary extraction. Pixels outside the frame count as
//! background, so closing never grows a region past its bounding box.

use crate::image::Mask;

/// Dilation: a pixel is set if any pixel in its 3×3 neighborhood is set.
pub fn dilate3x3(src: &Mask) -> Mask {
    let mut out = Mask::new(src.w, src.h);
    if src.w == 0 || src.h == 0 {
        return out;
    }
    for y in 0..src.h {
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(src.h - 1);
        for x in 0..src.w {
            let x0 = x.saturating_sub(1);
            let x1 = (x + 1).min(src.w - 1);
            'probe: for yy in y0..=y1 {
                for xx in x0..=x1 {
                    if src.is_set(xx, yy) {
                        out.set(x, y);
                        break 'probe;
                    }
                }
            }
        }
    }
    out
}

/// Erosion: a pixel survives only if its full 3×3 neighborhood is set.
/// Neighborhoods truncated by the frame border count the missing pixels as
/// background, so border pixels never survive.
pub fn erode3x3(src: &Mask) -> Mask {
    let mut out = Mask::new(src.w, src.h);
    if src.w < 3 || src.h < 3 {
        return out;
    }
    for y in 1..src.h - 1 {
        'pixels: for x in 1..src.w - 1 {
            for yy in y - 1..=y + 1 {
                for xx in x - 1..=x + 1 {
                    if !src.is_set(xx, yy) {
                        continue 'pixels;
                    }
                }
            }
            out.set(x, y);
        }
    }
    out
}

/// Morphological close: `iterations` dilations followed by the same number
/// of erosions.
pub fn close3x3(src: &Mask, iterations: usize) -> Mask {
    let mut mask = src.clone();
    for _ in 0..iterations {
        mask = dilate3x3(&mask);
    }
    for _ in 0..iterations {
        mask = erode3x3(&mask);
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from_rows(rows: &[&str]) -> Mask {
        let h = rows.len();
        let w = rows[0].len();
        let mut mask = Mask::new(w, h);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    mask.set(x, y);
                }
            }
        }
        mask
    }

    #[test]
    fn close_fills_a_one_pixel_gap_in_a_line() {
        let mask = mask_from_rows(&[
            ".......",
            ".......",
            ".##.##.",
            ".......",
            ".......",
        ]);
        let closed = close3x3(&mask, 1);
        assert!(closed.is_set(3, 2), "gap should be bridged");
        for x in 1..6 {
            assert!(closed.is_set(x, 2));
        }
    }

    #[test]
    fn close_does_not_grow_the_bounding_box() {
        let mask = mask_from_rows(&[
            "........",
            ".######.",
            ".#....#.",
            ".#....#.",
            ".######.",
            "........",
        ]);
        let closed = close3x3(&mask, 1);
        for x in 0..8 {
            assert!(!closed.is_set(x, 0));
            assert!(!closed.is_set(x, 5));
        }
        for y in 0..6 {
            assert!(!closed.is_set(0, y));
            assert!(!closed.is_set(7, y));
        }
        // The original ring is still present.
        for x in 1..7 {
            assert!(closed.is_set(x, 1));
            assert!(closed.is_set(x, 4));
        }
    }

    #[test]
    fn erode_removes_isolated_pixels() {
        let mut mask = Mask::new(5, 5);
        mask.set(2, 2);
        assert_eq!(erode3x3(&mask).count_set(), 0);
    }
}
