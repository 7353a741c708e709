//! Three-channel 8-bit containers the inspection entry points consume.
//!
//! `RgbImageU8` is a borrowed view over interleaved RGB bytes with an
//! explicit stride, so callers can hand over camera frames or sub-windows
//! without copying. `RgbBufferU8` is its owned counterpart used by the
//! loaders and the synthetic-frame generator.

use crate::error::{InspectError, Result};

/// Borrowed, immutable 8-bit RGB view (interleaved, `stride` in bytes).
#[derive(Clone, Debug)]
pub struct RgbImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows, >= 3 * w
    pub data: &'a [u8],
}

impl<'a> RgbImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + 3 * x;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Row of interleaved RGB bytes, `3 * w` long.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + 3 * self.w]
    }

    /// Checks the declared layout against the backing slice.
    ///
    /// Every operation validates its input frame up front so that all later
    /// stages can index without bounds surprises.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(InspectError::invalid_image(format!(
                "empty frame ({}x{})",
                self.w, self.h
            )));
        }
        if self.stride < 3 * self.w {
            return Err(InspectError::invalid_image(format!(
                "stride {} shorter than a row of width {}",
                self.stride, self.w
            )));
        }
        let needed = (self.h - 1) * self.stride + 3 * self.w;
        if self.data.len() < needed {
            return Err(InspectError::invalid_image(format!(
                "buffer holds {} bytes, layout needs {}",
                self.data.len(),
                needed
            )));
        }
        Ok(())
    }
}

/// Owned interleaved RGB buffer (`stride == 3 * w`).
#[derive(Clone, Debug)]
pub struct RgbBufferU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbBufferU8 {
    /// Construct from raw interleaved bytes (`data.len() == 3 * w * h`).
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert!(data.len() >= 3 * width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Solid-color frame.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(3 * width * height);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = (y * self.width + x) * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Fill an axis-aligned region, clamped to the frame.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, rgb: [u8; 3]) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, rgb);
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Borrow as a read-only `RgbImageU8` view.
    pub fn as_view(&self) -> RgbImageU8<'_> {
        RgbImageU8 {
            w: self.width,
            h: self.height,
            stride: 3 * self.width,
            data: &self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_a_well_formed_view() {
        let buf = RgbBufferU8::filled(4, 3, [1, 2, 3]);
        assert!(buf.as_view().validate().is_ok());
        assert_eq!(buf.as_view().get(3, 2), [1, 2, 3]);
    }

    #[test]
    fn validate_rejects_empty_and_short_buffers() {
        let empty = RgbImageU8 {
            w: 0,
            h: 0,
            stride: 0,
            data: &[],
        };
        assert!(matches!(
            empty.validate(),
            Err(InspectError::InvalidImage { .. })
        ));

        let bytes = vec![0u8; 10];
        let short = RgbImageU8 {
            w: 4,
            h: 3,
            stride: 12,
            data: &bytes,
        };
        assert!(matches!(
            short.validate(),
            Err(InspectError::InvalidImage { .. })
        ));
    }

    #[test]
    fn stride_must_cover_a_full_row() {
        let bytes = vec![0u8; 100];
        let view = RgbImageU8 {
            w: 8,
            h: 2,
            stride: 20,
            data: &bytes,
        };
        assert!(view.validate().is_err());
    }
}
