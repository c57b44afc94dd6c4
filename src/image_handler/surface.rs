// SPDX-License-Identifier: MPL-2.0
//! 32-bit BGRx surfaces as produced by page rasterizers.
//!
//! Each pixel occupies four bytes: blue, green, red and an unused padding byte.
//! Rows may be padded for alignment, so the distance between two rows (the
//! stride) can exceed `width * 4`.

use crate::error::SurfaceError;
use image_rs::{Rgb, RgbImage};

const BYTES_PER_PIXEL: usize = 4;

/// Borrowed view of a BGRx pixel buffer.
#[derive(Debug, Clone, Copy)]
pub struct BgrxSurface<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a> BgrxSurface<'a> {
    /// Wraps `data` after checking that every row fits inside it.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::StrideTooSmall`] when `stride < width * 4` and
    /// [`SurfaceError::BufferTooShort`] when the last row would run past the end
    /// of `data`.
    pub fn new(data: &'a [u8], width: u32, height: u32, stride: usize) -> Result<Self, SurfaceError> {
        let overflow = SurfaceError::DimensionsOverflow { width, height };
        let row_len = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(overflow.clone())?;

        if stride < row_len {
            return Err(SurfaceError::StrideTooSmall {
                stride,
                min: row_len,
            });
        }

        // The last row only needs its pixels, not its trailing padding.
        let required = match height {
            0 => 0,
            h => stride
                .checked_mul(h as usize - 1)
                .and_then(|n| n.checked_add(row_len))
                .ok_or(overflow)?,
        };

        if data.len() < required {
            return Err(SurfaceError::BufferTooShort {
                len: data.len(),
                required,
            });
        }

        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Converts to a tightly packed RGB image.
    ///
    /// Byte 2 becomes red, byte 1 green, byte 0 blue; byte 3 is dropped.
    #[must_use]
    pub fn to_rgb(&self) -> RgbImage {
        let mut image = RgbImage::new(self.width, self.height);
        if self.width == 0 || self.height == 0 {
            return image;
        }

        let row_len = self.width as usize * BYTES_PER_PIXEL;
        let rows = self.data.chunks(self.stride).take(self.height as usize);

        for (dst_row, src_row) in image.rows_mut().zip(rows) {
            for (dst, src) in dst_row.zip(src_row[..row_len].chunks_exact(BYTES_PER_PIXEL)) {
                *dst = Rgb([src[2], src[1], src[0]]);
            }
        }

        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lays out `pixels` (as (b, g, r, pad)) row by row with `stride` bytes per row,
    /// filling the padding with a marker that must never leak into the output.
    fn build_surface(width: u32, height: u32, stride: usize) -> Vec<u8> {
        let mut data = vec![0xEE; stride * height as usize];
        for y in 0..height as usize {
            for x in 0..width as usize {
                let offset = y * stride + x * 4;
                data[offset] = x as u8; // blue
                data[offset + 1] = y as u8; // green
                data[offset + 2] = (x * 10 + y) as u8; // red
                data[offset + 3] = 0xFF;
            }
        }
        data
    }

    #[test]
    fn converts_bgrx_to_rgb_without_padding() {
        let data = build_surface(3, 2, 12);
        let surface = BgrxSurface::new(&data, 3, 2, 12).expect("valid surface");
        let image = surface.to_rgb();

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.as_raw().len(), 3 * 2 * 3);
        assert_eq!(image.get_pixel(2, 1).0, [21, 1, 2]);
    }

    #[test]
    fn walks_rows_by_stride() {
        // 5 pixels wide, rows aligned to 32 bytes.
        let data = build_surface(5, 4, 32);
        let surface = BgrxSurface::new(&data, 5, 4, 32).expect("valid surface");
        assert_eq!(surface.stride(), 32);
        let image = surface.to_rgb();

        for y in 0..4u32 {
            for x in 0..5u32 {
                let expected = [(x * 10 + y) as u8, y as u8, x as u8];
                assert_eq!(image.get_pixel(x, y).0, expected, "pixel ({x}, {y})");
            }
        }
        assert!(!image.as_raw().contains(&0xEE));
    }

    #[test]
    fn last_row_may_omit_trailing_padding() {
        let mut data = build_surface(2, 2, 16);
        data.truncate(16 + 8);
        let surface = BgrxSurface::new(&data, 2, 2, 16).expect("last row is complete");
        assert_eq!(surface.to_rgb().get_pixel(1, 1).0, [11, 1, 1]);
    }

    #[test]
    fn rejects_stride_smaller_than_row() {
        let data = vec![0; 64];
        let err = BgrxSurface::new(&data, 4, 2, 12).unwrap_err();
        assert_eq!(err, SurfaceError::StrideTooSmall { stride: 12, min: 16 });
    }

    #[test]
    fn rejects_short_buffer() {
        let data = vec![0; 20];
        let err = BgrxSurface::new(&data, 2, 3, 8).unwrap_err();
        assert_eq!(
            err,
            SurfaceError::BufferTooShort {
                len: 20,
                required: 24
            }
        );
    }

    #[test]
    fn empty_surface_converts_to_empty_image() {
        let surface = BgrxSurface::new(&[], 0, 0, 0).expect("empty surface is valid");
        let image = surface.to_rgb();
        assert_eq!(image.dimensions(), (0, 0));
    }
}
