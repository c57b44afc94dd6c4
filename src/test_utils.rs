// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and synthetic images.

pub use approx::assert_abs_diff_eq;

use image_rs::{Rgb, RgbImage};

/// Builds an image whose pixels encode their own coordinates, so resampling or
/// conversion mistakes show up as wrong channel values.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}
