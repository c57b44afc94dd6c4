// SPDX-License-Identifier: MPL-2.0
//! Rescaling of source images to the current zoom factor.

use crate::config::{ResampleFilters, MAX_BITMAP_BYTES};
use crate::error::ZoomError;
use image_rs::{imageops, RgbImage};

/// Resampling quality class, chosen from the scale direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleQuality {
    /// Anti-aliased filtering, used when shrinking to avoid moiré.
    High,
    /// Cheap filtering, used when enlarging.
    Normal,
}

impl ResampleQuality {
    /// High quality only pays off when shrinking.
    #[must_use]
    pub fn for_factor(factor: f64) -> Self {
        if factor < 1.0 {
            Self::High
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub fn filter(self, filters: &ResampleFilters) -> imageops::FilterType {
        match self {
            Self::High => filters.high.into(),
            Self::Normal => filters.normal.into(),
        }
    }
}

/// Pixel dimensions of an image of `width` x `height` shown at `factor`.
#[must_use]
pub fn scaled_dimensions(width: u32, height: u32, factor: f64) -> (u32, u32) {
    let scale = |extent: u32| {
        let scaled = (f64::from(extent) * factor).round();
        // Float-to-int casts saturate, so huge factors stop at u32::MAX.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = scaled.max(0.0) as u32;
        scaled
    };
    (scale(width), scale(height))
}

/// Rejects target dimensions whose RGB buffer would exceed [`MAX_BITMAP_BYTES`].
///
/// # Errors
///
/// Returns [`ZoomError::TooLarge`] when the byte count overflows or passes the limit.
pub fn check_bitmap_size(width: u32, height: u32) -> Result<(), ZoomError> {
    let bytes = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|pixels| pixels.checked_mul(3));
    match bytes {
        Some(bytes) if bytes <= MAX_BITMAP_BYTES => Ok(()),
        _ => Err(ZoomError::TooLarge { width, height }),
    }
}

/// Resamples `image` to exactly `width` x `height` with the given filter.
#[must_use]
pub fn rescale(
    image: &RgbImage,
    width: u32,
    height: u32,
    filter: imageops::FilterType,
) -> RgbImage {
    if width == 0 || height == 0 || image.width() == 0 || image.height() == 0 {
        return RgbImage::new(width, height);
    }
    imageops::resize(image, width, height, filter)
}
