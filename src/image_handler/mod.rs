// SPDX-License-Identifier: MPL-2.0
//! Source images, their zoomed renders and the pixel formats they come from.

pub mod surface;
pub mod transform;

pub use surface::BgrxSurface;
pub use transform::ResampleQuality;

use crate::error::Result;
use image_rs::RgbImage;
use std::path::Path;
use std::sync::Arc;

/// Render of the source image at the current zoom factor.
///
/// When no resampling was needed the pixels are shared with the source image.
#[derive(Debug, Clone)]
pub struct DisplayedBitmap {
    pixels: Arc<RgbImage>,
    quality: Option<ResampleQuality>,
}

impl DisplayedBitmap {
    /// Shows `source` as is.
    #[must_use]
    pub fn unscaled(source: &Arc<RgbImage>) -> Self {
        Self {
            pixels: Arc::clone(source),
            quality: None,
        }
    }

    #[must_use]
    pub fn resampled(pixels: RgbImage, quality: ResampleQuality) -> Self {
        Self {
            pixels: Arc::new(pixels),
            quality: Some(quality),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[must_use]
    pub fn pixels(&self) -> &Arc<RgbImage> {
        &self.pixels
    }

    /// Quality class used to produce this bitmap, `None` if unscaled.
    #[must_use]
    pub fn quality(&self) -> Option<ResampleQuality> {
        self.quality
    }

    /// RGBA bytes for toolkits that only accept 32-bit images.
    #[must_use]
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.as_raw().len() / 3 * 4);
        for pixel in self.pixels.as_raw().chunks_exact(3) {
            rgba.extend_from_slice(&[pixel[0], pixel[1], pixel[2], u8::MAX]);
        }
        rgba
    }
}

impl Default for DisplayedBitmap {
    fn default() -> Self {
        Self::unscaled(&Arc::new(RgbImage::new(0, 0)))
    }
}

/// Decodes any format the `image` crate understands into a source image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let decoded = image_rs::open(path.as_ref())?;
    Ok(decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::gradient_image;
    use tempfile::tempdir;

    #[test]
    fn unscaled_bitmap_shares_source_pixels() {
        let source = Arc::new(gradient_image(4, 3));
        let bitmap = DisplayedBitmap::unscaled(&source);
        assert!(Arc::ptr_eq(bitmap.pixels(), &source));
        assert!(bitmap.quality().is_none());
    }

    #[test]
    fn to_rgba_appends_opaque_alpha() {
        let bitmap = DisplayedBitmap::resampled(gradient_image(2, 1), ResampleQuality::Normal);
        assert_eq!(bitmap.to_rgba(), vec![0, 0, 0, 255, 1, 0, 1, 255]);
    }

    #[test]
    fn default_bitmap_is_empty() {
        let bitmap = DisplayedBitmap::default();
        assert_eq!((bitmap.width(), bitmap.height()), (0, 0));
    }

    #[test]
    fn load_image_decodes_png() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("page.png");
        gradient_image(6, 5).save(&path).expect("failed to write png");

        let loaded = load_image(&path).expect("failed to load png");
        assert_eq!(loaded, gradient_image(6, 5));
    }

    #[test]
    fn load_image_reports_missing_file() {
        let err = load_image("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, crate::error::Error::Image(_)));
    }
}
