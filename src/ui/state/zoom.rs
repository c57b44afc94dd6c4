// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! The zoom factor maps source pixels to device pixels (1.0 = native
//! resolution). The core enforces no upper or lower bound beyond positivity;
//! bounds, if any, belong to the caller.

pub use crate::config::{DEFAULT_ZOOM_FACTOR, DEFAULT_ZOOM_STEP, MAX_ZOOM_STEP, MIN_ZOOM_STEP};

use crate::error::ZoomError;
use iced::Size;

/// Zoom factor, guaranteed to be positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    /// Validates a raw factor.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::NonPositive`] for zero, negative, NaN or infinite values.
    pub fn new(factor: f64) -> Result<Self, ZoomError> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Self(factor))
        } else {
            Err(ZoomError::NonPositive(factor))
        }
    }

    /// Largest factor at which an `image` sized picture fits in `viewport`
    /// without scrollbars: `min(W / w, H / h)`.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::EmptyImage`] if the image has a zero dimension and
    /// [`ZoomError::NonPositive`] if the viewport has one.
    pub fn best_fit(viewport: Size<u32>, image: Size<u32>) -> Result<Self, ZoomError> {
        if image.width == 0 || image.height == 0 {
            return Err(ZoomError::EmptyImage);
        }

        let scale_x = f64::from(viewport.width) / f64::from(image.width);
        let scale_y = f64::from(viewport.height) / f64::from(image.height);

        Self::new(scale_x.min(scale_y))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the zoom as a percentage (e.g., 1.0 → 100%).
    #[must_use]
    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Whether the image is shown smaller than its native size.
    #[must_use]
    pub fn is_shrinking(self) -> bool {
        self.0 < 1.0
    }

    /// Multiplies the factor by `step`.
    #[must_use]
    pub fn zoom_in(self, step: f64) -> Self {
        Self::new(self.0 * step).unwrap_or(self)
    }

    /// Divides the factor by `step`.
    #[must_use]
    pub fn zoom_out(self, step: f64) -> Self {
        Self::new(self.0 / step).unwrap_or(self)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// Formats a factor as a percentage label (removes unnecessary decimal places)
#[must_use]
pub fn format_percent(factor: ZoomFactor) -> String {
    let value = factor.as_percent();
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}%")
    } else {
        let text = format!("{value:.1}");
        format!("{}%", text.trim_end_matches('0').trim_end_matches('.'))
    }
}
