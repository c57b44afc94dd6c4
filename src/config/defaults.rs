// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Initial zoom factor and zoom step bounds
//! - **Resampling**: Filters used for each resampling quality class
//! - **Window**: Demo host window size

use super::ResampleFilter;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor of a freshly constructed viewport (1.0 = native resolution).
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.0;

/// Default multiplicative step for zoom in/out operations.
pub const DEFAULT_ZOOM_STEP: f64 = 1.25;

/// Minimum allowed zoom step.
pub const MIN_ZOOM_STEP: f64 = 1.01;

/// Maximum allowed zoom step.
pub const MAX_ZOOM_STEP: f64 = 4.0;

/// Largest resampled bitmap the viewport allocates, in bytes (512 MiB of RGB).
pub const MAX_BITMAP_BYTES: u64 = 512 * 1024 * 1024;

/// Whether a newly loaded page is fitted to the viewport.
pub const DEFAULT_FIT_ON_LOAD: bool = true;

// ==========================================================================
// Resampling Defaults
// ==========================================================================

/// Filter used when shrinking (anti-aliased).
pub const DEFAULT_HIGH_QUALITY_FILTER: ResampleFilter = ResampleFilter::Lanczos3;

/// Filter used when enlarging or keeping the size (simplest and fastest).
pub const DEFAULT_NORMAL_QUALITY_FILTER: ResampleFilter = ResampleFilter::Nearest;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;

/// Height reserved for the toolbar and the status line above/below the pane.
pub const CHROME_HEIGHT: u32 = 80;
