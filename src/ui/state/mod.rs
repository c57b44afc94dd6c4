// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Zoom, drag and scroll state live here, separated from the viewer so their
//! clamping rules can be tested without a running UI.

pub mod drag;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use viewport::{ViewState, VisibleRegion};
pub use zoom::ZoomFactor;
