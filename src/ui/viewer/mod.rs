// SPDX-License-Identifier: MPL-2.0
//! Page viewer: the viewport core and its iced pane.
//!
//! ```text
//! component.rs (Viewport)
//!     ├── capture  - Host pointer capture
//!     ├── gutter   - Position indicator notifications
//!     ├── input    - Events fed by the host
//!     └── pane     - iced rendering and event translation
//! ```

pub mod capture;
pub mod component;
pub mod gutter;
pub mod input;
pub mod pane;

pub use capture::{CaptureFlag, PointerCapture};
pub use component::Viewport;
pub use gutter::{IndicatorRef, PositionIndicator, PositionTracker};
pub use input::{EventStatus, InputEvent, PointerEvent};
