// SPDX-License-Identifier: MPL-2.0
//! User interface state and components.
//!
//! - [`state`] - Zoom, scroll and drag state with their clamping rules
//! - [`viewer`] - The viewport core and its iced pane

pub mod state;
pub mod viewer;
