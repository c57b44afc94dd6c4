// SPDX-License-Identifier: MPL-2.0
//! `page_lens` is a scrollable, zoomable viewport for rendered document pages.
//!
//! The [`ui::viewer::Viewport`] core owns the source image, the zoom factor, the
//! scroll position and the drag state. Hosts feed it input through
//! [`ui::viewer::InputEvent`]s and may attach a [`ui::viewer::PositionIndicator`]
//! that is kept in sync with the visible window.

#![doc(html_root_url = "https://docs.rs/page_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod image_handler;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
