// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::viewer::pane;
use iced::mouse;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Pane(pane::Message),
    /// Window-level mouse event, delivered whatever widget is hovered.
    Mouse(mouse::Event),
    WindowResized(iced::Size),
    FitToWindow,
    ActualSize,
    ZoomIn,
    ZoomOut,
}

/// Runtime flags passed into the application from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Page image to open at startup.
    pub file_path: Option<PathBuf>,
    /// Initial zoom factor, overrides fitting.
    pub zoom: Option<f64>,
    /// Overrides `fit_on_load` from the settings file.
    pub fit: Option<bool>,
}
