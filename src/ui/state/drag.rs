// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles click-and-drag interaction state for panning through pages.

use iced::{Point, Vector};

/// Tracks whether the primary button is dragging the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer position of the previous press or move event.
        last_position: Point<i32>,
    },
}

impl DragState {
    /// Starts a drag operation at `position`.
    pub fn start(&mut self, position: Point<i32>) {
        *self = Self::Dragging {
            last_position: position,
        };
    }

    /// Stops the drag operation.
    pub fn stop(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Records a pointer move and returns how far the pointer travelled since
    /// the previous event, or `None` when idle.
    pub fn advance(&mut self, position: Point<i32>) -> Option<Vector<i32>> {
        match self {
            Self::Idle => None,
            Self::Dragging { last_position } => {
                let delta = Vector {
                    x: position.x.saturating_sub(last_position.x),
                    y: position.y.saturating_sub(last_position.y),
                };
                *last_position = position;
                Some(delta)
            }
        }
    }
}
