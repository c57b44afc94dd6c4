// SPDX-License-Identifier: MPL-2.0
//! Input events the hosting environment feeds into the viewport.

use iced::mouse;
use iced::{Point, Size, Vector};

/// Button press or release over the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in device pixels.
    pub position: Point<i32>,
    /// Button that changed state.
    pub button: mouse::Button,
    /// Whether the primary button is reported as held after this event.
    pub primary_down: bool,
}

impl PointerEvent {
    /// Primary button going down at `position`.
    #[must_use]
    pub fn primary_pressed(position: Point<i32>) -> Self {
        Self {
            position,
            button: mouse::Button::Left,
            primary_down: true,
        }
    }

    /// Primary button going up at `position`.
    #[must_use]
    pub fn primary_released(position: Point<i32>) -> Self {
        Self {
            position,
            button: mouse::Button::Left,
            primary_down: false,
        }
    }

    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.button == mouse::Button::Left
    }
}

/// Everything the viewport reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    ButtonPressed(PointerEvent),
    ButtonReleased(PointerEvent),
    PointerMoved(Point<i32>),
    /// Pointer capture was revoked from outside.
    CaptureLost,
    /// Scrollbars moved the view to a new offset.
    Scrolled(Vector<i32>),
    /// The visible area changed size.
    Resized(Size<u32>),
}

/// What the host should do with an event after the viewport saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The viewport consumed the event.
    Handled,
    /// Continue with the host's default handling.
    Forwarded,
}
