// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the displayed bitmap inside a scrollable area with
//! a grab cursor, and translates iced events into viewport input.

use crate::image_handler::DisplayedBitmap;
use crate::ui::state::ViewState;
use crate::ui::viewer::input::{InputEvent, PointerEvent};
use iced::mouse;
use iced::widget::image::Handle;
use iced::widget::scrollable::{AbsoluteOffset, Direction, RelativeOffset, Scrollbar, Viewport};
use iced::widget::{mouse_area, operation, Container, Id, Image, Scrollable, Text};
use iced::{alignment, Element, Length, Point, Rectangle, Size, Task, Vector};

pub const SCROLLABLE_ID: &str = "page-lens-viewport";

#[derive(Debug, Clone)]
pub enum Message {
    /// The scrollable moved or changed its bounds.
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Primary button pressed over the page.
    PagePressed,
}

pub struct ViewModel<'a> {
    /// Handle of the displayed bitmap, `None` while no page is loaded.
    pub handle: Option<&'a Handle>,
    pub bitmap_size: Size<u32>,
    pub is_dragging: bool,
    pub empty_label: &'a str,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let Some(handle) = model.handle else {
        return Container::new(Text::new(model.empty_label))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();
    };

    let page = Image::new(handle.clone())
        .width(Length::Fixed(model.bitmap_size.width as f32))
        .height(Length::Fixed(model.bitmap_size.height as f32));

    let scrollable = Scrollable::new(page)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let cursor_interaction = if model.is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(scrollable)
        .on_press(Message::PagePressed)
        .interaction(cursor_interaction)
        .into()
}

/// Uploads a bitmap for rendering.
#[must_use]
pub fn image_handle(bitmap: &DisplayedBitmap) -> Handle {
    Handle::from_rgba(bitmap.width(), bitmap.height(), bitmap.to_rgba())
}

/// Moves the scrollable to the offset held by `view`.
pub fn scroll_task<T: Send + 'static>(view: &ViewState) -> Task<T> {
    let offset = view.offset();
    let max = view.max_offset();

    let relative = |offset: i32, max: i32| {
        if max > 0 {
            (offset as f32 / max as f32).clamp(0.0, 1.0)
        } else {
            0.0
        }
    };

    operation::snap_to(
        Id::new(SCROLLABLE_ID),
        RelativeOffset {
            x: relative(offset.x, max.x),
            y: relative(offset.y, max.y),
        },
    )
}

/// Scroll offset in whole device pixels.
#[must_use]
pub fn offset_from(offset: AbsoluteOffset) -> Vector<i32> {
    Vector {
        x: offset.x.round() as i32,
        y: offset.y.round() as i32,
    }
}

/// Size of the visible area in whole device pixels.
#[must_use]
pub fn size_from(bounds: Rectangle) -> Size<u32> {
    Size {
        width: bounds.width.max(0.0).round() as u32,
        height: bounds.height.max(0.0).round() as u32,
    }
}

/// Turns window-level mouse events into viewport input.
///
/// Presses are not translated here: they only count over the page and come in
/// as [`Message::PagePressed`], positioned at the last known cursor.
#[derive(Debug, Clone, Copy)]
pub struct PointerTracker {
    position: Point<i32>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            position: Point { x: 0, y: 0 },
        }
    }
}

impl PointerTracker {
    #[must_use]
    pub fn position(&self) -> Point<i32> {
        self.position
    }

    /// Primary press at the last known cursor position.
    #[must_use]
    pub fn press(&self) -> InputEvent {
        InputEvent::ButtonPressed(PointerEvent::primary_pressed(self.position))
    }

    pub fn translate(&mut self, event: &mouse::Event) -> Option<InputEvent> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.position = Point {
                    x: position.x.round() as i32,
                    y: position.y.round() as i32,
                };
                Some(InputEvent::PointerMoved(self.position))
            }
            mouse::Event::ButtonReleased(button) => Some(InputEvent::ButtonReleased(PointerEvent {
                position: self.position,
                button: *button,
                primary_down: false,
            })),
            // Leaving the window ends any drag, like a revoked capture would.
            mouse::Event::CursorLeft => Some(InputEvent::CaptureLost),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_moves_are_rounded_and_remembered() {
        let mut tracker = PointerTracker::default();
        let event = mouse::Event::CursorMoved {
            position: iced::Point::new(10.4, 20.6),
        };

        let input = tracker.translate(&event);
        assert_eq!(input, Some(InputEvent::PointerMoved(Point { x: 10, y: 21 })));
        assert_eq!(tracker.position(), Point { x: 10, y: 21 });
        assert_eq!(
            tracker.press(),
            InputEvent::ButtonPressed(PointerEvent::primary_pressed(Point { x: 10, y: 21 }))
        );
    }

    #[test]
    fn release_keeps_button_identity() {
        let mut tracker = PointerTracker::default();
        let input = tracker.translate(&mouse::Event::ButtonReleased(mouse::Button::Right));
        match input {
            Some(InputEvent::ButtonReleased(event)) => {
                assert_eq!(event.button, mouse::Button::Right);
                assert!(!event.primary_down);
            }
            other => panic!("unexpected translation: {other:?}"),
        }
    }

    #[test]
    fn cursor_left_maps_to_capture_lost() {
        let mut tracker = PointerTracker::default();
        assert_eq!(
            tracker.translate(&mouse::Event::CursorLeft),
            Some(InputEvent::CaptureLost)
        );
    }

    #[test]
    fn presses_are_not_translated() {
        let mut tracker = PointerTracker::default();
        assert!(tracker
            .translate(&mouse::Event::ButtonPressed(mouse::Button::Left))
            .is_none());
    }

    #[test]
    fn geometry_conversions_round() {
        assert_eq!(
            offset_from(AbsoluteOffset { x: 10.6, y: 0.2 }),
            Vector { x: 11, y: 0 }
        );
        let bounds = Rectangle::new(iced::Point::new(0.0, 0.0), iced::Size::new(640.4, 479.6));
        assert_eq!(
            size_from(bounds),
            Size {
                width: 640,
                height: 480
            }
        );
    }
}
