// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Handles the scrollable viewport state: the scroll offset, the size of the
//! visible area and the size of the virtual (scrollable) content.

use iced::{Size, Vector};

/// Scroll and extent record of the viewport.
///
/// Read freely; only the viewer mutates it, so the clamping rules below hold
/// after every operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    offset: Vector<i32>,
    viewport_size: Size<u32>,
    virtual_size: Size<u32>,
}

/// Visible window relative to the virtual content, all values in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            offset: Vector { x: 0, y: 0 },
            viewport_size: Size {
                width: 0,
                height: 0,
            },
            virtual_size: Size {
                width: 0,
                height: 0,
            },
        }
    }
}

fn extent(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl ViewState {
    /// Current scroll offset in device pixels.
    #[must_use]
    pub fn offset(&self) -> Vector<i32> {
        self.offset
    }

    /// Size of the visible area in device pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size<u32> {
        self.viewport_size
    }

    /// Size of the scrollable content (the displayed bitmap).
    #[must_use]
    pub fn virtual_size(&self) -> Size<u32> {
        self.virtual_size
    }

    /// Largest offset that still keeps the viewport inside the content.
    #[must_use]
    pub fn max_offset(&self) -> Vector<i32> {
        Vector {
            x: extent(self.virtual_size.width.saturating_sub(self.viewport_size.width)),
            y: extent(
                self.virtual_size
                    .height
                    .saturating_sub(self.viewport_size.height),
            ),
        }
    }

    /// Whether the content fits without scrolling.
    #[must_use]
    pub fn content_fits(&self) -> bool {
        self.virtual_size.width <= self.viewport_size.width
            && self.virtual_size.height <= self.viewport_size.height
    }

    pub(crate) fn set_virtual_size(&mut self, size: Size<u32>) {
        self.virtual_size = size;
        self.offset = self.clamp_to_content(self.offset);
    }

    pub(crate) fn set_viewport_size(&mut self, size: Size<u32>) {
        self.viewport_size = size;
        self.offset = self.clamp_to_content(self.offset);
    }

    /// Applies a scroll position reported by the host's scrollbars.
    pub(crate) fn scroll_to(&mut self, offset: Vector<i32>) {
        self.offset = self.clamp_to_content(offset);
    }

    /// Applies a drag-driven scroll position.
    ///
    /// Bounded by the full virtual extent rather than `virtual - viewport`, so
    /// a drag may leave the offset up to one viewport past the content end.
    pub(crate) fn drag_to(&mut self, offset: Vector<i32>) {
        self.offset = self.clamp_for_drag(offset);
    }

    /// Clamps each axis to `[0, virtual - viewport]`.
    #[must_use]
    pub fn clamp_to_content(&self, offset: Vector<i32>) -> Vector<i32> {
        let max = self.max_offset();
        Vector {
            x: offset.x.clamp(0, max.x),
            y: offset.y.clamp(0, max.y),
        }
    }

    /// Clamps each axis to `[0, virtual]`.
    #[must_use]
    pub fn clamp_for_drag(&self, offset: Vector<i32>) -> Vector<i32> {
        Vector {
            x: offset.x.clamp(0, extent(self.virtual_size.width)),
            y: offset.y.clamp(0, extent(self.virtual_size.height)),
        }
    }

    /// Visible window as fractions of the content, or `None` without content.
    #[must_use]
    pub fn visible_region(&self) -> Option<VisibleRegion> {
        if self.virtual_size.width == 0 || self.virtual_size.height == 0 {
            return None;
        }

        let total_w = self.virtual_size.width as f32;
        let total_h = self.virtual_size.height as f32;
        let x = (self.offset.x as f32 / total_w).clamp(0.0, 1.0);
        let y = (self.offset.y as f32 / total_h).clamp(0.0, 1.0);

        Some(VisibleRegion {
            x,
            y,
            width: (self.viewport_size.width as f32 / total_w).min(1.0 - x),
            height: (self.viewport_size.height as f32 / total_h).min(1.0 - y),
        })
    }

    /// Calculates the scroll position as percentage (0-100%)
    #[must_use]
    pub fn scroll_position_percentage(&self) -> Option<(f32, f32)> {
        // If content is smaller than viewport, no scrolling needed
        if self.content_fits() {
            return None;
        }

        let max = self.max_offset();
        let percent = |offset: i32, max: i32| {
            if max > 0 {
                (offset as f32 / max as f32 * 100.0).min(100.0)
            } else {
                0.0
            }
        };

        Some((percent(self.offset.x, max.x), percent(self.offset.y, max.y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn state(viewport: (u32, u32), content: (u32, u32)) -> ViewState {
        let mut state = ViewState::default();
        state.set_viewport_size(Size {
            width: viewport.0,
            height: viewport.1,
        });
        state.set_virtual_size(Size {
            width: content.0,
            height: content.1,
        });
        state
    }

    fn vector(x: i32, y: i32) -> Vector<i32> {
        Vector { x, y }
    }

    #[test]
    fn default_view_has_zero_offset() {
        let state = ViewState::default();
        assert_eq!(state.offset(), vector(0, 0));
        assert!(state.content_fits());
    }

    #[test]
    fn scroll_to_clamps_to_content_range() {
        let mut state = state((400, 300), (1000, 500));
        state.scroll_to(vector(900, -5));
        assert_eq!(state.offset(), vector(600, 0));
    }

    #[test]
    fn drag_to_allows_full_virtual_extent() {
        let mut state = state((400, 300), (1000, 500));
        state.drag_to(vector(900, 2000));
        assert_eq!(state.offset(), vector(900, 500));

        state.drag_to(vector(-50, -1));
        assert_eq!(state.offset(), vector(0, 0));
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut state = state((400, 300), (1000, 500));
        state.scroll_to(vector(600, 200));
        state.set_virtual_size(Size {
            width: 500,
            height: 250,
        });
        assert_eq!(state.offset(), vector(100, 0));
    }

    #[test]
    fn growing_viewport_pulls_offset_back() {
        let mut state = state((400, 300), (1000, 500));
        state.scroll_to(vector(600, 200));
        state.set_viewport_size(Size {
            width: 900,
            height: 500,
        });
        assert_eq!(state.offset(), vector(100, 0));
    }

    #[test]
    fn visible_region_is_relative() {
        let mut state = state((250, 100), (1000, 500));
        state.scroll_to(vector(500, 100));
        let region = state.visible_region().expect("content present");
        assert_abs_diff_eq!(region.x, 0.5);
        assert_abs_diff_eq!(region.y, 0.2);
        assert_abs_diff_eq!(region.width, 0.25);
        assert_abs_diff_eq!(region.height, 0.2);
    }

    #[test]
    fn visible_region_is_none_without_content() {
        assert!(ViewState::default().visible_region().is_none());
    }

    #[test]
    fn scroll_percentage_returns_none_when_content_fits() {
        let state = state((800, 600), (400, 300));
        assert!(state.scroll_position_percentage().is_none());
    }

    #[test]
    fn scroll_percentage_calculates_correctly() {
        // Content 800x600, viewport 400x300, max offset 400x300
        let mut state = state((400, 300), (800, 600));
        state.scroll_to(vector(200, 150));
        assert_eq!(state.scroll_position_percentage(), Some((50.0, 50.0)));
    }
}
