// SPDX-License-Identifier: MPL-2.0
//! Position indicators kept in sync with the viewport's visible window.
//!
//! The viewport only holds a [`Weak`] reference to its indicator: whoever
//! created the indicator decides how long it lives.

use crate::ui::state::{ViewState, VisibleRegion};
use std::cell::Cell;
use std::rc::Weak;

/// Collaborator showing where the visible window sits in the whole page
/// (a minimap, a thumbnail gutter, a scroll position label...).
pub trait PositionIndicator {
    /// Called synchronously after every change of the visible window.
    fn update_view_pos(&self, view: &ViewState);
}

/// Non-owning handle to an indicator.
pub type IndicatorRef = Weak<dyn PositionIndicator>;

/// Indicator that remembers the latest visible window.
#[derive(Debug, Default)]
pub struct PositionTracker {
    region: Cell<Option<VisibleRegion>>,
    scroll_percentage: Cell<Option<(f32, f32)>>,
    updates: Cell<usize>,
}

impl PositionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible window relative to the content, `None` without content.
    #[must_use]
    pub fn region(&self) -> Option<VisibleRegion> {
        self.region.get()
    }

    /// Scroll position as percentages, `None` when the content fits.
    #[must_use]
    pub fn scroll_percentage(&self) -> Option<(f32, f32)> {
        self.scroll_percentage.get()
    }

    /// Number of notifications received so far.
    #[must_use]
    pub fn updates(&self) -> usize {
        self.updates.get()
    }
}

impl PositionIndicator for PositionTracker {
    fn update_view_pos(&self, view: &ViewState) {
        self.region.set(view.visible_region());
        self.scroll_percentage.set(view.scroll_position_percentage());
        self.updates.set(self.updates.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_starts_empty() {
        let tracker = PositionTracker::new();
        assert_eq!(tracker.updates(), 0);
        assert!(tracker.region().is_none());
        assert!(tracker.scroll_percentage().is_none());
    }

    #[test]
    fn tracker_counts_updates() {
        let tracker = PositionTracker::new();
        let view = ViewState::default();
        tracker.update_view_pos(&view);
        tracker.update_view_pos(&view);
        assert_eq!(tracker.updates(), 2);
    }
}
