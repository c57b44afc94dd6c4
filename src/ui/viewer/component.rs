// SPDX-License-Identifier: MPL-2.0
//! Viewport core: source image, zoom, scroll position and drag-to-pan.
//!
//! The viewport is driven entirely through method calls, so it runs the same
//! under a real window and in tests. Every change of the visible window is
//! reported to the attached [`PositionIndicator`].

use crate::config::ResampleFilters;
use crate::error::{Result, ZoomError};
use crate::image_handler::transform::{self, ResampleQuality};
use crate::image_handler::{BgrxSurface, DisplayedBitmap};
use crate::ui::state::{DragState, ViewState, ZoomFactor};
use crate::ui::viewer::capture::PointerCapture;
use crate::ui::viewer::gutter::{IndicatorRef, PositionIndicator};
use crate::ui::viewer::input::{EventStatus, InputEvent, PointerEvent};
use image_rs::RgbImage;
use iced::{Point, Size, Vector};
use std::rc::{Rc, Weak};
use std::sync::Arc;

pub struct Viewport {
    host: Box<dyn PointerCapture>,
    source: Arc<RgbImage>,
    bitmap: DisplayedBitmap,
    zoom: ZoomFactor,
    view: ViewState,
    drag: DragState,
    gutter: Option<IndicatorRef>,
    filters: ResampleFilters,
}

impl Viewport {
    /// Binds a viewport to its hosting window, starting at 100% zoom with an
    /// empty image, idle drag state and no indicator.
    pub fn new(host: impl PointerCapture + 'static) -> Self {
        let source = Arc::new(RgbImage::new(0, 0));
        Self {
            host: Box::new(host),
            bitmap: DisplayedBitmap::unscaled(&source),
            source,
            zoom: ZoomFactor::default(),
            view: ViewState::default(),
            drag: DragState::default(),
            gutter: None,
            filters: ResampleFilters::default(),
        }
    }

    /// Uses `filters` for later resampling.
    #[must_use]
    pub fn with_filters(mut self, filters: ResampleFilters) -> Self {
        self.filters = filters;
        self
    }

    // ----------------------------------------------------------------------
    // Content and zoom
    // ----------------------------------------------------------------------

    /// Replaces the source image and renders it at the current zoom.
    ///
    /// Falls back to native size when the current zoom would make the new
    /// image too large to resample.
    pub fn set_image(&mut self, image: RgbImage) {
        self.source = Arc::new(image);
        if let Err(err) = self.check_target(self.zoom) {
            tracing::warn!(%err, "resetting zoom for the new image");
            self.zoom = ZoomFactor::default();
        }
        self.update_bitmap();
    }

    /// Converts a BGRx surface and replaces the source image with it.
    pub fn set_surface(&mut self, surface: &BgrxSurface<'_>) {
        self.set_image(surface.to_rgb());
    }

    /// Sets the zoom factor and renders the source image again.
    ///
    /// # Errors
    ///
    /// Fails without touching any state if `factor` is not positive and finite,
    /// or if the zoomed bitmap would be too large to allocate.
    pub fn set_zoom(&mut self, factor: f64) -> Result<()> {
        let zoom = ZoomFactor::new(factor)?;
        self.check_target(zoom)?;
        self.zoom = zoom;
        self.update_bitmap();
        Ok(())
    }

    /// Zooms to the largest factor that shows the whole page without scrollbars.
    ///
    /// # Errors
    ///
    /// Fails if no non-empty image was set or the viewport has no area yet.
    pub fn set_best_fit_zoom(&mut self) -> Result<()> {
        let image = Size {
            width: self.source.width(),
            height: self.source.height(),
        };
        let factor = ZoomFactor::best_fit(self.view.viewport_size(), image)?;
        self.set_zoom(factor.value())
    }

    fn check_target(&self, zoom: ZoomFactor) -> std::result::Result<(), ZoomError> {
        let (width, height) =
            transform::scaled_dimensions(self.source.width(), self.source.height(), zoom.value());
        // Native size shares the source and allocates nothing.
        if (width, height) == self.source.dimensions() {
            return Ok(());
        }
        transform::check_bitmap_size(width, height)
    }

    fn update_bitmap(&mut self) {
        let factor = self.zoom.value();
        let (width, height) =
            transform::scaled_dimensions(self.source.width(), self.source.height(), factor);

        self.bitmap = if (width, height) == self.source.dimensions() {
            DisplayedBitmap::unscaled(&self.source)
        } else {
            let quality = ResampleQuality::for_factor(factor);
            let filter = quality.filter(&self.filters);
            let pixels = transform::rescale(&self.source, width, height, filter);
            DisplayedBitmap::resampled(pixels, quality)
        };

        tracing::debug!(
            factor,
            width,
            height,
            quality = ?self.bitmap.quality(),
            "bitmap updated"
        );

        self.view.set_virtual_size(Size {
            width: self.bitmap.width(),
            height: self.bitmap.height(),
        });
        self.notify_gutter();
    }

    // ----------------------------------------------------------------------
    // Position indicator
    // ----------------------------------------------------------------------

    /// Sets or clears the position indicator. A new indicator is notified
    /// right away so it starts in sync.
    pub fn attach_gutter(&mut self, indicator: Option<IndicatorRef>) {
        self.gutter = indicator;
        if self.gutter.is_some() {
            self.notify_gutter();
        }
    }

    /// Attaches an indicator owned elsewhere through an `Rc`.
    pub fn attach_indicator<I: PositionIndicator + 'static>(&mut self, indicator: &Rc<I>) {
        let weak: Weak<I> = Rc::downgrade(indicator);
        self.attach_gutter(Some(weak));
    }

    fn notify_gutter(&mut self) {
        let Some(gutter) = &self.gutter else {
            return;
        };

        match gutter.upgrade() {
            Some(indicator) => indicator.update_view_pos(&self.view),
            None => {
                tracing::warn!("position indicator was dropped while attached, detaching");
                self.gutter = None;
            }
        }
    }

    // ----------------------------------------------------------------------
    // Input
    // ----------------------------------------------------------------------

    /// Routes an event to the matching handler.
    pub fn handle(&mut self, event: InputEvent) -> EventStatus {
        match event {
            InputEvent::ButtonPressed(pointer) => self.on_primary_down(&pointer),
            InputEvent::ButtonReleased(pointer) => self.on_primary_up(&pointer),
            InputEvent::PointerMoved(position) => self.on_pointer_move(position),
            InputEvent::CaptureLost => self.on_capture_lost(),
            InputEvent::Scrolled(offset) => self.on_scroll(offset),
            InputEvent::Resized(size) => self.on_resize(size),
        }
    }

    /// Starts dragging on a primary-button press.
    pub fn on_primary_down(&mut self, event: &PointerEvent) -> EventStatus {
        // Only start dragging when the primary button is really held.
        if !event.is_primary() || !event.primary_down {
            return EventStatus::Forwarded;
        }

        self.drag.start(event.position);
        if !self.host.has_capture() {
            self.host.capture();
        }
        tracing::trace!(x = event.position.x, y = event.position.y, "drag started");

        EventStatus::Handled
    }

    /// Ends dragging on a primary-button release.
    pub fn on_primary_up(&mut self, event: &PointerEvent) -> EventStatus {
        if !event.is_primary() {
            return EventStatus::Forwarded;
        }

        self.stop_drag();
        EventStatus::Handled
    }

    /// Pans the view by the pointer travel while dragging.
    pub fn on_pointer_move(&mut self, position: Point<i32>) -> EventStatus {
        let Some(delta) = self.drag.advance(position) else {
            return EventStatus::Forwarded;
        };

        let origin = self.view.offset();
        self.view.drag_to(Vector {
            x: origin.x.saturating_sub(delta.x),
            y: origin.y.saturating_sub(delta.y),
        });
        self.notify_gutter();

        EventStatus::Handled
    }

    /// Abandons the drag after the capture was revoked from outside.
    pub fn on_capture_lost(&mut self) -> EventStatus {
        self.stop_drag();
        EventStatus::Forwarded
    }

    /// Records a scrollbar-driven scroll.
    pub fn on_scroll(&mut self, offset: Vector<i32>) -> EventStatus {
        self.view.scroll_to(offset);
        self.notify_gutter();
        EventStatus::Forwarded
    }

    /// Records a new size of the visible area.
    pub fn on_resize(&mut self, size: Size<u32>) -> EventStatus {
        self.view.set_viewport_size(size);
        self.notify_gutter();
        EventStatus::Forwarded
    }

    fn stop_drag(&mut self) {
        if self.drag.is_dragging() {
            tracing::trace!("drag stopped");
        }
        self.drag.stop();
        if self.host.has_capture() {
            self.host.release();
        }
    }

    // ----------------------------------------------------------------------
    // Accessors
    // ----------------------------------------------------------------------

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn has_capture(&self) -> bool {
        self.host.has_capture()
    }

    /// The unscaled source image.
    #[must_use]
    pub fn source(&self) -> &Arc<RgbImage> {
        &self.source
    }

    /// The source image rendered at the current zoom.
    #[must_use]
    pub fn bitmap(&self) -> &DisplayedBitmap {
        &self.bitmap
    }

    #[must_use]
    pub fn filters(&self) -> ResampleFilters {
        self.filters
    }
}
