// SPDX-License-Identifier: MPL-2.0
//! Demo host wiring a [`Viewport`] into an iced window.
//!
//! The host owns everything the core leaves to its container: it loads the
//! page, turns widget and window events into [`InputEvent`]s, pushes the core's
//! offset back into the scrollable while dragging, and shows the position
//! reported through a [`PositionTracker`].

pub mod message;
pub mod subscription;
pub mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, CHROME_HEIGHT, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::error::Result;
use crate::image_handler;
use crate::ui::viewer::{pane, CaptureFlag, EventStatus, InputEvent, PositionTracker, Viewport};
use iced::widget::image::Handle;
use iced::{window, Element, Size, Subscription, Task, Vector};
use image_rs::RgbImage;
use std::rc::Rc;
use std::sync::Arc;

/// Displayed pixels paired with the iced handle built from them.
struct Rendered {
    pixels: Arc<RgbImage>,
    handle: Handle,
}

/// Root application state.
pub struct App {
    viewport: Viewport,
    tracker: Rc<PositionTracker>,
    pointer: pane::PointerTracker,
    rendered: Option<Rendered>,
    title: String,
    zoom_step: f64,
    /// Best fit is deferred until the pane reports a usable size.
    fit_pending: bool,
    /// Offset last pushed into the scrollable by a drag, awaiting its echo.
    echo: Option<Vector<i32>>,
    error: Option<String>,
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load settings, using defaults");
            Config::default()
        });

        let mut viewport = Viewport::new(CaptureFlag::new()).with_filters(config.resample_filters());
        let tracker = Rc::new(PositionTracker::new());
        viewport.attach_indicator(&tracker);

        let mut title = String::from("PageLens");
        let mut error = None;
        let mut fit_pending = false;

        if let Some(path) = &flags.file_path {
            match image_handler::load_image(path) {
                Ok(image) => {
                    tracing::info!(
                        path = %path.display(),
                        width = image.width(),
                        height = image.height(),
                        "page loaded"
                    );
                    viewport.set_image(image);
                    if let Some(name) = path.file_name() {
                        title = format!("{} - PageLens", name.to_string_lossy());
                    }
                    match flags.zoom {
                        Some(factor) => {
                            if let Err(err) = viewport.set_zoom(factor) {
                                tracing::warn!(%err, "ignoring --zoom");
                                error = Some(err.to_string());
                            }
                        }
                        None => fit_pending = flags.fit.unwrap_or(config.fit_on_load()),
                    }
                }
                Err(err) => {
                    tracing::error!(path = %path.display(), %err, "failed to open page");
                    error = Some(err.to_string());
                }
            }
        }

        let mut app = Self {
            viewport,
            tracker,
            pointer: pane::PointerTracker::default(),
            rendered: None,
            title,
            zoom_step: config.zoom_step(),
            fit_pending,
            echo: None,
            error,
        };
        app.refresh_rendered();
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Pane(pane::Message::ViewportChanged { bounds, offset }) => {
                let size = pane::size_from(bounds);
                if size != self.viewport.view_state().viewport_size() {
                    self.resize_viewport(size);
                }
                self.follow_scrollable(pane::offset_from(offset));
                Task::none()
            }
            Message::Pane(pane::Message::PagePressed) => {
                self.viewport.handle(self.pointer.press());
                Task::none()
            }
            Message::Mouse(event) => match self.pointer.translate(&event) {
                Some(input) => {
                    let moved = matches!(input, InputEvent::PointerMoved(_));
                    let status = self.viewport.handle(input);
                    if moved && status == EventStatus::Handled {
                        let view = self.viewport.view_state();
                        self.echo = Some(view.clamp_to_content(view.offset()));
                        pane::scroll_task(view)
                    } else {
                        Task::none()
                    }
                }
                None => Task::none(),
            },
            Message::WindowResized(size) => {
                // The pane reports its exact bounds on scroll; this estimate only
                // unblocks a pending fit before the first scroll event.
                if self.fit_pending {
                    self.resize_viewport(Size {
                        width: size.width.max(0.0) as u32,
                        height: (size.height.max(0.0) as u32).saturating_sub(CHROME_HEIGHT),
                    });
                }
                pane::scroll_task(self.viewport.view_state())
            }
            Message::FitToWindow => {
                let result = self.viewport.set_best_fit_zoom();
                self.report(result);
                pane::scroll_task(self.viewport.view_state())
            }
            Message::ActualSize => {
                let result = self.viewport.set_zoom(1.0);
                self.report(result);
                pane::scroll_task(self.viewport.view_state())
            }
            Message::ZoomIn => {
                let next = self.viewport.zoom().zoom_in(self.zoom_step);
                let result = self.viewport.set_zoom(next.value());
                self.report(result);
                pane::scroll_task(self.viewport.view_state())
            }
            Message::ZoomOut => {
                let next = self.viewport.zoom().zoom_out(self.zoom_step);
                let result = self.viewport.set_zoom(next.value());
                self.report(result);
                pane::scroll_task(self.viewport.view_state())
            }
        };
        self.refresh_rendered();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            viewport: &self.viewport,
            handle: self.rendered.as_ref().map(|rendered| &rendered.handle),
            tracker: &self.tracker,
            error: self.error.as_deref(),
        })
    }

    /// Records a scroll reported by the scrollable.
    ///
    /// While dragging the core owns the offset and the scrollable only follows
    /// it, so reports are ignored. The echo of the last pushed offset is ignored
    /// too: it is clamped to the scrollable range and would undo a drag past it.
    fn follow_scrollable(&mut self, offset: Vector<i32>) {
        if self.viewport.is_dragging() {
            return;
        }
        match self.echo.take() {
            Some(expected) if is_echo(expected, offset) => {}
            _ => {
                self.viewport.handle(InputEvent::Scrolled(offset));
            }
        }
    }

    fn resize_viewport(&mut self, size: Size<u32>) {
        self.viewport.handle(InputEvent::Resized(size));
        if self.fit_pending && size.width > 0 && size.height > 0 {
            self.fit_pending = false;
            let result = self.viewport.set_best_fit_zoom();
            self.report(result);
        }
    }

    fn report(&mut self, result: Result<()>) {
        match result {
            Ok(()) => self.error = None,
            Err(err) => {
                tracing::warn!(%err, "zoom request rejected");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Rebuilds the image handle only when the displayed pixels changed.
    fn refresh_rendered(&mut self) {
        let bitmap = self.viewport.bitmap();
        if bitmap.width() == 0 || bitmap.height() == 0 {
            self.rendered = None;
            return;
        }
        let stale = self
            .rendered
            .as_ref()
            .is_none_or(|rendered| !Arc::ptr_eq(&rendered.pixels, bitmap.pixels()));
        if stale {
            self.rendered = Some(Rendered {
                pixels: Arc::clone(bitmap.pixels()),
                handle: pane::image_handle(bitmap),
            });
        }
    }
}

/// Scrollable offsets come back as floats, so allow a pixel of rounding.
fn is_echo(expected: Vector<i32>, reported: Vector<i32>) -> bool {
    expected.x.abs_diff(reported.x) <= 1 && expected.y.abs_diff(reported.y) <= 1
}
