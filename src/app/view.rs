// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::state::zoom::format_percent;
use crate::ui::viewer::{pane, PositionTracker, Viewport};
use iced::widget::image::Handle;
use iced::widget::{button, column, row, text, Container};
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub viewport: &'a Viewport,
    pub handle: Option<&'a Handle>,
    pub tracker: &'a PositionTracker,
    pub error: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar = row![
        button(text("Fit")).on_press(Message::FitToWindow),
        button(text("100%")).on_press(Message::ActualSize),
        button(text("-")).on_press(Message::ZoomOut),
        text(format_percent(ctx.viewport.zoom())),
        button(text("+")).on_press(Message::ZoomIn),
    ]
    .spacing(10)
    .padding(10);

    let bitmap = ctx.viewport.bitmap();
    let pane = pane::view(pane::ViewModel {
        handle: ctx.handle,
        bitmap_size: Size {
            width: bitmap.width(),
            height: bitmap.height(),
        },
        is_dragging: ctx.viewport.is_dragging(),
        empty_label: "No page loaded. Pass an image path on the command line.",
    })
    .map(Message::Pane);

    let status = match (ctx.error, ctx.tracker.scroll_percentage()) {
        (Some(error), _) => error.to_string(),
        (None, Some((x, y))) => format!("Scrolled {x:.0}% horizontally, {y:.0}% vertically"),
        (None, None) => "Whole page visible".to_string(),
    };

    Container::new(column![
        toolbar,
        Container::new(pane).width(Length::Fill).height(Length::Fill),
        Container::new(text(status)).padding(10),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
