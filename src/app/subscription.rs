// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Mouse events are taken from the window rather than the pane, so moves and
//! releases keep arriving while a drag leaves the page. This stands in for
//! pointer capture.

use super::Message;
use iced::{event, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse_event) => Some(Message::Mouse(mouse_event)),
        event::Event::Window(window::Event::Resized(size))
        | event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}
