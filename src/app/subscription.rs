// SPDX-License-Identifier: MPL-2.0
//! Event subscription for the application.
//!
//! Keyboard events that no widget captured are routed into the update
//! loop; the search field keeps its own keystrokes, so lightbox
//! shortcuts never fire while typing a query.

use super::Message;
use iced::{event, keyboard, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed(key)),
        _ => None,
    })
}
