// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::notifications;
use iced::{event, window, Subscription};

/// Turns window close requests into [`Message::WindowCloseRequested`] so the
/// notification store can be unmounted before the window goes away.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Channel feeding [`notifications::emit`] calls into the store.
pub fn create_notification_subscription() -> Subscription<Message> {
    notifications::subscription().map(Message::Notification)
}
