// SPDX-License-Identifier: MPL-2.0
//! Decoupled entry point for raising notifications.
//!
//! Code that holds an [`Emitter`] (typically cloned out of the store and moved
//! into an async task) sends notifications through it directly. Code that
//! cannot be handed one uses [`emit`], which forwards to the emitter registered
//! when the store was mounted. Emitting while nothing is registered is logged
//! and otherwise ignored.
//!
//! The channel between emitters and the store is created by [`subscription`],
//! which first hands the application a [`Message::Mounted`] carrying the
//! emitter and then forwards every received notification as
//! [`Message::Emitted`].

use super::notification::{Notification, Severity};
use super::store::Message;
use iced::futures::channel::mpsc::Sender;
use iced::futures::{SinkExt, Stream};
use iced::{stream, Subscription};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;

/// Capacity of the buffer between the emitter channel and the runtime.
const FORWARD_BUFFER: usize = 100;

/// The process-wide registration point, set on mount and cleared on shutdown.
static REGISTERED: Mutex<Option<Emitter>> = Mutex::new(None);

/// Cloneable handle that forwards notifications to the mounted store.
#[derive(Debug, Clone)]
pub struct Emitter {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Emitter {
    /// Creates an emitter together with the receiving end of its channel.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Sends a notification to the store.
    ///
    /// Returns `false` if the store side has gone away; the notification is
    /// dropped in that case.
    pub fn send(&self, notification: Notification) -> bool {
        match self.tx.send(notification) {
            Ok(()) => true,
            Err(mpsc::error::SendError(notification)) => {
                tracing::warn!(
                    title = notification.title(),
                    "notification store is gone, dropping notification"
                );
                false
            }
        }
    }

    /// Builds and sends a success notification.
    pub fn emit(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        duration: Option<Duration>,
    ) {
        self.send(build(Severity::Success, title, description, duration));
    }

    /// Returns whether the receiving side is still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Registers the emitter used by [`emit`] and [`send`].
///
/// Only one store is expected to be mounted; registering again replaces the
/// previous emitter.
pub fn register(emitter: Emitter) {
    let mut slot = REGISTERED.lock().unwrap_or_else(PoisonError::into_inner);
    if slot.replace(emitter).is_some() {
        tracing::warn!("notification emitter registered twice, replacing the previous one");
    }
}

/// Clears the registered emitter. Later calls to [`emit`] become no-ops.
pub fn unregister() {
    REGISTERED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
}

/// Returns whether a store is currently registered.
#[cfg(test)]
#[must_use]
pub fn is_registered() -> bool {
    REGISTERED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Forwards a notification to the registered store.
///
/// Returns whether the notification was delivered. Never fails: without a
/// registered store the condition is logged and the notification dropped.
pub fn send(notification: Notification) -> bool {
    let emitter = REGISTERED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    match emitter {
        Some(emitter) => emitter.send(notification),
        None => {
            tracing::warn!(
                title = notification.title(),
                "notification emitted without a mounted store"
            );
            false
        }
    }
}

/// Fire-and-forget shorthand for [`send`] with a success notification.
pub fn emit(title: impl Into<String>, description: Option<String>, duration: Option<Duration>) {
    send(build(Severity::Success, title, description, duration));
}

fn build(
    severity: Severity,
    title: impl Into<String>,
    description: Option<String>,
    duration: Option<Duration>,
) -> Notification {
    let mut notification = Notification::new(severity, title);
    if let Some(description) = description {
        notification = notification.description(description);
    }
    if let Some(duration) = duration {
        notification = notification.duration(duration);
    }
    notification
}

/// Stream backing [`subscription`]: announces the emitter, then forwards.
fn forward() -> impl Stream<Item = Message> {
    stream::channel(FORWARD_BUFFER, |mut output: Sender<Message>| async move {
        let (emitter, mut rx) = Emitter::channel();
        if output.send(Message::Mounted(emitter)).await.is_err() {
            return;
        }

        while let Some(notification) = rx.recv().await {
            if output.send(Message::Emitted(notification)).await.is_err() {
                break;
            }
        }
    })
}

/// Creates the subscription that connects emitters to the store.
pub fn subscription() -> Subscription<Message> {
    Subscription::run(forward)
}
