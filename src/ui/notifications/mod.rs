// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to confirm completed actions (owner
//! added, payment refunded, ...) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`store`] - `Store` owning the visible notifications and their expiry timers
//! - [`emitter`] - `Emitter` handle and process-wide `emit` entry point
//! - [`toast`] - Toast widget rendering the store and forwarding dismissals
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{self, Notification, Store};
//!
//! let mut store = Store::new();
//!
//! // The returned task arms the expiry timer and must reach the runtime.
//! let (_id, task) = store.add(Notification::success("Owner deleted"));
//! let task = task.map(Message::Notification);
//!
//! // Anywhere else, once the store is mounted:
//! notifications::emit("Payment refunded", None, None);
//!
//! // In your view function, render toasts
//! let overlay = Toast::view_overlay(&store).map(Message::Notification);
//! ```

mod emitter;
mod notification;
mod store;
mod toast;

pub use emitter::{emit, send, subscription, Emitter};
pub use notification::{Notification, NotificationId, Severity, DEFAULT_DURATION};
pub use store::{expiry, Message as NotificationMessage, Store};
pub use toast::Toast;
