// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Store` owns the ordered list of visible notifications. Every entry
//! carries the handle of its own expiry timer, so removing an entry cancels
//! the timer before the entry is discarded.

use super::emitter::{self, Emitter};
use super::notification::{Notification, NotificationId, DEFAULT_DURATION};
use iced::task::{self, Task};
use std::fmt;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user dismissed a toast.
    Dismiss(NotificationId),
    /// The expiry timer of a notification fired.
    Expired(NotificationId),
    /// The emitter channel is up and ready to forward notifications.
    Mounted(Emitter),
    /// A notification arrived through the emitter channel.
    Emitted(Notification),
}

/// A visible notification together with its armed expiry timer.
struct Entry {
    notification: Notification,
    timer: task::Handle,
}

/// Owns the currently visible notifications, oldest first.
pub struct Store {
    entries: Vec<Entry>,
    default_duration: Duration,
    emitter: Option<Emitter>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("visible", &self.entries.len())
            .field("default_duration", &self.default_duration)
            .field("mounted", &self.emitter.is_some())
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves with `id` once `after` has elapsed.
///
/// This is the deferred half of every notification: the store wraps it in an
/// abortable task and keeps the abort handle next to the entry.
pub async fn expiry(id: NotificationId, after: Duration) -> NotificationId {
    tokio::time::sleep(after).await;
    id
}

impl Store {
    /// Creates an empty store using the standard three second lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_duration(DEFAULT_DURATION)
    }

    /// Creates an empty store whose notifications live for `duration` unless
    /// they request otherwise.
    #[must_use]
    pub fn with_default_duration(duration: Duration) -> Self {
        Self {
            entries: Vec::new(),
            default_duration: duration,
            emitter: None,
        }
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    pub fn set_default_duration(&mut self, duration: Duration) {
        self.default_duration = duration;
    }

    /// Appends a notification and arms its expiry timer.
    ///
    /// The returned task resolves to [`Message::Expired`] and must be handed
    /// back to the runtime for the notification to expire. Adding a
    /// notification whose id is already visible changes nothing.
    pub fn add(&mut self, mut notification: Notification) -> (NotificationId, Task<Message>) {
        let id = notification.id();
        if self.contains(id) {
            tracing::debug!(?id, "notification already visible");
            return (id, Task::none());
        }

        let ttl = notification.resolve_duration(self.default_duration);
        let (task, timer) = Task::perform(expiry(id, ttl), Message::Expired).abortable();
        tracing::debug!(?id, title = notification.title(), ?ttl, "notification added");
        self.entries.push(Entry {
            notification,
            timer,
        });

        (id, task)
    }

    /// Removes a notification and cancels its timer.
    ///
    /// Returns `false` when the id is not visible; this is expected when a
    /// dismissal races the expiry.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };

        let entry = self.entries.remove(pos);
        entry.timer.abort();
        tracing::debug!(?id, "notification removed");
        true
    }

    /// Returns the visible notifications in display order.
    pub fn list(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every notification, cancelling all timers.
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            entry.timer.abort();
        }
    }

    /// Returns the emitter handed over by the mounted channel, if any.
    #[must_use]
    pub fn emitter(&self) -> Option<&Emitter> {
        self.emitter.as_ref()
    }

    /// Makes this store the target of [`emitter::emit`].
    pub fn mount(&mut self, emitter: Emitter) {
        emitter::register(emitter.clone());
        self.emitter = Some(emitter);
    }

    /// Detaches this store from the global emitter and drops all notifications.
    pub fn unmount(&mut self) {
        if self.emitter.take().is_some() {
            emitter::unregister();
        }
        self.clear();
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Dismiss(id) => {
                // Dismissals come from rendered toasts; anything else is stale.
                if self.contains(id) {
                    self.remove(id);
                } else {
                    tracing::debug!(?id, "ignoring dismissal of unlisted notification");
                }
                Task::none()
            }
            Message::Expired(id) => {
                self.remove(id);
                Task::none()
            }
            Message::Mounted(emitter) => {
                self.mount(emitter);
                Task::none()
            }
            Message::Emitted(notification) => self.add(notification).1,
        }
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.notification.id() == id)
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    fn titles(store: &Store) -> Vec<&str> {
        store.list().map(Notification::title).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.default_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = Store::new();
        for title in ["first", "second", "third", "fourth"] {
            store.add(Notification::success(title));
        }

        assert_eq!(titles(&store), ["first", "second", "third", "fourth"]);
    }

    #[test]
    fn removing_first_keeps_the_rest_in_order() {
        let mut store = Store::new();
        let (a, _) = store.add(Notification::success("A"));
        store.add(Notification::success("B"));

        assert!(store.remove(a));
        assert_eq!(titles(&store), ["B"]);
    }

    #[test]
    fn removing_from_the_middle_preserves_relative_order() {
        let mut store = Store::new();
        store.add(Notification::info("A"));
        let (b, _) = store.add(Notification::info("B"));
        store.add(Notification::info("C"));

        store.remove(b);
        assert_eq!(titles(&store), ["A", "C"]);
    }

    #[test]
    fn remove_twice_is_idempotent() {
        let mut store = Store::new();
        let (id, _) = store.add(Notification::success("test"));

        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_unknown_id_returns_false() {
        let mut store = Store::new();
        store.add(Notification::success("kept"));
        let stranger = Notification::success("never added").id();

        assert!(!store.remove(stranger));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn expired_after_manual_removal_is_a_no_op() {
        let mut store = Store::new();
        let (id, _) = store.add(Notification::success("gone"));
        store.add(Notification::success("still here"));

        store.remove(id);
        let _ = store.handle_message(Message::Expired(id));

        assert_eq!(titles(&store), ["still here"]);
    }

    #[test]
    fn dismiss_of_unlisted_notification_is_ignored() {
        let mut store = Store::new();
        store.add(Notification::success("kept"));

        let _ = store.handle_message(Message::Dismiss(NotificationId::new()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn dismiss_removes_listed_notification() {
        let mut store = Store::new();
        let (id, _) = store.add(Notification::success("bye"));

        let _ = store.handle_message(Message::Dismiss(id));
        assert!(!store.contains(id));
    }

    #[test]
    fn adding_the_same_notification_twice_keeps_one_entry() {
        let mut store = Store::new();
        let notification = Notification::success("once");
        store.add(notification.clone());
        store.add(notification);

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_default_applies_only_without_explicit_duration() {
        let mut store = Store::with_default_duration(Duration::from_secs(7));
        store.add(Notification::success("default"));
        store.add(Notification::success("custom").duration(Duration::from_secs(1)));

        let ttls: Vec<Duration> = store.list().map(Notification::ttl).collect();
        assert_eq!(ttls, [Duration::from_secs(7), Duration::from_secs(1)]);
    }

    #[test]
    fn emitted_messages_are_added() {
        let mut store = Store::new();
        let _ = store.handle_message(Message::Emitted(Notification::info("from afar")));

        assert_eq!(titles(&store), ["from afar"]);
    }

    #[test]
    fn clear_removes_all() {
        let mut store = Store::new();
        for i in 0..5 {
            store.add(Notification::success(format!("test-{i}")));
        }

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn remove_and_clear_abort_armed_timers() {
        let mut store = Store::new();
        let (a, _) = store.add(Notification::success("A"));
        store.add(Notification::success("B"));
        store.add(Notification::success("C"));

        let timers: Vec<task::Handle> = store.entries.iter().map(|e| e.timer.clone()).collect();
        assert!(timers.iter().all(|timer| !timer.is_aborted()));

        store.remove(a);
        assert!(timers[0].is_aborted());
        assert!(!timers[1].is_aborted());
        assert!(!timers[2].is_aborted());

        store.clear();
        assert!(timers.iter().all(task::Handle::is_aborted));
    }

    #[test]
    fn mount_registers_and_unmount_clears() {
        use crate::ui::notifications::emitter::tests::registry_lock;
        let _guard = registry_lock()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut store = Store::new();
        let (emitter, mut rx) = Emitter::channel();
        let _ = store.handle_message(Message::Mounted(emitter));
        assert!(store.emitter().is_some());
        assert!(emitter::is_registered());

        emitter::emit("routed", None, None);
        let forwarded = rx.try_recv().expect("registered emitter should forward");
        let _ = store.handle_message(Message::Emitted(forwarded));
        assert_eq!(titles(&store), ["routed"]);

        store.unmount();
        assert!(!emitter::is_registered());
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_resolves_only_after_duration() {
        let id = NotificationId::new();
        let mut timer = Box::pin(expiry(id, Duration::from_millis(500)));

        assert!(timeout(Duration::from_millis(499), &mut timer).await.is_err());
        assert_eq!(timeout(Duration::from_millis(2), &mut timer).await, Ok(id));
    }

    #[tokio::test(start_paused = true)]
    async fn owner_deleted_toast_expires_after_three_seconds() {
        let mut store = Store::new();
        let (id, _task) = store.add(
            Notification::success("Owner deleted")
                .description("The owner has been removed from the system."),
        );

        let listed: Vec<&Notification> = store.list().collect();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title(), "Owner deleted");
        assert_eq!(
            listed[0].description_text(),
            Some("The owner has been removed from the system.")
        );
        assert_eq!(listed[0].ttl(), Duration::from_millis(3000));

        let mut timer = Box::pin(expiry(id, listed[0].ttl()));
        assert!(timeout(Duration::from_millis(2999), &mut timer).await.is_err());
        assert_eq!(store.len(), 1);

        let fired = timeout(Duration::from_millis(2), &mut timer)
            .await
            .expect("timer should fire after the duration");
        let _ = store.handle_message(Message::Expired(fired));
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_expires_on_next_turn() {
        let mut store = Store::new();
        let (id, _task) = store.add(Notification::info("blink").duration(Duration::ZERO));
        assert!(store.contains(id));

        let fired = expiry(id, Duration::ZERO).await;
        let _ = store.handle_message(Message::Expired(fired));
        assert!(!store.contains(id));
    }
}
