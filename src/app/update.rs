// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component updates return events; the handlers here turn those events into
//! navigation, persistence, simulated backend calls and toasts.

use super::{config, screen, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::records::payment::RefundError;
use crate::session::Session;
use crate::ui::notifications::{self, Notification, Store};
use crate::ui::theming::ThemeMode;
use crate::ui::{dashboard, header, login, owners, pages, payments, sidebar};
use iced::task::{self, Task};
use iced::window;
use std::collections::BTreeMap;
use std::time::Duration;

/// Latency of the simulated create-owner call.
pub const OWNER_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Latency of the simulated refund call.
pub const REFUND_DELAY: Duration = Duration::from_secs(1);

/// Abort handles of the simulated backend calls that are still running.
#[derive(Debug, Default)]
pub struct BackendCalls {
    owner_submit: Option<task::Handle>,
    refunds: BTreeMap<u32, task::Handle>,
}

impl BackendCalls {
    /// Aborts every running call so nothing reports back after logout.
    pub fn abort_all(&mut self) {
        if let Some(handle) = self.owner_submit.take() {
            handle.abort();
        }
        for handle in std::mem::take(&mut self.refunds).into_values() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn handles(&self) -> Vec<task::Handle> {
        self.owner_submit
            .iter()
            .chain(self.refunds.values())
            .cloned()
            .collect()
    }
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a mut Session,
    pub screen: &'a mut Screen,
    pub sidebar_open: &'a mut bool,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut config::Config,
    pub notifications: &'a mut Store,
    pub login: &'a mut login::State,
    pub owners: &'a mut owners::State,
    pub pages: &'a mut pages::State,
    pub payments: &'a mut payments::State,
    pub backend_calls: &'a mut BackendCalls,
}

impl UpdateContext<'_> {
    /// Shows a toast and hands its expiry timer to the runtime.
    fn toast(&mut self, notification: Notification) -> Task<Message> {
        let (_, task) = self.notifications.add(notification);
        task.map(Message::Notification)
    }

    fn navigate(&mut self, requested: Screen) {
        let target = screen::resolve(requested, self.session.is_signed_in());
        if target != *self.screen {
            tracing::debug!(from = ?self.screen, to = ?target, "switching screen");
        }
        *self.screen = target;
    }
}

pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message) -> Task<Message> {
    match ctx.login.update(message) {
        login::Event::None => {}
        login::Event::SignInRequested { email, password } => {
            match ctx.session.sign_in(&email, &password) {
                Ok(_) => {
                    *ctx.login = login::State::default();
                    ctx.navigate(Screen::Dashboard);
                }
                Err(err) => ctx.login.fail(err),
            }
        }
    }
    Task::none()
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match message {
        dashboard::Message::Open(target) => ctx.navigate(target),
    }
    Task::none()
}

pub fn handle_sidebar_message(
    ctx: &mut UpdateContext<'_>,
    message: sidebar::Message,
) -> Task<Message> {
    match sidebar::update(message, *ctx.screen) {
        sidebar::Event::None => {}
        sidebar::Event::Navigate(target) => ctx.navigate(target),
        sidebar::Event::Logout => {
            ctx.backend_calls.abort_all();
            ctx.owners.cancel_submit();
            ctx.payments.cancel_refunds();
            ctx.session.sign_out();
            ctx.notifications.clear();
            ctx.navigate(Screen::Login);
        }
    }
    Task::none()
}

pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match message {
        header::Message::ToggleSidebar => {
            *ctx.sidebar_open = !*ctx.sidebar_open;
            Task::none()
        }
        header::Message::ThemeSelected(mode) => {
            if *ctx.theme_mode == mode {
                return Task::none();
            }
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            match config::save(&*ctx.config) {
                Ok(()) => Task::none(),
                Err(err) => {
                    tracing::warn!(%err, "failed to persist theme choice");
                    let title = ctx.i18n.tr(config::SAVE_ERROR_KEY);
                    ctx.toast(Notification::warning(title))
                }
            }
        }
    }
}

pub fn handle_owners_message(
    ctx: &mut UpdateContext<'_>,
    message: owners::Message,
) -> Task<Message> {
    if let owners::Message::SubmitFinished(_) = &message {
        ctx.backend_calls.owner_submit = None;
        if !ctx.session.is_signed_in() {
            tracing::debug!("dropping owner submission that finished after logout");
            return Task::none();
        }
    }

    match ctx.owners.update(message) {
        owners::Event::None | owners::Event::OwnerAdded(_) => Task::none(),
        owners::Event::SubmitRequested(draft) => {
            let title = ctx.i18n.tr("toast-owner-added-title");
            let description = ctx
                .i18n
                .tr_with_args("toast-owner-added-description", &[("name", draft.name.trim())]);
            let emitter = ctx.notifications.emitter().cloned();

            let (task, handle) = Task::perform(
                async move {
                    tokio::time::sleep(OWNER_SUBMIT_DELAY).await;
                    match emitter {
                        Some(emitter) => emitter.emit(title, Some(description), None),
                        None => tracing::warn!("owner added before the notification store mounted"),
                    }
                    draft
                },
                |draft| Message::Owners(owners::Message::SubmitFinished(draft)),
            )
            .abortable();
            ctx.backend_calls.owner_submit = Some(handle);
            task
        }
        owners::Event::OwnerDeleted(_) => {
            let notification = Notification::success(ctx.i18n.tr("toast-owner-deleted-title"))
                .description(ctx.i18n.tr("toast-owner-deleted-description"));
            ctx.toast(notification)
        }
        owners::Event::OwnerUpdated(owner) => {
            let notification = Notification::success(ctx.i18n.tr("toast-owner-updated-title"))
                .description(
                    ctx.i18n
                        .tr_with_args("toast-owner-updated-description", &[("name", &owner.name)]),
                );
            ctx.toast(notification)
        }
    }
}

pub fn handle_pages_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    let today = chrono::Local::now().date_naive();
    match ctx.pages.update(message, today) {
        pages::Event::None => Task::none(),
        pages::Event::StatusChanged(page) => {
            let title_key = if page.is_published() {
                "toast-page-published-title"
            } else {
                "toast-page-unpublished-title"
            };
            let notification = Notification::success(ctx.i18n.tr(title_key)).description(
                ctx.i18n
                    .tr_with_args("toast-page-status-description", &[("title", &page.title)]),
            );
            ctx.toast(notification)
        }
        pages::Event::Deleted(page) => {
            let notification = Notification::success(ctx.i18n.tr("toast-page-deleted-title"))
                .description(
                    ctx.i18n
                        .tr_with_args("toast-page-deleted-description", &[("title", &page.title)]),
                );
            ctx.toast(notification)
        }
    }
}

pub fn handle_payments_message(
    ctx: &mut UpdateContext<'_>,
    message: payments::Message,
) -> Task<Message> {
    if let payments::Message::RefundCompleted(id) = &message {
        ctx.backend_calls.refunds.remove(id);
        if !ctx.session.is_signed_in() {
            tracing::debug!(payment = *id, "dropping refund that finished after logout");
            return Task::none();
        }
    }

    match ctx.payments.update(message) {
        payments::Event::None | payments::Event::Refunded(_) => Task::none(),
        payments::Event::RefundRequested(payment) => {
            let title = ctx.i18n.tr("toast-payment-refunded-title");
            let description = ctx.i18n.tr_with_args(
                "toast-payment-refunded-description",
                &[
                    ("reference", &payment.reference),
                    ("amount", &payment.amount.to_string()),
                ],
            );
            let id = payment.id;

            // The refund call reports through the process-wide emitter.
            let (task, handle) = Task::perform(
                async move {
                    tokio::time::sleep(REFUND_DELAY).await;
                    notifications::emit(title, Some(description), None);
                    id
                },
                |id| Message::Payments(payments::Message::RefundCompleted(id)),
            )
            .abortable();
            ctx.backend_calls.refunds.insert(id, handle);
            task
        }
        payments::Event::RefundRejected(err) => {
            let description = match err {
                RefundError::NotRefundable(status) => ctx.i18n.tr_with_args(
                    err.i18n_key(),
                    &[("status", &ctx.i18n.tr(status.label_key()))],
                ),
            };
            let notification = Notification::error(ctx.i18n.tr("toast-payment-refund-failed-title"))
                .description(description);
            ctx.toast(notification)
        }
    }
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications
        .handle_message(message)
        .map(Message::Notification)
}

/// Detaches the store from the global emitter, then closes the window.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.notifications.unmount();
    tracing::info!("shutting down");
    window::close(id)
}
