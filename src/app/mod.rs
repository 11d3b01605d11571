// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the dashboard screens.
//!
//! The `App` struct wires together the session, the record screens, the
//! notification store and persisted preferences, and translates component
//! events into side effects like config persistence or toasts.

pub mod config;
mod message;
pub mod paths;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::records::{Owner, Payment, StorePage};
use crate::session::Session;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{login, owners, pages, payments};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    screen: Screen,
    sidebar_open: bool,
    theme_mode: ThemeMode,
    config: config::Config,
    /// Toast notifications shown above every screen.
    notifications: notifications::Store,
    login: login::State,
    owners: owners::State,
    pages: pages::State,
    payments: payments::State,
    backend_calls: update::BackendCalls,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.session.is_signed_in())
            .field("notifications", &self.notifications)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Closing goes through `Message::WindowCloseRequested` so the
        // notification store is unmounted first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(I18n::default(), config::Config::default())
    }
}

impl App {
    /// Builds the initial state from already loaded preferences.
    fn with_config(i18n: I18n, config: config::Config) -> Self {
        let page_size = config.listing.page_size();
        Self {
            i18n,
            session: Session::new(),
            screen: Screen::Login,
            sidebar_open: true,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Store::with_default_duration(
                config.notifications.duration(),
            ),
            login: login::State::default(),
            owners: owners::State::new(Owner::seed(), page_size),
            pages: pages::State::new(StorePage::seed(), page_size),
            payments: payments::State::new(Payment::seed(), page_size),
            backend_calls: update::BackendCalls::default(),
            config,
        }
    }

    /// Initializes application state from the launcher flags and the
    /// persisted configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        tracing::info!(locale = %i18n.current_locale(), "starting");

        let mut app = Self::with_config(i18n, config);

        let task = match config_warning {
            Some(key) => {
                let (_, task) = app
                    .notifications
                    .add(Notification::warning(app.i18n.tr(&key)));
                task.map(Message::Notification)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.session.is_signed_in() {
            let screen = self.i18n.tr(self.screen.title_key());
            format!("{screen} - {app_name}")
        } else {
            app_name
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_notification_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            session: &mut self.session,
            screen: &mut self.screen,
            sidebar_open: &mut self.sidebar_open,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            notifications: &mut self.notifications,
            login: &mut self.login,
            owners: &mut self.owners,
            pages: &mut self.pages,
            payments: &mut self.payments,
            backend_calls: &mut self.backend_calls,
        };

        match message {
            Message::Login(message) => update::handle_login_message(&mut ctx, message),
            Message::Dashboard(message) => update::handle_dashboard_message(&mut ctx, message),
            Message::Sidebar(message) => update::handle_sidebar_message(&mut ctx, message),
            Message::Header(message) => update::handle_header_message(&mut ctx, message),
            Message::Owners(message) => update::handle_owners_message(&mut ctx, message),
            Message::Pages(message) => update::handle_pages_message(&mut ctx, message),
            Message::Payments(message) => update::handle_payments_message(&mut ctx, message),
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, message)
            }
            Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            user: self.session.user(),
            screen: self.screen,
            sidebar_open: self.sidebar_open,
            theme_mode: self.theme_mode,
            login: &self.login,
            owners: &self.owners,
            pages: &self.pages,
            payments: &self.payments,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{OwnerField, PaymentStatus};
    use crate::ui::owners::form;
    use crate::ui::{header, sidebar};

    fn signed_in() -> App {
        let mut app = App::default();
        let _ = app.update(Message::Login(login::Message::EmailChanged(
            "jane.doe@openecommerce.com".into(),
        )));
        let _ = app.update(Message::Login(login::Message::PasswordChanged("secret".into())));
        let _ = app.update(Message::Login(login::Message::Submit));
        app
    }

    fn titles(app: &App) -> Vec<String> {
        app.notifications.list().map(|n| n.title().to_string()).collect()
    }

    #[test]
    fn starts_on_login_screen() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn sign_in_lands_on_dashboard() {
        let app = signed_in();
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.session.user().map(|u| u.name.as_str()), Some("Jane Doe"));
    }

    #[test]
    fn rejected_sign_in_stays_on_login() {
        let mut app = App::default();
        let _ = app.update(Message::Login(login::Message::Submit));
        assert_eq!(app.screen, Screen::Login);
        assert!(app.login.error().is_some());
    }

    #[test]
    fn navigation_is_guarded_by_session() {
        let mut app = App::default();
        let _ = app.update(Message::Sidebar(sidebar::Message::Navigate(Screen::Owners)));
        assert_eq!(app.screen, Screen::Login);

        let mut app = signed_in();
        let _ = app.update(Message::Sidebar(sidebar::Message::Navigate(Screen::Owners)));
        assert_eq!(app.screen, Screen::Owners);
    }

    #[test]
    fn deleting_owner_shows_toast() {
        let mut app = signed_in();
        let _ = app.update(Message::Owners(owners::Message::Delete(1)));

        assert_eq!(titles(&app), vec!["Owner deleted".to_string()]);
        let description = app.notifications.list().next().and_then(|n| n.description_text());
        assert_eq!(
            description,
            Some("The owner has been removed from the system.")
        );
    }

    #[test]
    fn logout_clears_toasts_and_returns_to_login() {
        let mut app = signed_in();
        let _ = app.update(Message::Pages(pages::Message::Delete(1)));
        assert_eq!(app.notifications.len(), 1);

        let _ = app.update(Message::Sidebar(sidebar::Message::Logout));
        assert!(app.notifications.is_empty());
        assert_eq!(app.screen, Screen::Login);
        assert!(!app.session.is_signed_in());
    }

    #[test]
    fn sidebar_toggle_flips_visibility() {
        let mut app = signed_in();
        assert!(app.sidebar_open);
        let _ = app.update(Message::Header(header::Message::ToggleSidebar));
        assert!(!app.sidebar_open);
    }

    #[test]
    fn dismissing_toast_removes_it() {
        let mut app = signed_in();
        let _ = app.update(Message::Owners(owners::Message::Delete(2)));
        let id = app.notifications.list().next().map(Notification::id);
        let Some(id) = id else {
            panic!("expected a toast");
        };

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(app.notifications.is_empty());

        // A late expiry for the same toast is harmless.
        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Expired(id),
        ));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn logout_cancels_running_backend_calls() {
        let mut app = signed_in();
        for (field, value) in [
            (OwnerField::Name, "Jane Doe"),
            (OwnerField::Username, "janedoe"),
            (OwnerField::Email, "jane@openecommerce.com"),
            (OwnerField::Password, "s3cret-pass"),
            (OwnerField::Address, "1 Market St"),
            (OwnerField::Phone, "+15550100"),
            (OwnerField::Nrc, "12/ABC(N)000001"),
        ] {
            let _ = app.update(Message::Owners(owners::Message::Form(
                form::Message::FieldChanged(field, value.into()),
            )));
        }
        let _ = app.update(Message::Owners(owners::Message::Form(form::Message::Submit)));
        let _ = app.update(Message::Payments(payments::Message::Refund(1)));
        assert!(app.owners.form().is_submitting());
        assert!(app.payments.is_refunding(1));

        let calls = app.backend_calls.handles();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|call| !call.is_aborted()));

        let draft = app.owners.form().draft().clone();
        let owner_count = app.owners.owners().len();
        let _ = app.update(Message::Sidebar(sidebar::Message::Logout));

        assert!(calls.iter().all(iced::task::Handle::is_aborted));
        assert!(!app.owners.form().is_submitting());
        assert!(!app.payments.is_refunding(1));

        // Completions that were already queued change nothing once signed out.
        let _ = app.update(Message::Owners(owners::Message::SubmitFinished(draft)));
        let _ = app.update(Message::Payments(payments::Message::RefundCompleted(1)));
        assert_eq!(app.owners.owners().len(), owner_count);
        let status = app.payments.payments().iter().find(|p| p.id == 1).map(|p| p.status);
        assert_eq!(status, Some(PaymentStatus::Completed));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn refund_of_pending_payment_reports_error() {
        let mut app = signed_in();
        let _ = app.update(Message::Payments(payments::Message::Refund(3)));
        assert_eq!(titles(&app), vec![app.i18n.tr("toast-payment-refund-failed-title")]);
    }
}
