// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use storefront_admin::app::config::{self, Config};
use storefront_admin::app::screen::{resolve, Screen};
use storefront_admin::i18n::fluent::I18n;
use storefront_admin::records::{Listing, Owner, Payment, PaymentStatus};
use storefront_admin::session::{LoginError, Session};
use storefront_admin::ui::notifications::{expiry, Notification, NotificationMessage, Store};
use storefront_admin::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn preferences_survive_a_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut prefs = Config::default();
    prefs.general.language = Some("en-US".to_string());
    prefs.general.theme_mode = ThemeMode::Dark;
    prefs.notifications.duration_ms = Some(4500);
    prefs.listing.page_size = Some(10);
    config::save_with_override(&prefs, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    assert_eq!(loaded, prefs);
    assert_eq!(loaded.notifications.duration(), Duration::from_millis(4500));
    assert_eq!(loaded.listing.page_size(), 10);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn sign_in_unlocks_routing() {
    let mut session = Session::new();
    assert_eq!(resolve(Screen::Payments, session.is_signed_in()), Screen::Login);

    assert_eq!(
        session.sign_in("admin@openecommerce.com", ""),
        Err(LoginError::PasswordRequired)
    );
    let user = session
        .sign_in("admin@openecommerce.com", "secret")
        .expect("valid credentials");
    assert_eq!(user.initials(), "A");

    assert_eq!(resolve(Screen::Payments, true), Screen::Payments);
    assert_eq!(resolve(Screen::Login, true), Screen::Dashboard);

    session.sign_out();
    assert_eq!(resolve(Screen::Owners, session.is_signed_in()), Screen::Login);
}

#[test]
fn owner_listing_searches_and_paginates() {
    let owners = Owner::seed();
    let mut listing = Listing::new(2);

    let page = listing.view(&owners);
    assert_eq!((page.from, page.to, page.total, page.page_count), (1, 2, 3, 2));

    listing.next(owners.len());
    assert_eq!(listing.visible(&owners).len(), 1);

    // Narrowing the search pulls the page back into range.
    listing.set_search("user3@");
    let matching = listing.filter(&owners).len();
    listing.clamp(matching);
    let page = listing.view(&owners);
    assert_eq!(page.page, 1);
    assert_eq!(page.rows[0].name, "User 3");
}

#[test]
fn payments_refund_once() {
    let mut payments = Payment::seed();
    let completed = payments
        .iter_mut()
        .find(|p| p.status == PaymentStatus::Completed)
        .expect("seed has completed payments");

    assert!(completed.refund().is_ok());
    assert!(completed.refund().is_err());
}

#[test]
fn removing_first_of_two_keeps_the_second() {
    let mut store = Store::new();
    let (a, _) = store.add(Notification::success("A"));
    let (_, _) = store.add(Notification::success("B"));

    assert!(store.remove(a));
    let titles: Vec<&str> = store.list().map(Notification::title).collect();
    assert_eq!(titles, vec!["B"]);
}

#[tokio::test(start_paused = true)]
async fn configured_duration_drives_expiry() {
    let mut store = Store::with_default_duration(Duration::from_millis(1500));
    let (id, _task) = store.add(Notification::info("Payment refunded"));

    let ttl = store.list().next().map(Notification::ttl).expect("listed");
    assert_eq!(ttl, Duration::from_millis(1500));

    let fired = expiry(id, ttl).await;
    let _ = store.handle_message(NotificationMessage::Expired(fired));
    assert!(store.is_empty());
}
