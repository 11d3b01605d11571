// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
    Pages,
    Owners,
    Payments,
}

impl Screen {
    /// Screens listed in the sidebar, in display order.
    pub const NAVIGATION: [Screen; 4] = [
        Screen::Dashboard,
        Screen::Pages,
        Screen::Owners,
        Screen::Payments,
    ];

    /// Returns the i18n key of the screen title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Login => "screen-login",
            Screen::Dashboard => "screen-dashboard",
            Screen::Pages => "screen-pages",
            Screen::Owners => "screen-owners",
            Screen::Payments => "screen-payments",
        }
    }

    #[must_use]
    pub fn requires_session(self) -> bool {
        self != Screen::Login
    }
}

/// Decides which screen is actually shown for a navigation request.
///
/// Signed-out users always land on the login screen; signed-in users asking
/// for the login screen are sent to the dashboard.
#[must_use]
pub fn resolve(requested: Screen, signed_in: bool) -> Screen {
    match (signed_in, requested) {
        (false, _) => Screen::Login,
        (true, Screen::Login) => Screen::Dashboard,
        (true, screen) => screen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_always_resolves_to_login() {
        for screen in Screen::NAVIGATION {
            assert_eq!(resolve(screen, false), Screen::Login);
        }
        assert_eq!(resolve(Screen::Login, false), Screen::Login);
    }

    #[test]
    fn signed_in_login_request_goes_to_dashboard() {
        assert_eq!(resolve(Screen::Login, true), Screen::Dashboard);
    }

    #[test]
    fn signed_in_keeps_requested_screen() {
        for screen in Screen::NAVIGATION {
            assert_eq!(resolve(screen, true), screen);
            assert!(screen.requires_session());
        }
    }
}
