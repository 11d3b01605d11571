// SPDX-License-Identifier: MPL-2.0
//! Sidebar with the signed-in identity, screen navigation and logout.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::session::User;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, text, Column, Container, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user: &'a User,
    pub active: Screen,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Screen),
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    Logout,
}

/// Process a sidebar message and return the corresponding event.
pub fn update(message: Message, active: Screen) -> Event {
    match message {
        Message::Navigate(screen) if screen == active => Event::None,
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::Logout => Event::Logout,
    }
}

/// Render the sidebar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let identity = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.user.name.as_str()).size(typography::BODY_LG))
        .push(
            text(ctx.user.email.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let nav = Screen::NAVIGATION
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |col, screen| {
            col.push(
                button(Text::new(ctx.i18n.tr(screen.title_key())))
                    .on_press(Message::Navigate(screen))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::nav_item(screen == ctx.active)),
            )
        });

    let logout = button(Text::new(ctx.i18n.tr("sidebar-logout")))
        .on_press(Message::Logout)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::ghost);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("app-name")).size(typography::TITLE_SM))
        .push(identity)
        .push(rule::horizontal(1))
        .push(nav)
        .push(Space::new().height(Length::Fill))
        .push(logout);

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::chrome)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigating_to_active_screen_is_ignored() {
        assert_eq!(
            update(Message::Navigate(Screen::Pages), Screen::Pages),
            Event::None
        );
        assert_eq!(
            update(Message::Navigate(Screen::Owners), Screen::Pages),
            Event::Navigate(Screen::Owners)
        );
    }

    #[test]
    fn logout_is_forwarded() {
        assert_eq!(update(Message::Logout, Screen::Dashboard), Event::Logout);
    }
}
