// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Signed-out users see the login card alone. Signed-in users get the sidebar
//! and header around the active screen. The owner details dialog and the
//! toasts are layered on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::session::User;
use crate::ui::dashboard::{self, Stats};
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{Store, Toast};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::{header, login, owners, pages, payments, sidebar};
use iced::widget::{opaque, scrollable, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user: Option<&'a User>,
    pub screen: Screen,
    pub sidebar_open: bool,
    pub theme_mode: ThemeMode,
    pub login: &'a login::State,
    pub owners: &'a owners::State,
    pub pages: &'a pages::State,
    pub payments: &'a payments::State,
    pub notifications: &'a Store,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = match ctx.user {
        Some(user) if ctx.screen != Screen::Login => view_layout(&ctx, user),
        _ => ctx
            .login
            .view(login::ViewContext { i18n: ctx.i18n })
            .map(Message::Login),
    };

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.screen == Screen::Owners {
        if let Some(dialog) = ctx.owners.details_view(ctx.i18n) {
            stack = stack.push(opaque(
                Container::new(dialog.map(Message::Owners))
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .style(styles::container::backdrop),
            ));
        }
    }

    stack
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}

fn view_layout<'a>(ctx: &ViewContext<'a>, user: &'a User) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let content: Element<'a, Message> = match ctx.screen {
        Screen::Dashboard | Screen::Login => dashboard::view(dashboard::ViewContext {
            i18n,
            stats: Stats::collect(
                ctx.owners.owners(),
                ctx.pages.pages(),
                ctx.payments.payments(),
            ),
        })
        .map(Message::Dashboard),
        Screen::Pages => ctx
            .pages
            .view(pages::ViewContext { i18n })
            .map(Message::Pages),
        Screen::Owners => ctx
            .owners
            .view(owners::ViewContext { i18n })
            .map(Message::Owners),
        Screen::Payments => ctx
            .payments
            .view(payments::ViewContext { i18n })
            .map(Message::Payments),
    };

    let header = header::view(header::ViewContext {
        i18n,
        user,
        theme_mode: ctx.theme_mode,
        sidebar_open: ctx.sidebar_open,
    })
    .map(Message::Header);

    let main = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(
            scrollable(Container::new(content).padding(spacing::LG).width(Length::Fill))
                .height(Length::Fill),
        );

    let mut row = Row::new().width(Length::Fill).height(Length::Fill);
    if ctx.sidebar_open {
        row = row.push(
            sidebar::view(sidebar::ViewContext {
                i18n,
                user,
                active: ctx.screen,
            })
            .map(Message::Sidebar),
        );
    }

    row.push(main).into()
}
