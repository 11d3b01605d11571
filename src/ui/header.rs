// SPDX-License-Identifier: MPL-2.0
//! Top bar: sidebar toggle, theme menu and avatar.

use crate::i18n::fluent::I18n;
use crate::session::User;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ThemeChoice, ThemeMode};
use iced::alignment::Vertical;
use iced::widget::{button, pick_list, Container, Row, Space, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user: &'a User,
    pub theme_mode: ThemeMode,
    pub sidebar_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleSidebar,
    ThemeSelected(ThemeMode),
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toggle_key = if ctx.sidebar_open {
        "header-hide-sidebar"
    } else {
        "header-show-sidebar"
    };
    let toggle = button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY_SM))
        .on_press(Message::ToggleSidebar)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    let choices: Vec<ThemeChoice> = ThemeMode::ALL
        .into_iter()
        .map(|mode| ThemeChoice {
            mode,
            label: ctx.i18n.tr(mode.label_key()),
        })
        .collect();
    let selected = choices.iter().find(|c| c.mode == ctx.theme_mode).cloned();
    let theme = pick_list(choices, selected, |choice: ThemeChoice| {
        Message::ThemeSelected(choice.mode)
    })
    .padding(spacing::XS)
    .text_size(typography::BODY_SM);

    let avatar = Container::new(Text::new(ctx.user.initials()).size(typography::BODY_SM))
        .center_x(Length::Fixed(sizing::AVATAR))
        .center_y(Length::Fixed(sizing::AVATAR))
        .style(styles::container::avatar);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(toggle)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(ctx.i18n.tr("header-theme")).size(typography::BODY_SM))
        .push(theme)
        .push(avatar);

    Container::new(row)
        .padding([0.0, spacing::MD])
        .center_y(Length::Fixed(sizing::HEADER_HEIGHT))
        .width(Length::Fill)
        .style(styles::container::chrome)
        .into()
}
