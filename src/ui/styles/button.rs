// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Filled button with a thin border, the shape shared by most buttons.
fn filled(background: Color, text_color: Color, border_color: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Primary call-to-action button (sign in, save, add owner).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => {
            filled(palette::PRIMARY_400, WHITE, palette::PRIMARY_500, shadow::MD)
        }
        button::Status::Disabled => {
            filled(palette::GRAY_200, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_500, WHITE, palette::PRIMARY_600, shadow::SM)
        }
    }
}

/// Grayed out button without `on_press`, e.g. the owner form while submitting.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    |_theme: &Theme, _status: button::Status| {
        filled(palette::GRAY_200, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
    }
}

/// Current entry of a toggle group (owners tabs).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled if !matches!(theme, Theme::Light) => {
            filled(palette::GRAY_700, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
        _ => primary(theme, status),
    }
}

/// Other entries of a toggle group, and secondary actions such as dialog
/// buttons and dashboard cards.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let light = matches!(theme, Theme::Light);
    let (background, text_color) = if light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Hovered => {
            let hover = if light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            filled(hover, text_color, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => {
            filled(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Active | button::Status::Pressed => {
            filled(background, text_color, palette::GRAY_400, shadow::NONE)
        }
    }
}

/// Style for destructive actions (delete, sign out).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::ERROR_500
        },
        button::Status::Disabled => palette::GRAY_200,
        button::Status::Active | button::Status::Pressed => palette::ERROR_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for sidebar navigation entries; `active` highlights the current screen.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ext = theme.extended_palette();
        let (background, text_color) = match (active, status) {
            (true, _) => (
                Some(Background::Color(ext.primary.weak.color)),
                ext.primary.weak.text,
            ),
            (false, button::Status::Hovered | button::Status::Pressed) => (
                Some(Background::Color(ext.background.strong.color)),
                ext.background.strong.text,
            ),
            (false, _) => (None, ext.background.base.text),
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless text button used for row actions and the sidebar toggle.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(ext.background.weak.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: match status {
            button::Status::Disabled => palette::GRAY_400,
            _ => ext.primary.base.color,
        },
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
