// SPDX-License-Identifier: MPL-2.0
//! Sign-in screen.

use crate::i18n::fluent::I18n;
use crate::session::LoginError;
use crate::ui::components::field::Field;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Text};
use iced::{Element, Length};

/// Contextual data needed to render the login screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
    password: String,
    error: Option<LoginError>,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SignInRequested { email: String, password: String },
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email = value;
                self.error = None;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                self.error = None;
                Event::None
            }
            Message::Submit => Event::SignInRequested {
                email: self.email.clone(),
                password: self.password.clone(),
            },
        }
    }

    /// Shows why the last attempt was rejected and clears the password.
    pub fn fail(&mut self, error: LoginError) {
        self.error = Some(error);
        self.password.clear();
    }

    #[must_use]
    pub fn error(&self) -> Option<LoginError> {
        self.error
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let email = Field::new(
            i18n.tr("login-email-label"),
            i18n.tr("login-email-placeholder"),
            &self.email,
        )
        .view(Message::EmailChanged);

        let password = Field::new(
            i18n.tr("login-password-label"),
            i18n.tr("login-password-placeholder"),
            &self.password,
        )
        .secure(true)
        .view(Message::PasswordChanged);

        let submit = button(Text::new(i18n.tr("login-submit")))
            .on_press(Message::Submit)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::button::primary);

        let mut form = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("app-name")).size(typography::TITLE_LG))
            .push(Text::new(i18n.tr("login-subtitle")).size(typography::BODY))
            .push(email)
            .push(password);

        if let Some(error) = self.error {
            form = form.push(
                text(i18n.tr(error.i18n_key()))
                    .size(typography::BODY_SM)
                    .color(palette::ERROR_500),
            );
        }

        let card = Container::new(form.push(submit))
            .padding(spacing::XL)
            .width(Length::Fixed(sizing::LOGIN_CARD_WIDTH))
            .style(styles::container::panel);

        Container::new(card)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_forwards_credentials() {
        let mut state = State::default();
        state.update(Message::EmailChanged("admin@openecommerce.com".into()));
        state.update(Message::PasswordChanged("hunter22".into()));

        assert_eq!(
            state.update(Message::Submit),
            Event::SignInRequested {
                email: "admin@openecommerce.com".into(),
                password: "hunter22".into(),
            }
        );
    }

    #[test]
    fn failure_is_cleared_by_typing() {
        let mut state = State::default();
        state.fail(LoginError::InvalidEmail);
        assert_eq!(state.error(), Some(LoginError::InvalidEmail));

        state.update(Message::EmailChanged("a".into()));
        assert_eq!(state.error(), None);
    }
}
