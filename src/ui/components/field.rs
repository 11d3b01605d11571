// SPDX-License-Identifier: MPL-2.0
//! Labeled text input used by the login, owner and details forms.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, text_input, Column, TextInput};
use iced::Element;

/// Everything needed to render one form field.
pub struct Field<'a> {
    pub label: String,
    pub placeholder: String,
    pub value: &'a str,
    /// Helper text shown under the input while there is no error.
    pub hint: Option<String>,
    pub error: Option<String>,
    /// Masks the value (passwords).
    pub secure: bool,
}

impl<'a> Field<'a> {
    pub fn new(label: String, placeholder: String, value: &'a str) -> Self {
        Self {
            label,
            placeholder,
            value,
            hint: None,
            error: None,
            secure: false,
        }
    }

    #[must_use]
    pub fn hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }

    #[must_use]
    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    #[must_use]
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Renders an editable field.
    pub fn view<M>(self, on_input: impl Fn(String) -> M + 'a) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        let input = self.input().on_input(on_input);
        self.wrap(input)
    }

    /// Renders a field whose input ignores typing.
    pub fn read_only<M>(self) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        let input = self.input();
        self.wrap(input)
    }

    fn input<M: Clone + 'a>(&self) -> TextInput<'a, M> {
        text_input(&self.placeholder, self.value)
            .secure(self.secure)
            .padding(spacing::XS)
            .size(typography::BODY)
    }

    fn wrap<M: Clone + 'a>(self, input: TextInput<'a, M>) -> Element<'a, M> {
        let mut col = Column::new()
            .spacing(spacing::XXS)
            .push(text(self.label).size(typography::BODY_SM))
            .push(input);

        if let Some(error) = self.error {
            col = col.push(
                text(error)
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        } else if let Some(hint) = self.hint {
            col = col.push(
                text(hint)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        }

        col.into()
    }
}
