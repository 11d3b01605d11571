// SPDX-License-Identifier: MPL-2.0
//! Add-owner form.

use crate::i18n::fluent::I18n;
use crate::records::owner::FieldErrors;
use crate::records::{OwnerDraft, OwnerField};
use crate::ui::components::field::Field;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    draft: OwnerDraft,
    errors: FieldErrors,
    /// Set after the first submit attempt; from then on every keystroke
    /// revalidates the form.
    attempted: bool,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(OwnerField, String),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SubmitRequested(OwnerDraft),
}

impl State {
    #[must_use]
    pub fn draft(&self) -> &OwnerDraft {
        &self.draft
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldChanged(field, value) => {
                self.draft.set(field, value);
                if self.attempted {
                    self.revalidate();
                }
                Event::None
            }
            Message::Submit => {
                if self.submitting {
                    return Event::None;
                }
                self.attempted = true;
                if self.revalidate() {
                    self.submitting = true;
                    Event::SubmitRequested(self.draft.clone())
                } else {
                    tracing::debug!(errors = self.errors.len(), "owner form rejected");
                    Event::None
                }
            }
        }
    }

    /// Clears the form after the submission went through.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Re-enables the form when a submission is abandoned; the draft is kept.
    pub fn cancel_submit(&mut self) {
        self.submitting = false;
    }

    fn revalidate(&mut self) -> bool {
        match self.draft.validate() {
            Ok(()) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let field = |field: OwnerField| -> Element<'a, Message> {
            Field::new(
                i18n.tr(field.label_key()),
                i18n.tr(field.placeholder_key()),
                self.draft.get(field),
            )
            .hint(field.hint_key().map(|key| i18n.tr(key)))
            .error(self.errors.get(&field).map(|key| i18n.tr(key)))
            .secure(field == OwnerField::Password)
            .view(move |value| Message::FieldChanged(field, value))
        };

        // Two fields per line, in form order.
        let mut body = Column::new().spacing(spacing::MD);
        for pair in OwnerField::ALL.chunks(2) {
            let row = pair.iter().fold(Row::new().spacing(spacing::MD), |row, &f| {
                row.push(Container::new(field(f)).width(Length::FillPortion(1)))
            });
            body = body.push(row);
        }

        let label_key = if self.submitting {
            "owners-form-submitting"
        } else {
            "owners-form-submit"
        };
        let submit = button(Text::new(i18n.tr(label_key))).padding(spacing::XS);
        let submit = if self.submitting {
            submit.style(styles::button::disabled())
        } else {
            submit.on_press(Message::Submit).style(styles::button::primary)
        };

        Container::new(body.push(submit))
            .padding(spacing::LG)
            .max_width(sizing::FORM_WIDTH)
            .style(styles::container::panel)
            .into()
    }
}
