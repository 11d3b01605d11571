// SPDX-License-Identifier: MPL-2.0
//! Owner details dialog with inline editing.

use crate::i18n::fluent::I18n;
use crate::records::owner::FieldErrors;
use crate::records::{Owner, OwnerField};
use crate::ui::components::field::Field;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    owner: Owner,
    /// Working copy while in edit mode.
    editing: Option<Owner>,
    errors: FieldErrors,
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit,
    FieldChanged(OwnerField, String),
    Save,
    CancelEdit,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Saved(Owner),
    Closed,
}

impl State {
    #[must_use]
    pub fn new(owner: Owner) -> Self {
        Self {
            owner,
            editing: None,
            errors: FieldErrors::new(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Edit => {
                self.editing = Some(self.owner.clone());
                Event::None
            }
            Message::FieldChanged(field, value) => {
                if let Some(draft) = self.editing.as_mut() {
                    draft.set(field, value);
                    self.errors.remove(&field);
                }
                Event::None
            }
            Message::Save => {
                let Some(draft) = self.editing.take() else {
                    return Event::None;
                };
                match draft.validate() {
                    Ok(()) => {
                        self.errors.clear();
                        self.owner = draft.clone();
                        Event::Saved(draft)
                    }
                    Err(errors) => {
                        self.errors = errors;
                        self.editing = Some(draft);
                        Event::None
                    }
                }
            }
            Message::CancelEdit => {
                self.editing = None;
                self.errors.clear();
                Event::None
            }
            Message::Close => Event::Closed,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let shown = self.editing.as_ref().unwrap_or(&self.owner);

        let mut body = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("owners-details-title")).size(typography::TITLE_MD))
            .push(
                Field::new(
                    i18n.tr(OwnerField::Username.label_key()),
                    String::new(),
                    &shown.username,
                )
                .read_only(),
            );

        for field in OwnerField::EDITABLE {
            let input = Field::new(
                i18n.tr(field.label_key()),
                i18n.tr(field.placeholder_key()),
                shown.get(field),
            )
            .error(self.errors.get(&field).map(|key| i18n.tr(key)));
            body = body.push(if self.is_editing() {
                input.view(move |value| Message::FieldChanged(field, value))
            } else {
                input.read_only()
            });
        }

        let action = |key: &str, message: Message, primary: bool| {
            let btn = button(Text::new(i18n.tr(key))).on_press(message).padding(spacing::XS);
            if primary {
                btn.style(styles::button::primary)
            } else {
                btn.style(styles::button::unselected)
            }
        };

        let mut actions = Row::new().spacing(spacing::SM).push(Space::new().width(Length::Fill));
        actions = if self.is_editing() {
            actions
                .push(action("owners-details-cancel", Message::CancelEdit, false))
                .push(action("owners-details-save", Message::Save, true))
        } else {
            actions
                .push(action("owners-details-close", Message::Close, false))
                .push(action("owners-details-edit", Message::Edit, true))
        };

        Container::new(body.push(actions))
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .style(styles::container::panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(Owner::seed().remove(0))
    }

    #[test]
    fn fields_are_ignored_outside_edit_mode() {
        let mut state = state();
        state.update(Message::FieldChanged(OwnerField::Name, "Changed".into()));
        assert_eq!(state.owner().name, "User 1");
    }

    #[test]
    fn save_writes_back_valid_edits() {
        let mut state = state();
        state.update(Message::Edit);
        state.update(Message::FieldChanged(OwnerField::Phone, "+4455".into()));

        assert!(matches!(
            state.update(Message::Save),
            Event::Saved(owner) if owner.phone == "+4455"
        ));
        assert!(!state.is_editing());
        assert_eq!(state.owner().phone, "+4455");
    }

    #[test]
    fn invalid_edits_stay_in_edit_mode() {
        let mut state = state();
        state.update(Message::Edit);
        state.update(Message::FieldChanged(OwnerField::Email, "broken".into()));

        assert_eq!(state.update(Message::Save), Event::None);
        assert!(state.is_editing());
        assert_eq!(state.owner().email, "user1@openecommerce.com");
    }

    #[test]
    fn cancel_discards_edits() {
        let mut state = state();
        state.update(Message::Edit);
        state.update(Message::FieldChanged(OwnerField::Name, "Nope".into()));
        state.update(Message::CancelEdit);

        assert!(!state.is_editing());
        assert_eq!(state.owner().name, "User 1");
        assert_eq!(state.update(Message::Close), Event::Closed);
    }
}
