// SPDX-License-Identifier: MPL-2.0
//! Owners screen: add form, managed table and details dialog.

pub mod details;
pub mod form;

use crate::i18n::fluent::I18n;
use crate::records::{Listing, Owner, OwnerDraft};
use crate::ui::components::pagination::{self, PageRequest};
use crate::ui::components::table;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::Element;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    Add,
    #[default]
    Manage,
}

impl Tab {
    fn label_key(self) -> &'static str {
        match self {
            Tab::Add => "owners-tab-add",
            Tab::Manage => "owners-tab-manage",
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    owners: Vec<Owner>,
    listing: Listing,
    tab: Tab,
    form: form::State,
    details: Option<details::State>,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    SearchChanged(String),
    Page(PageRequest),
    ViewDetails(u32),
    Delete(u32),
    Form(form::Message),
    Details(details::Message),
    /// The simulated create call for this draft returned.
    SubmitFinished(OwnerDraft),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SubmitRequested(OwnerDraft),
    OwnerAdded(Owner),
    OwnerDeleted(Owner),
    OwnerUpdated(Owner),
}

impl State {
    #[must_use]
    pub fn new(owners: Vec<Owner>, page_size: usize) -> Self {
        Self {
            owners,
            listing: Listing::new(page_size),
            tab: Tab::default(),
            form: form::State::default(),
            details: None,
        }
    }

    #[must_use]
    pub fn owners(&self) -> &[Owner] {
        &self.owners
    }

    #[must_use]
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn form(&self) -> &form::State {
        &self.form
    }

    #[must_use]
    pub fn details(&self) -> Option<&details::State> {
        self.details.as_ref()
    }

    /// Drops the in-flight submission state, e.g. on logout.
    pub fn cancel_submit(&mut self) {
        self.form.cancel_submit();
    }

    fn next_id(&self) -> u32 {
        self.owners.iter().map(|o| o.id).max().unwrap_or(0) + 1
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                Event::None
            }
            Message::SearchChanged(term) => {
                self.listing.set_search(term);
                Event::None
            }
            Message::Page(request) => {
                let total = self.listing.filter(&self.owners).len();
                pagination::apply(&mut self.listing, request, total);
                Event::None
            }
            Message::ViewDetails(id) => {
                self.details = self
                    .owners
                    .iter()
                    .find(|o| o.id == id)
                    .cloned()
                    .map(details::State::new);
                Event::None
            }
            Message::Delete(id) => {
                let Some(index) = self.owners.iter().position(|o| o.id == id) else {
                    return Event::None;
                };
                let removed = self.owners.remove(index);
                if self.details.as_ref().is_some_and(|d| d.owner().id == id) {
                    self.details = None;
                }
                let total = self.listing.filter(&self.owners).len();
                self.listing.clamp(total);
                tracing::info!(owner = %removed.username, "owner deleted");
                Event::OwnerDeleted(removed)
            }
            Message::Form(message) => match self.form.update(message) {
                form::Event::None => Event::None,
                form::Event::SubmitRequested(draft) => Event::SubmitRequested(draft),
            },
            Message::SubmitFinished(draft) => {
                let owner = draft.into_owner(self.next_id());
                tracing::info!(owner = %owner.username, id = owner.id, "owner added");
                self.owners.push(owner.clone());
                self.form.reset();
                Event::OwnerAdded(owner)
            }
            Message::Details(message) => {
                let Some(details) = self.details.as_mut() else {
                    return Event::None;
                };
                match details.update(message) {
                    details::Event::None => Event::None,
                    details::Event::Closed => {
                        self.details = None;
                        Event::None
                    }
                    details::Event::Saved(updated) => {
                        match self.owners.iter_mut().find(|o| o.id == updated.id) {
                            Some(slot) => *slot = updated.clone(),
                            None => return Event::None,
                        }
                        tracing::info!(owner = %updated.username, "owner updated");
                        Event::OwnerUpdated(updated)
                    }
                }
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let tabs = [Tab::Manage, Tab::Add]
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, tab| {
                let style = if tab == self.tab {
                    styles::button::selected
                } else {
                    styles::button::unselected
                };
                row.push(
                    button(Text::new(i18n.tr(tab.label_key())))
                        .on_press(Message::TabSelected(tab))
                        .padding(spacing::XS)
                        .style(style),
                )
            });

        let content = match self.tab {
            Tab::Add => self.form.view(i18n).map(Message::Form),
            Tab::Manage => self.manage_view(i18n),
        };

        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("screen-owners")).size(typography::TITLE_MD))
            .push(tabs)
            .push(content)
            .into()
    }

    /// The details dialog, rendered by the caller above the layout.
    pub fn details_view<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        self.details
            .as_ref()
            .map(|details| details.view(i18n).map(Message::Details))
    }

    fn manage_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let page = self.listing.view(&self.owners);

        let header = table::header(
            [
                "owner-field-name",
                "owner-field-username",
                "owner-field-email",
                "owner-field-phone",
                "table-column-actions",
            ]
            .into_iter()
            .map(|key| i18n.tr(key)),
        );

        let rows = page
            .rows
            .iter()
            .map(|owner| {
                let actions = Row::new()
                    .spacing(spacing::XXS)
                    .push(
                        button(Text::new(i18n.tr("owners-action-view")).size(typography::BODY_SM))
                            .on_press(Message::ViewDetails(owner.id))
                            .style(styles::button::ghost),
                    )
                    .push(
                        button(Text::new(i18n.tr("action-delete")).size(typography::BODY_SM))
                            .on_press(Message::Delete(owner.id))
                            .style(styles::button::danger),
                    );

                table::row(vec![
                    table::cell(owner.name.clone()),
                    table::cell(owner.username.clone()),
                    table::cell(owner.email.clone()),
                    table::cell(owner.phone.clone()),
                    actions.into(),
                ])
            })
            .collect();

        Column::new()
            .spacing(spacing::MD)
            .push(table::toolbar(
                i18n.tr("owners-tab-manage"),
                &i18n.tr("owners-search-placeholder"),
                self.listing.search(),
                Message::SearchChanged,
            ))
            .push(table::panel(
                header,
                rows,
                i18n.tr("table-empty"),
                pagination::view(i18n, &page, Message::Page),
            ))
            .into()
    }
}
