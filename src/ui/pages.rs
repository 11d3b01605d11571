// SPDX-License-Identifier: MPL-2.0
//! Storefront pages management screen.

use crate::i18n::fluent::I18n;
use crate::records::{Listing, PageStatus, StorePage};
use crate::ui::components::pagination::{self, PageRequest};
use crate::ui::components::table;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::widget::{button, Column, Row, Text};
use iced::Element;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    pages: Vec<StorePage>,
    listing: Listing,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    Page(PageRequest),
    ToggleStatus(u32),
    Delete(u32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    StatusChanged(StorePage),
    Deleted(StorePage),
}

impl State {
    #[must_use]
    pub fn new(pages: Vec<StorePage>, page_size: usize) -> Self {
        Self {
            pages,
            listing: Listing::new(page_size),
        }
    }

    #[must_use]
    pub fn pages(&self) -> &[StorePage] {
        &self.pages
    }

    #[must_use]
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    fn filtered_len(&self) -> usize {
        self.listing.filter(&self.pages).len()
    }

    pub fn update(&mut self, message: Message, today: NaiveDate) -> Event {
        match message {
            Message::SearchChanged(term) => {
                self.listing.set_search(term);
                Event::None
            }
            Message::Page(request) => {
                let total = self.filtered_len();
                pagination::apply(&mut self.listing, request, total);
                Event::None
            }
            Message::ToggleStatus(id) => {
                match self.pages.iter_mut().find(|page| page.id == id) {
                    Some(page) => {
                        let status = page.toggle_status(today);
                        tracing::info!(page = %page.slug, ?status, "page status changed");
                        Event::StatusChanged(page.clone())
                    }
                    None => Event::None,
                }
            }
            Message::Delete(id) => {
                let Some(index) = self.pages.iter().position(|page| page.id == id) else {
                    return Event::None;
                };
                let removed = self.pages.remove(index);
                let total = self.filtered_len();
                self.listing.clamp(total);
                tracing::info!(page = %removed.slug, "page deleted");
                Event::Deleted(removed)
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let page = self.listing.view(&self.pages);

        let header = table::header(
            [
                "pages-column-title",
                "pages-column-slug",
                "pages-column-owner",
                "pages-column-status",
                "pages-column-updated",
                "table-column-actions",
            ]
            .into_iter()
            .map(|key| i18n.tr(key)),
        );

        let rows = page
            .rows
            .iter()
            .map(|store_page| {
                let status_color = match store_page.status {
                    PageStatus::Published => palette::SUCCESS_500,
                    PageStatus::Draft => palette::WARNING_500,
                };
                let toggle_key = match store_page.status {
                    PageStatus::Published => "pages-action-unpublish",
                    PageStatus::Draft => "pages-action-publish",
                };
                let actions = Row::new()
                    .spacing(spacing::XXS)
                    .push(
                        button(Text::new(i18n.tr(toggle_key)).size(typography::BODY_SM))
                            .on_press(Message::ToggleStatus(store_page.id))
                            .style(styles::button::ghost),
                    )
                    .push(
                        button(Text::new(i18n.tr("action-delete")).size(typography::BODY_SM))
                            .on_press(Message::Delete(store_page.id))
                            .style(styles::button::danger),
                    );

                table::row(vec![
                    table::cell(store_page.title.clone()),
                    table::cell(format!("/{}", store_page.slug)),
                    table::cell(store_page.owner.clone()),
                    table::badge(i18n.tr(store_page.status.label_key()), status_color),
                    table::cell(store_page.updated.format("%Y-%m-%d").to_string()),
                    actions.into(),
                ])
            })
            .collect();

        Column::new()
            .spacing(spacing::MD)
            .push(table::toolbar(
                i18n.tr("screen-pages"),
                &i18n.tr("pages-search-placeholder"),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
    }

    #[test]
    fn toggle_reports_changed_page() {
        let mut state = State::new(StorePage::seed(), 5);

        match state.update(Message::ToggleStatus(2), today()) {
            Event::StatusChanged(page) => {
                assert_eq!(page.status, PageStatus::Published);
                assert_eq!(page.updated, today());
            }
            other => panic!("expected StatusChanged, got {other:?}"),
        }
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut state = State::new(StorePage::seed(), 5);
        assert_eq!(state.update(Message::ToggleStatus(99), today()), Event::None);
        assert_eq!(state.update(Message::Delete(99), today()), Event::None);
        assert_eq!(state.pages().len(), 6);
    }

    #[test]
    fn deleting_last_row_pulls_page_back() {
        let mut state = State::new(StorePage::seed(), 5);
        state.update(Message::Page(PageRequest::Last), today());
        assert_eq!(state.listing().page(), 2);

        assert!(matches!(
            state.update(Message::Delete(6), today()),
            Event::Deleted(page) if page.slug == "contact"
        ));
        assert_eq!(state.listing().page(), 1);
    }

    #[test]
    fn search_narrows_rows() {
        let mut state = State::new(StorePage::seed(), 5);
        state.update(Message::SearchChanged("user2".into()), today());

        let view = state.listing().view(state.pages());
        assert_eq!(view.total, 2);
    }
}
