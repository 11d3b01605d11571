// SPDX-License-Identifier: MPL-2.0
//! Payments screen with status filter and refunds.

use crate::i18n::fluent::I18n;
use crate::records::payment::RefundError;
use crate::records::{Listing, Payment, PaymentStatus};
use crate::ui::components::pagination::{self, PageRequest};
use crate::ui::components::table;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, pick_list, Column, Row, Text};
use iced::{Color, Element};
use std::collections::BTreeSet;
use std::fmt;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    payments: Vec<Payment>,
    listing: Listing,
    status_filter: Option<PaymentStatus>,
    /// Payments with a refund call in flight.
    refunding: BTreeSet<u32>,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    StatusFilterChanged(Option<PaymentStatus>),
    Page(PageRequest),
    Refund(u32),
    RefundCompleted(u32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    RefundRequested(Payment),
    Refunded(Payment),
    RefundRejected(RefundError),
}

/// Entry of the status filter menu.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusOption {
    status: Option<PaymentStatus>,
    label: String,
}

impl fmt::Display for StatusOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn status_color(status: PaymentStatus) -> Color {
    match status {
        PaymentStatus::Pending => palette::WARNING_500,
        PaymentStatus::Completed => palette::SUCCESS_500,
        PaymentStatus::Refunded => palette::INFO_500,
        PaymentStatus::Failed => palette::ERROR_500,
    }
}

impl State {
    #[must_use]
    pub fn new(payments: Vec<Payment>, page_size: usize) -> Self {
        Self {
            payments,
            listing: Listing::new(page_size),
            status_filter: None,
            refunding: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    #[must_use]
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    #[must_use]
    pub fn is_refunding(&self, id: u32) -> bool {
        self.refunding.contains(&id)
    }

    /// Payments matching both the search term and the status filter.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Payment> {
        let mut rows = self.listing.filter(&self.payments);
        if let Some(status) = self.status_filter {
            rows.retain(|payment| payment.status == status);
        }
        rows
    }

    pub fn cancel_refunds(&mut self) {
        self.refunding.clear();
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SearchChanged(term) => {
                self.listing.set_search(term);
                Event::None
            }
            Message::StatusFilterChanged(status) => {
                self.status_filter = status;
                self.listing.first();
                Event::None
            }
            Message::Page(request) => {
                let total = self.filtered().len();
                pagination::apply(&mut self.listing, request, total);
                Event::None
            }
            Message::Refund(id) => {
                if self.refunding.contains(&id) {
                    return Event::None;
                }
                let Some(payment) = self.payments.iter().find(|p| p.id == id) else {
                    return Event::None;
                };
                if !payment.is_refundable() {
                    return Event::RefundRejected(RefundError::NotRefundable(payment.status));
                }
                self.refunding.insert(id);
                Event::RefundRequested(payment.clone())
            }
            Message::RefundCompleted(id) => {
                self.refunding.remove(&id);
                let Some(payment) = self.payments.iter_mut().find(|p| p.id == id) else {
                    return Event::None;
                };
                match payment.refund() {
                    Ok(()) => {
                        tracing::info!(reference = %payment.reference, "payment refunded");
                        let refunded = payment.clone();
                        let total = self.filtered().len();
                        self.listing.clamp(total);
                        Event::Refunded(refunded)
                    }
                    Err(err) => {
                        tracing::warn!(reference = %payment.reference, %err, "refund rejected");
                        Event::RefundRejected(err)
                    }
                }
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let page = self.listing.paginate(self.filtered());

        let options: Vec<StatusOption> = std::iter::once(StatusOption {
            status: None,
            label: i18n.tr("payments-filter-all"),
        })
        .chain(PaymentStatus::ALL.into_iter().map(|status| StatusOption {
            status: Some(status),
            label: i18n.tr(status.label_key()),
        }))
        .collect();
        let selected = options
            .iter()
            .find(|opt| opt.status == self.status_filter)
            .cloned();
        let filter = pick_list(options, selected, |opt: StatusOption| {
            Message::StatusFilterChanged(opt.status)
        })
        .padding(spacing::XS);

        let header = table::header(
            [
                "payments-column-reference",
                "payments-column-owner",
                "payments-column-amount",
                "payments-column-status",
                "payments-column-date",
                "table-column-actions",
            ]
            .into_iter()
            .map(|key| i18n.tr(key)),
        );

        let rows = page
            .rows
            .iter()
            .map(|payment| {
                let refund_label = Text::new(i18n.tr("payments-action-refund")).size(typography::BODY_SM);
                let refund = if payment.is_refundable() && !self.is_refunding(payment.id) {
                    button(refund_label)
                        .on_press(Message::Refund(payment.id))
                        .style(styles::button::ghost)
                } else {
                    button(refund_label).style(styles::button::ghost)
                };

                table::row(vec![
                    table::cell(payment.reference.clone()),
                    table::cell(payment.owner.clone()),
                    table::cell(payment.amount.to_string()),
                    table::badge(i18n.tr(payment.status.label_key()), status_color(payment.status)),
                    table::cell(payment.date.format("%Y-%m-%d").to_string()),
                    refund.into(),
                ])
            })
            .collect();

        let toolbar = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(table::toolbar(
                i18n.tr("screen-payments"),
                &i18n.tr("payments-search-placeholder"),
                self.listing.search(),
                Message::SearchChanged,
            ))
            .push(filter);

        Column::new()
            .spacing(spacing::MD)
            .push(toolbar)
            .push(table::panel(
                header,
                rows,
                i18n.tr("table-empty"),
                pagination::view(i18n, &page, Message::Page),
            ))
            .into()
    }
}
