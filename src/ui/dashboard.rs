// SPDX-License-Identifier: MPL-2.0
//! Dashboard summary cards.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::records::payment::total_minor;
use crate::records::{Money, Owner, Payment, PaymentStatus, StorePage};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

/// Figures shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub owners: usize,
    pub published_pages: usize,
    pub total_pages: usize,
    pub revenue: Money,
    pub pending_payments: usize,
}

impl Stats {
    #[must_use]
    pub fn collect(owners: &[Owner], pages: &[StorePage], payments: &[Payment]) -> Self {
        Self {
            owners: owners.len(),
            published_pages: pages.iter().filter(|p| p.is_published()).count(),
            total_pages: pages.len(),
            revenue: Money::usd(total_minor(payments, PaymentStatus::Completed)),
            pending_payments: payments
                .iter()
                .filter(|p| p.status == PaymentStatus::Pending)
                .count(),
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub stats: Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(Screen),
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let stats = ctx.stats;

    let cards = Row::new()
        .spacing(spacing::MD)
        .push(card(
            i18n.tr("dashboard-owners"),
            stats.owners.to_string(),
            Screen::Owners,
        ))
        .push(card(
            i18n.tr("dashboard-published-pages"),
            format!("{} / {}", stats.published_pages, stats.total_pages),
            Screen::Pages,
        ))
        .push(card(
            i18n.tr("dashboard-revenue"),
            stats.revenue.to_string(),
            Screen::Payments,
        ))
        .push(card(
            i18n.tr("dashboard-pending-payments"),
            stats.pending_payments.to_string(),
            Screen::Payments,
        ));

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("screen-dashboard")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("dashboard-welcome")).size(typography::BODY))
        .push(cards)
        .into()
}

fn card<'a>(label: String, value: String, target: Screen) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(Text::new(value).size(typography::TITLE_LG));

    button(body)
        .on_press(Message::Open(target))
        .padding(spacing::LG)
        .width(Length::FillPortion(1))
        .style(styles::button::unselected)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_summarize_seed_data() {
        let stats = Stats::collect(&Owner::seed(), &StorePage::seed(), &Payment::seed());

        assert_eq!(stats.owners, 3);
        assert_eq!(stats.published_pages, 4);
        assert_eq!(stats.total_pages, 6);
        assert_eq!(stats.revenue, Money::usd(35_499));
        assert_eq!(stats.pending_payments, 2);
    }

    #[test]
    fn stats_of_empty_collections_are_zero() {
        let stats = Stats::collect(&[], &[], &[]);
        assert_eq!(stats.owners, 0);
        assert_eq!(stats.revenue.to_string(), "0.00 USD");
    }
}
