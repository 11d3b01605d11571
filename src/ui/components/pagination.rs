// SPDX-License-Identifier: MPL-2.0
//! Pager shown under every management table.

use crate::i18n::fluent::I18n;
use crate::records::{Listing, PageView};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Row, Space, Text};
use iced::{Element, Length};

/// Number of page buttons shown around the current page.
const PAGE_WINDOW: usize = 5;

/// A navigation request coming from the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    First,
    Previous,
    Next,
    Last,
    Go(usize),
}

/// Applies `request` to `listing` for a filtered collection of `total` records.
pub fn apply(listing: &mut Listing, request: PageRequest, total: usize) {
    match request {
        PageRequest::First => listing.first(),
        PageRequest::Previous => listing.previous(),
        PageRequest::Next => listing.next(total),
        PageRequest::Last => listing.last(total),
        PageRequest::Go(page) => listing.go_to(page, total),
    }
}

/// Page numbers to show as buttons: at most [`PAGE_WINDOW`], centered on
/// `current` where possible.
#[must_use]
pub fn page_numbers(current: usize, page_count: usize) -> Vec<usize> {
    let page_count = page_count.max(1);
    let current = current.clamp(1, page_count);
    let width = PAGE_WINDOW.min(page_count);
    let start = current
        .saturating_sub(width / 2)
        .clamp(1, page_count + 1 - width);
    (start..start + width).collect()
}

/// "Showing {from} to {to} of {total} entries".
pub fn summary<T>(i18n: &I18n, view: &PageView<'_, T>) -> String {
    i18n.tr_with_args(
        "pagination-summary",
        &[
            ("from", &view.from.to_string()),
            ("to", &view.to.to_string()),
            ("total", &view.total.to_string()),
        ],
    )
}

/// Renders the summary on the left and the pager buttons on the right.
pub fn view<'a, T, M>(
    i18n: &I18n,
    page: &PageView<'_, T>,
    on_request: impl Fn(PageRequest) -> M,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let nav = |label: &str, request: PageRequest, enabled: bool| {
        let btn = button(Text::new(label.to_string()).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::XS]);
        if enabled {
            btn.on_press(on_request(request))
                .style(styles::button::unselected)
        } else {
            btn.style(styles::button::disabled())
        }
    };

    let mut pager = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(nav("«", PageRequest::First, !page.is_first()))
        .push(nav("‹", PageRequest::Previous, !page.is_first()));

    for number in page_numbers(page.page, page.page_count) {
        let btn = button(Text::new(number.to_string()).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::XS])
            .on_press(on_request(PageRequest::Go(number)));
        pager = pager.push(if number == page.page {
            btn.style(styles::button::selected)
        } else {
            btn.style(styles::button::unselected)
        });
    }

    pager = pager
        .push(nav("›", PageRequest::Next, !page.is_last()))
        .push(nav("»", PageRequest::Last, !page.is_last()));

    Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(summary(i18n, page)).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill))
        .push(pager)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Owner;

    #[test]
    fn page_numbers_stay_within_range() {
        assert_eq!(page_numbers(1, 1), vec![1]);
        assert_eq!(page_numbers(1, 3), vec![1, 2, 3]);
        assert_eq!(page_numbers(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_numbers(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_numbers(0, 0), vec![1]);
    }

    #[test]
    fn requests_move_the_listing() {
        let mut listing = Listing::new(5);
        apply(&mut listing, PageRequest::Last, 23);
        assert_eq!(listing.page(), 5);
        apply(&mut listing, PageRequest::Previous, 23);
        assert_eq!(listing.page(), 4);
        apply(&mut listing, PageRequest::Go(2), 23);
        assert_eq!(listing.page(), 2);
        apply(&mut listing, PageRequest::Next, 23);
        assert_eq!(listing.page(), 3);
        apply(&mut listing, PageRequest::First, 23);
        assert_eq!(listing.page(), 1);
    }

    #[test]
    fn summary_reports_visible_range() {
        let i18n = I18n::new(Some("en-US".into()), &Default::default());
        let owners = Owner::seed();
        let listing = Listing::new(2);

        let view = listing.view(&owners);
        assert_eq!(summary(&i18n, &view), "Showing 1 to 2 of 3 entries");
    }
}
