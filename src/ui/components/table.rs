// SPDX-License-Identifier: MPL-2.0
//! Building blocks for the management tables.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{container, rule, text_input, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length};

/// Screen title with a search box on the right.
pub fn toolbar<'a, M>(
    title: String,
    placeholder: &str,
    search: &str,
    on_search: impl Fn(String) -> M + 'a,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            text_input(placeholder, search)
                .on_input(on_search)
                .padding(spacing::XS)
                .width(Length::Fixed(sizing::SEARCH_WIDTH)),
        )
        .into()
}

/// Column headers; every column gets the same share of the width.
pub fn header<'a, M: 'a>(labels: impl IntoIterator<Item = String>) -> Element<'a, M> {
    labels
        .into_iter()
        .fold(Row::new().spacing(spacing::SM), |row, label| {
            row.push(
                Container::new(Text::new(label).size(typography::BODY_SM))
                    .width(Length::FillPortion(1)),
            )
        })
        .into()
}

/// One data row built from already rendered cells.
pub fn row<'a, M: 'a>(cells: Vec<Element<'a, M>>) -> Element<'a, M> {
    cells
        .into_iter()
        .fold(
            Row::new().spacing(spacing::SM).align_y(Vertical::Center),
            |row, cell| row.push(Container::new(cell).width(Length::FillPortion(1))),
        )
        .into()
}

/// Plain text cell.
pub fn cell<'a, M: 'a>(value: impl Into<String>) -> Element<'a, M> {
    Text::new(value.into()).size(typography::BODY).into()
}

/// Colored pill used for record statuses.
pub fn badge<'a, M: 'a>(label: String, color: Color) -> Element<'a, M> {
    container(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(color))
        .into()
}

/// Wraps header, rows and footer into a panel with separators, or shows
/// `empty` instead of rows when there are none.
pub fn panel<'a, M: 'a>(
    header: Element<'a, M>,
    rows: Vec<Element<'a, M>>,
    empty: String,
    footer: Element<'a, M>,
) -> Element<'a, M> {
    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(rule::horizontal(1));

    if rows.is_empty() {
        body = body.push(
            Container::new(Text::new(empty).size(typography::BODY))
                .padding(spacing::LG)
                .center_x(Length::Fill),
        );
    } else {
        for row in rows {
            body = body.push(row).push(rule::horizontal(1));
        }
    }

    Container::new(body.push(footer))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
