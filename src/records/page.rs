// SPDX-License-Identifier: MPL-2.0
//! Storefront pages published by owners.

use super::{contains_ignore_case, Searchable};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageStatus {
    Published,
    #[default]
    Draft,
}

impl PageStatus {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            PageStatus::Published => "page-status-published",
            PageStatus::Draft => "page-status-draft",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PageStatus::Published => PageStatus::Draft,
            PageStatus::Draft => PageStatus::Published,
        }
    }
}

/// A storefront page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePage {
    pub id: u32,
    pub title: String,
    pub slug: String,
    /// Username of the owning store owner.
    pub owner: String,
    pub status: PageStatus,
    pub updated: NaiveDate,
}

impl StorePage {
    /// Flips between published and draft, stamping `today` as the update date.
    pub fn toggle_status(&mut self, today: NaiveDate) -> PageStatus {
        self.status = self.status.toggled();
        self.updated = today;
        self.status
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == PageStatus::Published
    }

    /// Demo pages shown before any backend is connected.
    #[must_use]
    pub fn seed() -> Vec<StorePage> {
        [
            ("Home", "home", "user1", PageStatus::Published, (2024, 9, 2)),
            ("Summer Sale", "summer-sale", "user1", PageStatus::Draft, (2024, 8, 14)),
            ("About Us", "about", "user2", PageStatus::Published, (2024, 7, 30)),
            ("Shipping Policy", "shipping", "user2", PageStatus::Published, (2024, 6, 11)),
            ("New Arrivals", "new-arrivals", "user3", PageStatus::Draft, (2024, 9, 18)),
            ("Contact", "contact", "user3", PageStatus::Published, (2024, 5, 3)),
        ]
        .into_iter()
        .zip(1..)
        .filter_map(|((title, slug, owner, status, (y, m, d)), id)| {
            Some(StorePage {
                id,
                title: title.to_string(),
                slug: slug.to_string(),
                owner: owner.to_string(),
                status,
                updated: NaiveDate::from_ymd_opt(y, m, d)?,
            })
        })
        .collect()
    }
}

impl Searchable for StorePage {
    fn matches(&self, term: &str) -> bool {
        contains_ignore_case(&self.title, term)
            || contains_ignore_case(&self.slug, term)
            || contains_ignore_case(&self.owner, term)
    }
}
