// SPDX-License-Identifier: MPL-2.0
//! Record types managed by the dashboard and their client-side listing.
//!
//! Every management screen keeps its records in memory and shows a filtered,
//! paginated projection of them through [`Listing`].

pub mod owner;
pub mod page;
pub mod payment;

pub use owner::{Owner, OwnerDraft, OwnerField};
pub use page::{PageStatus, StorePage};
pub use payment::{Money, Payment, PaymentStatus};

/// Number of rows shown per page when the configuration does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Bounds accepted for a configured page size.
pub const MIN_PAGE_SIZE: usize = 1;
pub const MAX_PAGE_SIZE: usize = 100;

/// Records that can be matched against a free-text search term.
pub trait Searchable {
    /// Returns true if the record matches `term`, which is already lowercase
    /// and non-empty.
    fn matches(&self, term: &str) -> bool;
}

/// Case-insensitive containment check used by [`Searchable`] impls.
pub(crate) fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Search term and pagination state for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    search: String,
    page: usize,
    page_size: usize,
}

impl Default for Listing {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// The part of a collection currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a, T> {
    pub rows: Vec<&'a T>,
    /// 1-based index of the first row shown, 0 when nothing matches.
    pub from: usize,
    /// 1-based index of the last row shown.
    pub to: usize,
    /// Number of records matching the search.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

impl<T> PageView<'_, T> {
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.page >= self.page_count
    }
}

impl Listing {
    /// Creates a listing on page 1 with the given page size, clamped to
    /// [`MIN_PAGE_SIZE`]..=[`MAX_PAGE_SIZE`].
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces the search term and goes back to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Number of pages needed for `total` records; never less than one.
    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Moves to page `page`, clamped into the valid range for `total` records.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.page_count(total));
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, total: usize) {
        self.go_to(self.page + 1, total);
    }

    pub fn last(&mut self, total: usize) {
        self.page = self.page_count(total);
    }

    /// Pulls the current page back into range after the filtered total shrank.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.page, total);
    }

    /// Returns the records matching the current search term, in order.
    pub fn filter<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            items.iter().collect()
        } else {
            items.iter().filter(|item| item.matches(&term)).collect()
        }
    }

    /// Applies search and pagination to `items`.
    pub fn view<'a, T: Searchable>(&self, items: &'a [T]) -> PageView<'a, T> {
        self.paginate(self.filter(items))
    }

    /// Rows of the current page only.
    pub fn visible<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.view(items).rows
    }

    /// Paginates an already filtered list of records.
    pub fn paginate<'a, T>(&self, filtered: Vec<&'a T>) -> PageView<'a, T> {
        let total = filtered.len();
        let page_count = self.page_count(total);
        let page = self.page.clamp(1, page_count);
        let start = (page - 1) * self.page_size;
        let rows: Vec<&T> = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();
        let (from, to) = if rows.is_empty() {
            (0, 0)
        } else {
            (start + 1, start + rows.len())
        };

        PageView {
            rows,
            from,
            to,
            total,
            page,
            page_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str);

    impl Searchable for Item {
        fn matches(&self, term: &str) -> bool {
            contains_ignore_case(self.0, term)
        }
    }

    fn items(n: usize) -> Vec<Item> {
        const NAMES: [&str; 12] = [
            "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
            "juliett", "kilo", "lima",
        ];
        NAMES.iter().take(n).map(|name| Item(name)).collect()
    }

    #[test]
    fn page_count_rounds_up_and_is_at_least_one() {
        let listing = Listing::new(5);
        assert_eq!(listing.page_count(0), 1);
        assert_eq!(listing.page_count(5), 1);
        assert_eq!(listing.page_count(6), 2);
        assert_eq!(listing.page_count(11), 3);
    }

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(Listing::new(0).page_size(), MIN_PAGE_SIZE);
        assert_eq!(Listing::new(10_000).page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn view_slices_the_requested_page() {
        let data = items(12);
        let mut listing = Listing::new(5);
        listing.go_to(3, data.len());

        let view = listing.view(&data);
        assert_eq!(view.rows, vec![&Item("kilo"), &Item("lima")]);
        assert_eq!((view.from, view.to, view.total), (11, 12, 12));
        assert!(view.is_last());
        assert!(!view.is_first());
    }

    #[test]
    fn search_is_case_insensitive_and_resets_page() {
        let data = items(12);
        let mut listing = Listing::new(5);
        listing.go_to(2, data.len());
        listing.set_search("  ECHO ");

        assert_eq!(listing.page(), 1);
        let view = listing.view(&data);
        assert_eq!(view.rows, vec![&Item("echo")]);
        assert_eq!(view.page_count, 1);
    }

    #[test]
    fn empty_result_reports_zero_range() {
        let data = items(3);
        let mut listing = Listing::default();
        listing.set_search("zulu");

        let view = listing.view(&data);
        assert!(view.rows.is_empty());
        assert_eq!((view.from, view.to, view.total), (0, 0, 0));
        assert_eq!(view.page_count, 1);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut listing = Listing::new(5);
        listing.previous();
        assert_eq!(listing.page(), 1);

        listing.next(12);
        listing.next(12);
        listing.next(12);
        assert_eq!(listing.page(), 3);

        listing.go_to(99, 12);
        assert_eq!(listing.page(), 3);

        listing.first();
        assert_eq!(listing.page(), 1);

        listing.last(12);
        assert_eq!(listing.page(), 3);
    }

    #[test]
    fn clamp_pulls_page_back_after_deletions() {
        let mut listing = Listing::new(5);
        listing.go_to(3, 11);
        listing.clamp(10);
        assert_eq!(listing.page(), 2);
    }
}
