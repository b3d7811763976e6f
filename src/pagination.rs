//! Client-side pagination over an already fetched list.

use std::ops::Range;

pub const ITEMS_PER_PAGE: usize = 10;

/// Current 1-based page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl Pager {
    pub const fn new(per_page: usize) -> Self {
        let per_page = if per_page == 0 { 1 } else { per_page };
        Self { page: 1, per_page }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Never less than one, so an empty list still shows "Page 1 of 1".
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page).max(1)
    }

    pub fn clamped(self, total: usize) -> Self {
        Self {
            page: self.page.clamp(1, self.total_pages(total)),
            ..self
        }
    }

    pub fn next(self, total: usize) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
        .clamped(total)
    }

    pub fn prev(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }

    /// Index range of the current page, cut at `total`.
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(total);
        let end = (self.page * self.per_page).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.window(items.len())]
    }

    /// 1-based serial number of `row` on the current page, continuing across pages.
    pub fn serial(&self, row: usize) -> usize {
        (self.page - 1) * self.per_page + row + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_ten_rows() {
        let items: Vec<u32> = (1..=23).collect();
        let pager = Pager::default();
        assert_eq!(pager.slice(&items), &items[0..10]);
        assert_eq!(pager.serial(0), 1);
        assert_eq!(pager.total_pages(items.len()), 3);
    }

    #[test]
    fn last_page_is_partial_and_serials_continue() {
        let items: Vec<u32> = (1..=23).collect();
        let pager = Pager::default().next(23).next(23);
        assert_eq!(pager.page(), 3);
        assert_eq!(pager.slice(&items), &[21, 22, 23]);
        assert_eq!(pager.serial(0), 21);
        assert!(!pager.has_next(23));
        assert!(pager.has_prev());
    }

    #[test]
    fn paging_is_clamped() {
        let pager = Pager::default().next(5);
        assert_eq!(pager.page(), 1);
        assert_eq!(Pager::default().prev().page(), 1);
        assert_eq!(Pager::default().total_pages(0), 1);
    }

    #[test]
    fn shrinking_list_pulls_page_back() {
        let pager = Pager::default().next(30).next(30);
        assert_eq!(pager.page(), 3);
        let reloaded = pager.clamped(12);
        assert_eq!(reloaded.page(), 2);
        assert_eq!(reloaded.window(12), 10..12);
    }

    #[test]
    fn empty_list_yields_empty_slice() {
        let items: Vec<u32> = Vec::new();
        assert!(Pager::default().slice(&items).is_empty());
    }
}
