//! Fixed-size page window over the list.

use std::ops::Range;

use crate::config::DEFAULT_PAGE_SIZE;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Number of pages needed for `count` items.
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// A link in the page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    pub active: bool,
}

/// Current page (1-based) and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    current: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self { current: 1, page_size: page_size.max(1) }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }

    /// Index range of the items on the current page.
    #[must_use]
    pub fn visible_range(&self, count: usize) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(count);
        let end = (start + self.page_size).min(count);
        start..end
    }

    /// Switch to `page`. Returns `false` and leaves the page alone when
    /// `page` is outside `1..=total_pages`.
    pub fn go_to(&mut self, page: usize, count: usize) -> bool {
        if page == 0 || page > self.total_pages(count) {
            return false;
        }
        self.current = page;
        true
    }

    /// Pull the current page back inside `1..=total_pages` after the list
    /// shrank.
    pub fn clamp(&mut self, count: usize) {
        self.current = self.current.min(self.total_pages(count)).max(1);
    }

    /// Links for the page selector; empty when everything fits on one page.
    #[must_use]
    pub fn links(&self, count: usize) -> Vec<PageLink> {
        let total = self.total_pages(count);
        if total <= 1 {
            return Vec::new();
        }
        (1..=total)
            .map(|number| PageLink { number, active: number == self.current })
            .collect()
    }
}
