//! Pagination types
//!
//! A `PagedList` is one page of an ordered collection plus the counts a
//! caller needs to compute adjacent-page links.

use serde::Serialize;

/// One page of results with paging metadata.
///
/// Invariants: `total_pages == ceil(total_count / page_size)` and
/// `items.len() <= page_size`.
#[derive(Debug, Clone, Serialize)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PagedList<T> {
    /// Build a page from already-sliced items and the pre-paging total.
    pub fn new(items: Vec<T>, total_count: u64, current_page: u32, page_size: u32) -> Self {
        let total_pages = total_count.div_ceil(u64::from(page_size)) as u32;
        Self {
            items,
            total_count,
            current_page,
            page_size,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Convert the page's items, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            current_page: self.current_page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
