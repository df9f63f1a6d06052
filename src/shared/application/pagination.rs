/// Page-accumulating list used by every paged catalog view
///
/// Catalog endpoints are 1-based and report `total_pages`; the list keeps
/// what has been loaded so far and where the next page starts.
use serde::{Deserialize, Serialize};

/// One page of results as returned by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, total_pages: u32, total_results: u32) -> Self {
        Self {
            items,
            page,
            total_pages,
            total_results,
        }
    }

    /// A first page with no results
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// Items accumulated across pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
        }
    }
}

impl<T> PagedList<T> {
    /// Drop everything loaded so far and start over from `page`
    pub fn replace(&mut self, page: Page<T>) {
        self.items = page.items;
        self.page = page.page.max(1);
        self.total_pages = page.total_pages;
    }

    /// Append a subsequent page; never replaces what is already there
    pub fn append(&mut self, page: Page<T>) {
        self.items.extend(page.items);
        self.page = page.page.max(self.page);
        self.total_pages = page.total_pages;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn next_page(&self) -> u32 {
        self.page + 1
    }
}
