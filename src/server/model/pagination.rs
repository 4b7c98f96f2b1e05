//! Page requests and paginated results.

use crate::model::api::PageDto;

/// Hard ceiling on items per page regardless of what the client asks for.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Validated pagination input. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Normalizes raw query values.
    ///
    /// A missing or zero page becomes 1, a missing or zero limit becomes
    /// `default_limit`, and limits are capped at `MAX_PAGE_SIZE`.
    pub fn new(page: Option<u64>, limit: Option<u64>, default_limit: u64) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(default_limit)
            .min(MAX_PAGE_SIZE);

        Self { page, limit }
    }

    /// First page holding at most `limit` items.
    pub fn first(limit: u64) -> Self {
        Self::new(None, Some(limit), limit)
    }

    /// Zero-based page index as expected by SeaORM paginators.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

/// One page of results with the total number of matching records.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

impl<T> From<Page<T>> for PageDto<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();

        Self {
            success: true,
            count: page.items.len() as u64,
            total: page.total,
            total_pages,
            current_page: page.page,
            data: page.items,
        }
    }
}
