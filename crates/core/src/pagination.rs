//! Page/page-size normalization and page envelopes for list operations.
//!
//! Out-of-range values are never clamped: a page below 1 becomes page 1 and
//! a page size outside `1..=MAX_PAGE_SIZE` becomes [`DEFAULT_PAGE_SIZE`].
//! A request for 500 rows per page therefore yields 10, not 100.

use serde::Serialize;

/// Page used when the caller omits `page` or sends a value below 1.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller omits `page_size` or sends an invalid one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size that is honored.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A normalized page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Normalize raw query values into a page request.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p,
            _ => DEFAULT_PAGE,
        };
        let page_size = match page_size {
            Some(s) if (1..=MAX_PAGE_SIZE).contains(&s) => s,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    /// SQL `LIMIT` for this page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// SQL `OFFSET` for this page: `(page - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Number of pages needed to hold `total` rows, i.e. `ceil(total / page_size)`.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 || page_size <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

/// One page of results plus the counters clients use to paginate.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_page: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            data,
            page: request.page,
            page_size: request.page_size,
            total,
            total_page: total_pages(total, request.page_size),
        }
    }

    /// Convert every item, keeping the counters.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_page: self.total_page,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
