//! Shared query parameter types for API handlers.

use facility_core::pagination::PageRequest;
use serde::Deserialize;

/// Pagination parameters (`?page=&page_size=`, `pageSize` also accepted).
///
/// Out-of-range values are replaced with defaults by [`PageRequest::new`].
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    #[serde(alias = "pageSize")]
    pub page_size: Option<i64>,
}

impl PaginationParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}
