//! Pagination type definitions

use serde::{Deserialize, Serialize};

/// Pagination parameters for page requests.
///
/// # Default
///
/// The default is `page = 1, page_size = 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

impl PaginationParams {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size.max(1)),
        }
    }
}

/// A paginated response wrapper.
///
/// Contains the current page of items along with pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, automatically computing [`has_more`](Self::has_more).
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32) -> Self {
        let has_more = page.saturating_mul(page_size) < total_count;
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

/// The page currently held by the collection controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationWindow {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page, always `> 0`.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
}

impl PaginationWindow {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    /// `ceil(total_count / page_size)`
    pub fn total_pages(&self) -> u32 {
        self.total_count.div_ceil(self.page_size.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Request parameters for `page` under this window's page size
    pub fn params_for(&self, page: u32) -> PaginationParams {
        PaginationParams {
            page: page.max(1),
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let mut window = PaginationWindow::new(20);
        assert_eq!(window.total_pages(), 0);
        assert!(!window.has_next());

        window.total_count = 41;
        assert_eq!(window.total_pages(), 3);
        assert!(window.has_next());

        window.page = 3;
        assert!(!window.has_next());
        assert!(window.has_previous());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let window = PaginationWindow::new(0);
        assert_eq!(window.page_size, 1);

        let params = PaginationParams { page: 0, page_size: 500 }.validated(100);
        assert_eq!(params, PaginationParams { page: 1, page_size: 100 });
    }

    #[test]
    fn has_more_is_derived() {
        let resp = PaginatedResponse::new(vec![1, 2], 1, 2, 3);
        assert!(resp.has_more);
        let resp = PaginatedResponse::new(vec![3], 2, 2, 3);
        assert!(!resp.has_more);
    }
}
