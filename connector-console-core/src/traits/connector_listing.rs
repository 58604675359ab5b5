//! Connector listing abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Connector, PaginatedResponse, PaginationParams};

/// Connector listing backend Trait
///
/// Implementations map transport and backend failures to
/// [`CoreError::FetchError`](crate::CoreError::FetchError).
#[async_trait]
pub trait ConnectorListing: Send + Sync {
    /// Fetch one page of connectors, in backend order
    ///
    /// # Arguments
    /// * `params` - Page number and page size
    async fn fetch_page(&self, params: &PaginationParams)
        -> CoreResult<PaginatedResponse<Connector>>;
}
