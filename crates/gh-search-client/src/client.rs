//! Search client trait definition
//!
//! This module defines the core `SearchClient` trait that all client
//! implementations must satisfy.

use crate::error::SearchError;
use crate::types::SearchResponse;
use async_trait::async_trait;

/// GitHub repository search client
///
/// Defines the one operation the application needs from GitHub: a keyword
/// search with paging parameters. Implementations can hit the real API or
/// serve canned data in tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Search repositories by keyword
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search expression (the `q` parameter)
    /// * `per_page` - Page size
    /// * `page` - 1-based page index
    ///
    /// # Returns
    ///
    /// The decoded response body, or a [`SearchError`] describing why no
    /// body was available. Exactly one request is issued per call; there
    /// are no retries at this layer.
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
        page: u32,
    ) -> Result<SearchResponse, SearchError>;
}
