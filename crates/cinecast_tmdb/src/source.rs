//! Trait for anything that can answer movie list queries.

use crate::MovieRequest;
use async_trait::async_trait;
use cinecast_core::MoviePage;
use cinecast_error::TmdbError;

/// Result type for metadata service operations.
pub type TmdbResult<T> = Result<T, TmdbError>;

/// A read-only source of movie list pages.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Fetch one page of results for a resolved request.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The request cannot be delivered or times out
    /// - The service answers with a non-success status
    /// - The response body is not a list page
    async fn fetch(&self, request: &MovieRequest) -> TmdbResult<MoviePage>;
}
