//! Social media platform trait and types.

use async_trait::async_trait;
use cinecast_error::SocialError;
use serde::{Deserialize, Serialize};

/// Result type for platform operations.
pub type SocialResult<T> = Result<T, SocialError>;

/// Confirmation of a successful post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{} post {}", platform, id)]
pub struct PostReceipt {
    /// Platform name (e.g., "x", "noop")
    pub platform: String,
    /// Platform-specific post identifier
    pub id: String,
}

/// Trait for microblogging write APIs.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Publish a single text post.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The request cannot be delivered
    /// - The platform refuses the post (`Forbidden`)
    /// - The platform answers with any other error status
    async fn post(&self, text: &str) -> SocialResult<PostReceipt>;

    /// Get platform name.
    fn name(&self) -> &str;
}
