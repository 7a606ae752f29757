//! No-op platform implementation for dry runs.

use crate::{Platform, PostReceipt, SocialResult};
use async_trait::async_trait;
use tracing::info;

/// Platform implementation that logs instead of posting.
#[derive(Debug, Clone, Default)]
pub struct NoOpPlatform;

impl NoOpPlatform {
    /// Create a new no-op platform.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Platform for NoOpPlatform {
    async fn post(&self, text: &str) -> SocialResult<PostReceipt> {
        info!(
            chars = text.chars().count(),
            "Dry run, post not sent:\n{}", text
        );
        Ok(PostReceipt {
            platform: self.name().to_string(),
            id: "dry-run".to_string(),
        })
    }

    fn name(&self) -> &str {
        "noop"
    }
}
