//! Length enforcement and refusal handling around a platform.

use crate::{Platform, PostReceipt, SocialResult};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Hard ceiling for a post, kept below the platform's 280 characters.
pub const DEFAULT_MAX_POST_LENGTH: usize = 270;

/// Marker appended to truncated posts.
pub const ELLIPSIS: &str = "...";

/// Cut `text` to at most `max_len` characters, ending in [`ELLIPSIS`].
///
/// Lengths are counted in characters, not bytes. Text at or under the
/// ceiling is returned unchanged.
///
/// # Examples
///
/// ```
/// use cinecast_social::truncate_post;
///
/// assert_eq!(truncate_post("short", 270), "short");
/// assert_eq!(truncate_post("abcdefghij", 8), "abcde...");
/// ```
pub fn truncate_post(text: &str, max_len: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_len {
        return Cow::Borrowed(text);
    }
    let keep = max_len.saturating_sub(ELLIPSIS.chars().count());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

/// What happened to a message handed to the publisher.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PublishOutcome {
    /// The platform accepted the post.
    #[display("published {}", _0)]
    Posted(PostReceipt),
    /// The platform refused it as a duplicate of an earlier post.
    #[display("skipped duplicate")]
    Duplicate,
    /// The platform refused it for another reason.
    #[display("rejected: {}", _0)]
    Rejected(String),
}

/// Sends rendered messages to a platform.
#[derive(Clone)]
pub struct Publisher {
    platform: Arc<dyn Platform>,
    max_length: usize,
}

impl Publisher {
    /// Create a publisher with the default length ceiling.
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self {
            platform,
            max_length: DEFAULT_MAX_POST_LENGTH,
        }
    }

    /// Override the length ceiling.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Current length ceiling.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Name of the underlying platform.
    pub fn platform_name(&self) -> &str {
        self.platform.name()
    }

    /// Publish a message as a single post.
    ///
    /// Refusals are not errors: a duplicate refusal yields
    /// [`PublishOutcome::Duplicate`], any other refusal
    /// [`PublishOutcome::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns every platform error other than a refusal.
    #[instrument(skip(self, message), fields(platform = %self.platform.name(), max_length = self.max_length))]
    pub async fn publish(&self, message: &str) -> SocialResult<PublishOutcome> {
        let text = truncate_post(message, self.max_length);
        if let Cow::Owned(_) = text {
            warn!(
                original = message.chars().count(),
                truncated = text.chars().count(),
                "Message over length ceiling, truncated"
            );
        }

        match self.platform.post(&text).await {
            Ok(receipt) => {
                info!(receipt = %receipt, "Post sent");
                Ok(PublishOutcome::Posted(receipt))
            }
            Err(e) if e.kind.is_duplicate() => {
                info!("Same content was already posted, skipping");
                Ok(PublishOutcome::Duplicate)
            }
            Err(e) if e.kind.is_forbidden() => {
                warn!(detail = %e.kind, "Platform refused the post, skipping");
                Ok(PublishOutcome::Rejected(e.kind.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}
