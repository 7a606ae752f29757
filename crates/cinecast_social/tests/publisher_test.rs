//! Tests for the publisher with mock platforms.

use async_trait::async_trait;
use cinecast_error::{SocialError, SocialErrorKind};
use cinecast_social::{
    DEFAULT_MAX_POST_LENGTH, ELLIPSIS, NoOpPlatform, Platform, PostReceipt, PublishOutcome,
    Publisher, SocialResult, truncate_post,
};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock platform that records posts and answers with a fixed result.
struct MockPlatform {
    posts: Mutex<Vec<String>>,
    failure: Option<SocialErrorKind>,
}

impl MockPlatform {
    fn accepting() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    fn failing(kind: SocialErrorKind) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            failure: Some(kind),
        }
    }

    fn posts(&self) -> Vec<String> {
        self.posts.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn post(&self, text: &str) -> SocialResult<PostReceipt> {
        self.posts.lock().expect("lock").push(text.to_string());
        match &self.failure {
            Some(kind) => Err(SocialError::new(kind.clone())),
            None => Ok(PostReceipt {
                platform: "mock".to_string(),
                id: "mock_post_123".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[tokio::test]
async fn accepted_post_returns_receipt() {
    let platform = Arc::new(MockPlatform::accepting());
    let publisher = Publisher::new(platform.clone());

    let outcome = publisher.publish("Test post").await.expect("publish succeeds");

    assert_eq!(
        outcome,
        PublishOutcome::Posted(PostReceipt {
            platform: "mock".to_string(),
            id: "mock_post_123".to_string(),
        })
    );
    assert_eq!(platform.posts(), vec!["Test post".to_string()]);
}

#[tokio::test]
async fn duplicate_refusal_is_skipped_not_raised() {
    let platform = Arc::new(MockPlatform::failing(SocialErrorKind::Forbidden(
        "forbidden: duplicate content detected".to_string(),
    )));
    let publisher = Publisher::new(platform.clone());

    let outcome = publisher.publish("Same post again").await.expect("no error raised");

    assert_eq!(outcome, PublishOutcome::Duplicate);
    assert_eq!(platform.posts().len(), 1);
}

#[tokio::test]
async fn other_refusal_is_swallowed_with_detail() {
    let platform = Arc::new(MockPlatform::failing(SocialErrorKind::Forbidden(
        "You are not permitted to perform this action.".to_string(),
    )));
    let publisher = Publisher::new(platform);

    let outcome = publisher.publish("Post").await.expect("no error raised");

    match outcome {
        PublishOutcome::Rejected(detail) => assert!(detail.contains("not permitted")),
        other => panic!("unexpected outcome: {other}"),
    }
}

#[tokio::test]
async fn non_refusal_errors_propagate() {
    let platform = Arc::new(MockPlatform::failing(SocialErrorKind::Api {
        status: 503,
        message: "Service Unavailable".to_string(),
    }));
    let publisher = Publisher::new(platform);

    let err = publisher.publish("Post").await.expect_err("error propagates");
    assert!(matches!(err.kind, SocialErrorKind::Api { status: 503, .. }));
}

#[tokio::test]
async fn transport_errors_propagate() {
    let platform = Arc::new(MockPlatform::failing(SocialErrorKind::Http(
        "connection reset".to_string(),
    )));
    let publisher = Publisher::new(platform);

    let err = publisher.publish("Post").await.expect_err("error propagates");
    assert!(matches!(err.kind, SocialErrorKind::Http(_)));
}

#[tokio::test]
async fn long_message_is_truncated_before_posting() {
    let platform = Arc::new(MockPlatform::accepting());
    let publisher = Publisher::new(platform.clone());
    let message = "a".repeat(400);

    publisher.publish(&message).await.expect("publish succeeds");

    let sent = platform.posts();
    assert_eq!(sent[0].chars().count(), DEFAULT_MAX_POST_LENGTH);
    assert!(sent[0].ends_with(ELLIPSIS));
}

#[tokio::test]
async fn custom_ceiling_is_honoured() {
    let platform = Arc::new(MockPlatform::accepting());
    let publisher = Publisher::new(platform.clone()).with_max_length(10);
    assert_eq!(publisher.max_length(), 10);

    publisher.publish("0123456789ABC").await.expect("publish succeeds");
    assert_eq!(platform.posts()[0], "0123456...");
}

#[tokio::test]
async fn noop_platform_always_succeeds() {
    let publisher = Publisher::new(Arc::new(NoOpPlatform::new()));
    assert_eq!(publisher.platform_name(), "noop");

    let outcome = publisher.publish("dry run").await.expect("publish succeeds");
    assert!(matches!(outcome, PublishOutcome::Posted(receipt) if receipt.platform == "noop"));
}

proptest! {
    #[test]
    fn truncation_hits_ceiling_exactly(text in "\\PC{0,600}") {
        let out = truncate_post(&text, DEFAULT_MAX_POST_LENGTH);
        let len = text.chars().count();
        if len > DEFAULT_MAX_POST_LENGTH {
            prop_assert_eq!(out.chars().count(), DEFAULT_MAX_POST_LENGTH);
            prop_assert!(out.ends_with(ELLIPSIS));
            let kept: String = text.chars().take(DEFAULT_MAX_POST_LENGTH - 3).collect();
            prop_assert!(out.starts_with(&kept));
        } else {
            prop_assert_eq!(out.as_ref(), text.as_str());
        }
    }
}
