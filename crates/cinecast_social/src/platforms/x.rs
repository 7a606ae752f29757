//! X (formerly Twitter) platform implementation.

use crate::oauth::{self, Nonce, OAuthKeys};
use crate::{Platform, PostReceipt, SocialResult};
use async_trait::async_trait;
use cinecast_error::{SocialError, SocialErrorKind};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use tracing::{debug, error, info, instrument};

/// Production API v2 base URL.
pub const X_API_BASE: &str = "https://api.twitter.com/2";

/// The five credential values issued for an X app and its user.
#[derive(Clone, PartialEq, Eq)]
pub struct XCredentials {
    /// App-only bearer token
    pub bearer_token: String,
    /// Consumer (API) key
    pub api_key: String,
    /// Consumer (API) secret
    pub api_secret: String,
    /// User access token
    pub access_token: String,
    /// User access token secret
    pub access_secret: String,
}

impl XCredentials {
    /// Bundle the five credential values.
    pub fn new(
        bearer_token: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            access_token: access_token.into(),
            access_secret: access_secret.into(),
        }
    }

    /// Keys used for user-context request signing.
    pub fn oauth_keys(&self) -> OAuthKeys {
        OAuthKeys {
            consumer_key: self.api_key.clone(),
            consumer_secret: self.api_secret.clone(),
            token: self.access_token.clone(),
            token_secret: self.access_secret.clone(),
        }
    }
}

impl fmt::Debug for XCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XCredentials")
            .field("api_key", &self.api_key)
            .field("bearer_token", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct CreatePostResponse {
    data: CreatedPost,
}

#[derive(Debug, Deserialize)]
struct CreatedPost {
    id: String,
}

#[derive(Debug, Default, Deserialize)]
struct ApiProblem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    errors: Vec<ApiProblemItem>,
}

#[derive(Debug, Deserialize)]
struct ApiProblemItem {
    #[serde(default)]
    message: Option<String>,
}

/// Human-readable message from an error response body.
///
/// Joins every message field the API reported; falls back to the raw body.
fn problem_message(body: &str) -> String {
    let problem: ApiProblem = serde_json::from_str(body).unwrap_or_default();
    let parts: Vec<String> = problem
        .title
        .into_iter()
        .chain(problem.detail)
        .chain(problem.errors.into_iter().filter_map(|e| e.message))
        .collect();

    if parts.is_empty() {
        body.trim().to_string()
    } else {
        parts.join(": ")
    }
}

/// X platform implementation.
///
/// Posts through the v2 `POST /tweets` endpoint with OAuth 1.0a user-context
/// signing.
pub struct XPlatform {
    credentials: XCredentials,
    api_base: String,
    client: Client,
}

impl XPlatform {
    /// Create a new X platform instance against the production API.
    ///
    /// # Errors
    ///
    /// Returns error if any signing credential is empty.
    pub fn new(credentials: XCredentials) -> SocialResult<Self> {
        Self::with_api_base(credentials, X_API_BASE)
    }

    /// Create a new X platform instance against a custom API base.
    ///
    /// # Errors
    ///
    /// Returns error if any signing credential is empty.
    #[instrument(skip_all)]
    pub fn with_api_base(
        credentials: XCredentials,
        api_base: impl Into<String>,
    ) -> SocialResult<Self> {
        let empty: Vec<&str> = [
            ("api_key", &credentials.api_key),
            ("api_secret", &credentials.api_secret),
            ("access_token", &credentials.access_token),
            ("access_secret", &credentials.access_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !empty.is_empty() {
            return Err(SocialError::new(SocialErrorKind::InvalidCredentials(
                format!("empty values: {}", empty.join(", ")),
            )));
        }

        let api_base = api_base.into().trim_end_matches('/').to_string();
        debug!(api_base = %api_base, "Created X platform instance");

        Ok(Self {
            credentials,
            api_base,
            client: Client::new(),
        })
    }

    /// Endpoint posts are sent to.
    pub fn post_url(&self) -> String {
        format!("{}/tweets", self.api_base)
    }
}

#[async_trait]
impl Platform for XPlatform {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn post(&self, text: &str) -> SocialResult<PostReceipt> {
        let url = self.post_url();
        let authorization = oauth::authorization_header(
            &self.credentials.oauth_keys(),
            "POST",
            &url,
            &[],
            &Nonce::generate(),
        )?;

        debug!(url = %url, "Posting to X");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "X request failed");
                SocialError::new(SocialErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read X response");
            SocialError::new(SocialErrorKind::Http(e.to_string()))
        })?;

        if status == StatusCode::FORBIDDEN {
            let message = problem_message(&body);
            debug!(message = %message, "X refused the post");
            return Err(SocialError::new(SocialErrorKind::Forbidden(message)));
        }

        if !status.is_success() {
            let message = problem_message(&body);
            error!(status = %status, message = %message, "X API error");
            return Err(SocialError::new(SocialErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let created: CreatePostResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, body = %body, "Failed to decode X response");
            SocialError::new(SocialErrorKind::Decode(e.to_string()))
        })?;

        info!(post_id = %created.data.id, "Post published to X");
        Ok(PostReceipt {
            platform: self.name().to_string(),
            id: created.data.id,
        })
    }

    fn name(&self) -> &str {
        "x"
    }
}
