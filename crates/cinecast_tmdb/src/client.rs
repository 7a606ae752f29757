//! reqwest-backed TMDB client.

use crate::{MovieRequest, MovieSource, TmdbResult};
use async_trait::async_trait;
use cinecast_core::MoviePage;
use cinecast_error::{TmdbError, TmdbErrorKind};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Timeout applied to every metadata request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`TmdbClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct TmdbConfig {
    /// API base URL without trailing slash
    pub base_url: String,
    /// API key sent as the `api_key` query parameter
    pub api_key: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl TmdbConfig {
    /// Create a config for the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for the TMDB v3 list endpoints.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    config: TmdbConfig,
    client: Client,
}

impl TmdbClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: TmdbConfig) -> TmdbResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TmdbError::new(TmdbErrorKind::ClientBuild(e.to_string())))?;

        debug!(timeout_secs = config.timeout.as_secs(), "Created TMDB client");
        Ok(Self { config, client })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// Full URL for the request's endpoint.
    pub fn url_for(&self, request: &MovieRequest) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            request.endpoint.path()
        )
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint, page = ?request.page()))]
    async fn fetch(&self, request: &MovieRequest) -> TmdbResult<MoviePage> {
        let url = self.url_for(request);
        debug!(url = %url, params = ?request.params, "Querying TMDB");

        let response = self
            .client
            .get(&url)
            .query(&request.params)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "TMDB request failed");
                TmdbError::new(TmdbErrorKind::Http(e.without_url().to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "TMDB returned an error status");
            return Err(TmdbError::new(TmdbErrorKind::Status {
                status: status.as_u16(),
                body,
            }));
        }

        let page: MoviePage = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode TMDB response");
            TmdbError::new(TmdbErrorKind::Decode(e.without_url().to_string()))
        })?;

        debug!(
            results = page.results.len(),
            total_pages = page.total_pages,
            "TMDB page received"
        );
        Ok(page)
    }
}
