//! Typed description of metadata list queries.

use chrono::NaiveDate;
use cinecast_core::ReleaseWindow;

/// List endpoints used by the poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Endpoint {
    /// Currently popular movies.
    #[display("/movie/popular")]
    Popular,
    /// Movies trending over the last day.
    #[display("/trending/movie/day")]
    TrendingDay,
    /// Filterable discovery endpoint.
    #[display("/discover/movie")]
    Discover,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Popular => "/movie/popular",
            Self::TrendingDay => "/trending/movie/day",
            Self::Discover => "/discover/movie",
        }
    }
}

/// Server-side sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SortBy {
    /// Most popular first.
    #[display("popularity.desc")]
    PopularityDesc,
    /// Highest rated first.
    #[display("vote_average.desc")]
    VoteAverageDesc,
}

/// Per-run values a query is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    /// Day of the run, used to resolve release windows
    pub today: NaiveDate,
    /// Default region code (ISO 3166-1)
    pub region: String,
}

impl QueryContext {
    /// Create a new query context.
    pub fn new(today: NaiveDate, region: impl Into<String>) -> Self {
        Self {
            today,
            region: region.into(),
        }
    }
}

/// A concrete request: endpoint plus query-string parameters.
///
/// The API key is not part of the request; the client adds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRequest {
    /// Endpoint to call
    pub endpoint: Endpoint,
    /// Query parameters in insertion order
    pub params: Vec<(String, String)>,
}

impl MovieRequest {
    /// Look up a parameter value by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Requested page, if any.
    pub fn page(&self) -> Option<u32> {
        self.param("page").and_then(|p| p.parse().ok())
    }
}

/// Typed, chainable description of a list query.
///
/// # Examples
///
/// ```
/// use cinecast_tmdb::{Endpoint, MovieQuery, QueryContext, SortBy};
/// use cinecast_core::ReleaseWindow;
/// use chrono::NaiveDate;
///
/// let query = MovieQuery::new(Endpoint::Discover)
///     .language("tr-TR")
///     .with_region()
///     .sort_by(SortBy::PopularityDesc)
///     .window(ReleaseWindow::recent(7));
///
/// let ctx = QueryContext::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), "TR");
/// let request = query.resolve(&ctx, Some(1));
/// assert_eq!(request.param("region"), Some("TR"));
/// assert_eq!(request.param("primary_release_date.gte"), Some("2024-03-08"));
/// assert_eq!(request.page(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MovieQuery {
    endpoint: Endpoint,
    language: Option<String>,
    region: bool,
    watch_region: bool,
    sort_by: Option<SortBy>,
    window: Option<ReleaseWindow>,
    min_vote_count: Option<u32>,
    max_vote_count: Option<u32>,
    min_vote_average: Option<f64>,
    watch_provider: Option<u32>,
    original_language: Option<String>,
}

impl MovieQuery {
    /// Start a query against the given endpoint with no filters.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            language: None,
            region: false,
            watch_region: false,
            sort_by: None,
            window: None,
            min_vote_count: None,
            max_vote_count: None,
            min_vote_average: None,
            watch_provider: None,
            original_language: None,
        }
    }

    /// Endpoint this query targets.
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Response language (e.g. `tr-TR`).
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Restrict release dates to the configured default region.
    pub fn with_region(mut self) -> Self {
        self.region = true;
        self
    }

    /// Evaluate watch providers in the configured default region.
    pub fn with_watch_region(mut self) -> Self {
        self.watch_region = true;
        self
    }

    /// Server-side sort order.
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Release-date window on the primary release date.
    pub fn window(mut self, window: ReleaseWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Minimum number of ratings.
    pub fn min_vote_count(mut self, count: u32) -> Self {
        self.min_vote_count = Some(count);
        self
    }

    /// Maximum number of ratings.
    pub fn max_vote_count(mut self, count: u32) -> Self {
        self.max_vote_count = Some(count);
        self
    }

    /// Minimum average rating.
    pub fn min_vote_average(mut self, average: f64) -> Self {
        self.min_vote_average = Some(average);
        self
    }

    /// Only movies available on the given watch provider.
    pub fn watch_provider(mut self, provider_id: u32) -> Self {
        self.watch_provider = Some(provider_id);
        self
    }

    /// Only movies originally in the given language (ISO 639-1).
    pub fn original_language(mut self, language: impl Into<String>) -> Self {
        self.original_language = Some(language.into());
        self
    }

    /// Resolve into a concrete request for the given run.
    pub fn resolve(&self, ctx: &QueryContext, page: Option<u32>) -> MovieRequest {
        let mut params: Vec<(String, String)> = Vec::new();
        let mut push = |key: &str, value: String| params.push((key.to_string(), value));

        if let Some(language) = &self.language {
            push("language", language.clone());
        }
        if self.region {
            push("region", ctx.region.clone());
        }
        if let Some(sort_by) = self.sort_by {
            push("sort_by", sort_by.to_string());
        }
        if let Some(window) = self.window {
            let (from, to) = window.bounds(ctx.today);
            if let Some(from) = from {
                push("primary_release_date.gte", from.format("%Y-%m-%d").to_string());
            }
            push("primary_release_date.lte", to.format("%Y-%m-%d").to_string());
        }
        if let Some(average) = self.min_vote_average {
            push("vote_average.gte", average.to_string());
        }
        if let Some(count) = self.min_vote_count {
            push("vote_count.gte", count.to_string());
        }
        if let Some(count) = self.max_vote_count {
            push("vote_count.lte", count.to_string());
        }
        if let Some(provider) = self.watch_provider {
            push("with_watch_providers", provider.to_string());
        }
        if self.watch_region {
            push("watch_region", ctx.region.clone());
        }
        if let Some(language) = &self.original_language {
            push("with_original_language", language.clone());
        }
        if let Some(page) = page {
            push("page", page.to_string());
        }

        MovieRequest {
            endpoint: self.endpoint,
            params,
        }
    }
}
