//! Deterministic best-of policy.

use crate::{DEFAULT_MIN_VOTES, SelectionContext, SelectionPolicy, pick_best};
use async_trait::async_trait;
use cinecast_core::Movie;
use cinecast_tmdb::{MovieQuery, TmdbResult};
use tracing::{debug, instrument};

/// Fetch the first page of one query and take the best-ranked movie.
#[derive(Debug, Clone)]
pub struct BestOf {
    query: MovieQuery,
    min_votes: u64,
}

impl BestOf {
    /// Best-of over `query` with the default vote threshold.
    pub fn new(query: MovieQuery) -> Self {
        Self {
            query,
            min_votes: DEFAULT_MIN_VOTES,
        }
    }

    /// Override the vote threshold.
    pub fn min_votes(mut self, min_votes: u64) -> Self {
        self.min_votes = min_votes;
        self
    }

    /// Query this policy runs.
    pub fn query(&self) -> &MovieQuery {
        &self.query
    }
}

#[async_trait]
impl SelectionPolicy for BestOf {
    fn name(&self) -> &str {
        "best_of"
    }

    #[instrument(skip(self, ctx), fields(endpoint = %self.query.endpoint(), min_votes = self.min_votes))]
    async fn select(&self, ctx: &mut SelectionContext<'_>) -> TmdbResult<Option<Movie>> {
        let page = ctx.fetch(&self.query, Some(1)).await?;
        let choice = pick_best(&page.results, self.min_votes).cloned();

        debug!(
            candidates = page.results.len(),
            chosen = ?choice.as_ref().map(|m| m.id),
            "Best-of selection finished"
        );
        Ok(choice)
    }
}
