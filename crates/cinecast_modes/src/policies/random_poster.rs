//! Random pick among movies that have a poster.

use crate::{SelectionContext, SelectionPolicy, pick_random};
use async_trait::async_trait;
use cinecast_core::Movie;
use cinecast_tmdb::{MovieQuery, TmdbResult};
use tracing::{debug, instrument};

/// Fetch the first page of one query and pick a random movie with a poster.
#[derive(Debug, Clone)]
pub struct RandomPoster {
    query: MovieQuery,
}

impl RandomPoster {
    /// Random poster pick over `query`.
    pub fn new(query: MovieQuery) -> Self {
        Self { query }
    }
}

#[async_trait]
impl SelectionPolicy for RandomPoster {
    fn name(&self) -> &str {
        "random_poster"
    }

    #[instrument(skip(self, ctx), fields(endpoint = %self.query.endpoint()))]
    async fn select(&self, ctx: &mut SelectionContext<'_>) -> TmdbResult<Option<Movie>> {
        let page = ctx.fetch(&self.query, Some(1)).await?;
        let with_poster: Vec<Movie> = page
            .results
            .into_iter()
            .filter(Movie::has_poster)
            .collect();

        let choice = pick_random(&with_poster, ctx.rng()).cloned();
        debug!(
            candidates = with_poster.len(),
            chosen = ?choice.as_ref().map(|m| m.id),
            "Poster selection finished"
        );
        Ok(choice)
    }
}
