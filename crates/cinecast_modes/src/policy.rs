//! Selection policy trait and its execution context.

use async_trait::async_trait;
use cinecast_core::{Movie, MoviePage};
use cinecast_tmdb::{MovieQuery, MovieSource, QueryContext, TmdbResult};
use rand::RngCore;

/// Random source handed to policies.
pub type SelectionRng = dyn RngCore + Send + Sync;

/// Everything a policy needs for one selection.
pub struct SelectionContext<'a> {
    source: &'a dyn MovieSource,
    query: QueryContext,
    rng: &'a mut SelectionRng,
}

impl<'a> SelectionContext<'a> {
    /// Create a new selection context.
    pub fn new(source: &'a dyn MovieSource, query: QueryContext, rng: &'a mut SelectionRng) -> Self {
        Self { source, query, rng }
    }

    /// Run day and region queries are resolved against.
    pub fn query_context(&self) -> &QueryContext {
        &self.query
    }

    /// Random source for sampling steps.
    pub fn rng(&mut self) -> &mut SelectionRng {
        &mut *self.rng
    }

    /// Resolve `query` for this run and fetch one page.
    ///
    /// # Errors
    ///
    /// Returns the source's error unchanged.
    pub async fn fetch(&self, query: &MovieQuery, page: Option<u32>) -> TmdbResult<MoviePage> {
        let request = query.resolve(&self.query, page);
        self.source.fetch(&request).await
    }
}

/// Trait for candidate selection strategies.
#[async_trait]
pub trait SelectionPolicy: Send + Sync {
    /// Short policy name for logs.
    fn name(&self) -> &str;

    /// Choose one movie, or `None` when nothing qualifies.
    ///
    /// An empty result is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns error if a metadata query fails.
    async fn select(&self, ctx: &mut SelectionContext<'_>) -> TmdbResult<Option<Movie>>;
}
