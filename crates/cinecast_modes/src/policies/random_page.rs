//! Randomized-quality policy: random page, then random movie.

use crate::{SelectionContext, SelectionPolicy, pick_random, random_page};
use async_trait::async_trait;
use cinecast_core::{Movie, MoviePage};
use cinecast_tmdb::{MovieQuery, TmdbResult};
use tracing::{debug, instrument, warn};

/// Sample a random page of one query, then a random movie from it.
///
/// A first request without a page number learns the page count; the sampled
/// page falls back to that first page's results when it comes back empty.
///
/// Wider queries added with [`RandomPage::or_else`] are tried when the first
/// page of every earlier query is empty. Only the query whose first page has
/// results is sampled; when none has, nothing is sampled.
///
/// # Examples
///
/// ```
/// use cinecast_modes::RandomPage;
/// use cinecast_tmdb::{Endpoint, MovieQuery};
///
/// let policy = RandomPage::new(MovieQuery::new(Endpoint::Discover).max_vote_count(2000), 30)
///     .or_else("Relaxing vote range", MovieQuery::new(Endpoint::Discover));
/// assert_eq!(policy.stages(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RandomPage {
    query: MovieQuery,
    max_pages: u32,
    fallbacks: Vec<(String, MovieQuery)>,
}

impl RandomPage {
    /// Sample over at most `max_pages` pages of `query`.
    pub fn new(query: MovieQuery, max_pages: u32) -> Self {
        Self {
            query,
            max_pages,
            fallbacks: Vec::new(),
        }
    }

    /// Add a wider query, tried when every earlier first page came back empty.
    ///
    /// `notice` is logged when the relaxation happens.
    pub fn or_else(mut self, notice: impl Into<String>, query: MovieQuery) -> Self {
        self.fallbacks.push((notice.into(), query));
        self
    }

    /// Page ceiling.
    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Number of queries, strict one included.
    pub fn stages(&self) -> usize {
        1 + self.fallbacks.len()
    }

    /// First page of each query in order until one has results.
    ///
    /// A lone query is returned with its first page even when empty.
    async fn first_page(
        &self,
        ctx: &SelectionContext<'_>,
    ) -> TmdbResult<Option<(&MovieQuery, MoviePage)>> {
        let mut first = ctx.fetch(&self.query, None).await?;
        if !first.is_empty() || self.fallbacks.is_empty() {
            return Ok(Some((&self.query, first)));
        }

        for (notice, query) in &self.fallbacks {
            warn!("{}", notice);
            first = ctx.fetch(query, None).await?;
            if !first.is_empty() {
                return Ok(Some((query, first)));
            }
        }

        Ok(None)
    }
}

#[async_trait]
impl SelectionPolicy for RandomPage {
    fn name(&self) -> &str {
        "random_page"
    }

    #[instrument(skip(self, ctx), fields(endpoint = %self.query.endpoint(), max_pages = self.max_pages, stages = self.stages()))]
    async fn select(&self, ctx: &mut SelectionContext<'_>) -> TmdbResult<Option<Movie>> {
        let Some((query, first)) = self.first_page(ctx).await? else {
            debug!("Every query came back empty");
            return Ok(None);
        };

        let page_number = random_page(first.total_pages, self.max_pages, ctx.rng());
        debug!(
            total_pages = first.total_pages,
            page = page_number,
            "Sampling random page"
        );

        let page = ctx.fetch(query, Some(page_number)).await?;
        let pool = if page.results.is_empty() {
            debug!(page = page_number, "Sampled page empty, using first page results");
            &first.results
        } else {
            &page.results
        };

        let choice = pick_random(pool, ctx.rng()).cloned();
        debug!(
            candidates = pool.len(),
            chosen = ?choice.as_ref().map(|m| m.id),
            "Random selection finished"
        );
        Ok(choice)
    }
}
