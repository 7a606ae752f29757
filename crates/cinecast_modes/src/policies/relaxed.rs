//! Relaxation: strict policy first, wider ones only after an empty result.

use crate::{SelectionContext, SelectionPolicy};
use async_trait::async_trait;
use cinecast_core::Movie;
use cinecast_tmdb::TmdbResult;
use tracing::{debug, instrument, warn};

struct Fallback {
    notice: String,
    policy: Box<dyn SelectionPolicy>,
}

/// Chain of policies tried in order until one yields a movie.
///
/// Each fallback carries the notice logged when the stage before it came up
/// empty.
///
/// # Examples
///
/// ```
/// use cinecast_modes::{BestOf, Relaxed, SelectionPolicy};
/// use cinecast_tmdb::{Endpoint, MovieQuery};
///
/// let policy = Relaxed::new(BestOf::new(MovieQuery::new(Endpoint::Discover)).min_votes(1))
///     .or_else(
///         "Nothing recent, falling back to trending",
///         BestOf::new(MovieQuery::new(Endpoint::TrendingDay)).min_votes(1),
///     );
/// assert_eq!(policy.stages(), 2);
/// assert_eq!(policy.name(), "relaxed");
/// ```
pub struct Relaxed {
    strict: Box<dyn SelectionPolicy>,
    fallbacks: Vec<Fallback>,
}

impl Relaxed {
    /// Start with the strictest policy.
    pub fn new(strict: impl SelectionPolicy + 'static) -> Self {
        Self {
            strict: Box::new(strict),
            fallbacks: Vec::new(),
        }
    }

    /// Add a wider policy, tried after every earlier stage came up empty.
    pub fn or_else(
        mut self,
        notice: impl Into<String>,
        policy: impl SelectionPolicy + 'static,
    ) -> Self {
        self.fallbacks.push(Fallback {
            notice: notice.into(),
            policy: Box::new(policy),
        });
        self
    }

    /// Number of stages, strict one included.
    pub fn stages(&self) -> usize {
        1 + self.fallbacks.len()
    }
}

#[async_trait]
impl SelectionPolicy for Relaxed {
    fn name(&self) -> &str {
        "relaxed"
    }

    #[instrument(skip(self, ctx), fields(stages = self.stages()))]
    async fn select(&self, ctx: &mut SelectionContext<'_>) -> TmdbResult<Option<Movie>> {
        if let Some(movie) = self.strict.select(ctx).await? {
            debug!(policy = self.strict.name(), "Strict stage produced a movie");
            return Ok(Some(movie));
        }

        for (index, fallback) in self.fallbacks.iter().enumerate() {
            warn!(stage = index + 1, "{}", fallback.notice);
            if let Some(movie) = fallback.policy.select(ctx).await? {
                return Ok(Some(movie));
            }
        }

        Ok(None)
    }
}
