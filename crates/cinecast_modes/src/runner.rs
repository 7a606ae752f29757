//! One select, render and publish cycle.

use crate::{Mode, SelectionContext, SelectionRng};
use chrono::NaiveDate;
use cinecast_error::CinecastResult;
use cinecast_social::{PublishOutcome, Publisher};
use cinecast_tmdb::{MovieSource, QueryContext};
use std::sync::Arc;
use tracing::{info, instrument};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RunOutcome {
    /// The mode's policy found nothing; no post was attempted.
    #[display("no candidate found")]
    NoCandidate,
    /// A movie was chosen and handed to the publisher.
    #[display("movie {}: {}", movie_id, outcome)]
    Published {
        /// Identifier of the chosen movie
        movie_id: u64,
        /// What the publisher did with the message
        outcome: PublishOutcome,
    },
}

/// Drives a mode against a metadata source and a publisher.
pub struct Runner {
    source: Arc<dyn MovieSource>,
    publisher: Publisher,
    region: String,
}

impl Runner {
    /// Create a new runner.
    pub fn new(
        source: Arc<dyn MovieSource>,
        publisher: Publisher,
        region: impl Into<String>,
    ) -> Self {
        Self {
            source,
            publisher,
            region: region.into(),
        }
    }

    /// Default region queries resolve against.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Select a movie for `mode`, render it and publish it once.
    ///
    /// Finding nothing is a normal outcome and publishes nothing.
    ///
    /// # Errors
    ///
    /// Returns error if a metadata query fails or the platform fails with
    /// anything other than a refusal.
    #[instrument(skip(self, mode, rng), fields(mode = %mode.key(), region = %self.region))]
    pub async fn run(
        &self,
        mode: &Mode,
        today: NaiveDate,
        rng: &mut SelectionRng,
    ) -> CinecastResult<RunOutcome> {
        let query = QueryContext::new(today, self.region.clone());
        let mut ctx = SelectionContext::new(self.source.as_ref(), query, rng);

        let Some(movie) = mode.select(&mut ctx).await? else {
            info!("{}", mode.not_found());
            return Ok(RunOutcome::NoCandidate);
        };

        info!(movie_id = movie.id, title = %movie.title, "Selected movie");
        let message = mode.render(&movie);
        let outcome = self.publisher.publish(&message).await?;

        Ok(RunOutcome::Published {
            movie_id: movie.id,
            outcome,
        })
    }
}
