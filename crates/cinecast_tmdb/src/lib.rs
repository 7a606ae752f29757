//! TMDB access for Cinecast.
//!
//! # Architecture
//!
//! - **Query model**: [`MovieQuery`] describes a list query in typed form and
//!   resolves into a concrete [`MovieRequest`] for a given run day and region.
//! - **Source trait**: [`MovieSource`] is the seam selection policies talk to.
//! - **HTTP client**: [`TmdbClient`] implements the trait against the real API.
//!
//! # Example
//!
//! ```no_run
//! use cinecast_tmdb::{Endpoint, MovieQuery, MovieSource, QueryContext, SortBy, TmdbClient, TmdbConfig};
//! use chrono::NaiveDate;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TmdbClient::new(TmdbConfig::new("api-key"))?;
//! let query = MovieQuery::new(Endpoint::Discover)
//!     .language("en-US")
//!     .sort_by(SortBy::PopularityDesc)
//!     .min_vote_count(100);
//! let ctx = QueryContext::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), "TR");
//! let page = client.fetch(&query.resolve(&ctx, Some(1))).await?;
//! println!("{} results", page.results.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod query;
mod source;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TmdbClient, TmdbConfig};
pub use query::{Endpoint, MovieQuery, MovieRequest, QueryContext, SortBy};
pub use source::{MovieSource, TmdbResult};
