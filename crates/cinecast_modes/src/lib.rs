//! Movie selection, message formatting and the mode catalog.
//!
//! # Architecture
//!
//! - **Selection steps** ([`pick_best`], [`pick_random`], [`random_page`]): pure
//!   functions over candidate lists.
//! - **Policies** ([`SelectionPolicy`]): reusable strategies built from those
//!   steps ([`BestOf`], [`RandomPage`], [`RandomPoster`], [`Relaxed`]).
//! - **Templates** ([`Template`]): render a chosen movie into post text.
//! - **Modes** ([`Mode`], [`ModeRegistry`]): a key bound to one policy and one
//!   template; [`ModeRegistry::builtin`] holds the shipped catalog.
//! - **Runner** ([`Runner`]): one select, render, publish cycle.
//!
//! # Example
//!
//! ```no_run
//! use cinecast_modes::{ModeRegistry, Runner};
//! use cinecast_social::{NoOpPlatform, Publisher};
//! use cinecast_tmdb::{TmdbClient, TmdbConfig};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ModeRegistry::builtin()?;
//! let mode = registry.resolve("13")?;
//!
//! let source = Arc::new(TmdbClient::new(TmdbConfig::new("api-key"))?);
//! let publisher = Publisher::new(Arc::new(NoOpPlatform::new()));
//! let runner = Runner::new(source, publisher, "TR");
//!
//! let today = chrono::Local::now().date_naive();
//! let outcome = runner.run(&mode, today, &mut StdRng::from_entropy()).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod mode;
mod policy;
pub mod policies;
mod runner;
mod selection;
mod template;

pub use mode::{Mode, ModeRegistry};
pub use policies::{BestOf, RandomPage, RandomPoster, Relaxed};
pub use policy::{SelectionContext, SelectionPolicy, SelectionRng};
pub use runner::{RunOutcome, Runner};
pub use selection::{
    DEFAULT_MIN_VOTES, clamp_page_count, pick_best, pick_random, random_page, rank_order,
};
pub use template::{
    Body, DETAIL_BASE_URL, DateStyle, POSTER_BASE_URL, SUMMARY_ELLIPSIS, Template, detail_url,
    poster_url, shorten,
};
