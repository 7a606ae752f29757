//! Publishing side of Cinecast.
//!
//! # Architecture
//!
//! - **Platforms**: [`Platform`] abstracts a microblogging write API. [`XPlatform`]
//!   posts to X with OAuth 1.0a user-context signing; [`NoOpPlatform`] only logs.
//! - **Publisher**: [`Publisher`] enforces the post length ceiling and turns
//!   "forbidden" refusals into a [`PublishOutcome`] instead of an error.
//!
//! # Example
//!
//! ```no_run
//! use cinecast_social::{Publisher, XCredentials, XPlatform};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = XCredentials::new("bearer", "key", "secret", "token", "token-secret");
//! let platform = XPlatform::new(credentials)?;
//! let publisher = Publisher::new(Arc::new(platform));
//!
//! let outcome = publisher.publish("🎬 Bugünün filmi").await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod oauth;
mod platform;
pub mod platforms;
mod publisher;

pub use platform::{Platform, PostReceipt, SocialResult};
pub use platforms::{NoOpPlatform, X_API_BASE, XCredentials, XPlatform};
pub use publisher::{DEFAULT_MAX_POST_LENGTH, ELLIPSIS, PublishOutcome, Publisher, truncate_post};
