//! Error types for the Cinecast workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cinecast_error::{CinecastResult, ConfigError};
//!
//! fn load() -> CinecastResult<String> {
//!     Err(ConfigError::new("TMDB_API_KEY missing"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod mode;
mod social;
mod tmdb;

pub use config::ConfigError;
pub use error::{CinecastError, CinecastErrorKind, CinecastResult};
pub use mode::{ModeError, ModeErrorKind};
pub use social::{SocialError, SocialErrorKind};
pub use tmdb::{TmdbError, TmdbErrorKind};
