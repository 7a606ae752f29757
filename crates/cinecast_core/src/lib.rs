//! Core data types for the Cinecast movie poster.
//!
//! This crate provides the value types shared by the metadata client, the
//! selection policies and the formatter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod movie;
mod window;

pub use movie::{Movie, MoviePage};
pub use window::ReleaseWindow;
