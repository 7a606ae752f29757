//! Platform implementations.

pub mod noop;
pub mod x;

pub use noop::NoOpPlatform;
pub use x::{X_API_BASE, XCredentials, XPlatform};
