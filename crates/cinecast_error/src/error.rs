//! Top-level error wrapper types.

use crate::{ConfigError, ModeError, SocialError, TmdbError};

/// Every error condition a Cinecast run can end with.
///
/// # Examples
///
/// ```
/// use cinecast_error::{CinecastError, TmdbError, TmdbErrorKind};
///
/// let err: CinecastError = TmdbError::new(TmdbErrorKind::Http("timed out".into())).into();
/// assert!(format!("{}", err).contains("TMDB"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CinecastErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Metadata service error
    #[from(TmdbError)]
    Tmdb(TmdbError),
    /// Publishing platform error
    #[from(SocialError)]
    Social(SocialError),
    /// Mode dispatch error
    #[from(ModeError)]
    Mode(ModeError),
}

/// Cinecast error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cinecast Error: {}", _0)]
pub struct CinecastError(Box<CinecastErrorKind>);

impl CinecastError {
    /// Create a new error from a kind.
    pub fn new(kind: CinecastErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CinecastErrorKind {
        &self.0
    }
}

impl<T> From<T> for CinecastError
where
    T: Into<CinecastErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Cinecast operations.
pub type CinecastResult<T> = std::result::Result<T, CinecastError>;
