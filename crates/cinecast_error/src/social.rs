//! Publishing platform error types.

/// Error kinds for publishing operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum SocialErrorKind {
    /// Transport failure (connect, timeout, TLS).
    #[display("Platform request failed: {}", _0)]
    Http(String),

    /// The platform refused the post (HTTP 403).
    #[display("Forbidden: {}", _0)]
    Forbidden(String),

    /// Any other non-success response.
    #[display("Platform API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message reported by the platform
        message: String,
    },

    /// Response body was not the expected JSON shape.
    #[display("Failed to decode platform response: {}", _0)]
    Decode(String),

    /// Request signature could not be computed.
    #[display("Failed to sign request: {}", _0)]
    Signing(String),

    /// Credentials were rejected before any request was made.
    #[display("Invalid credentials: {}", _0)]
    InvalidCredentials(String),
}

impl SocialErrorKind {
    /// Check whether the platform refused the post.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// Check whether this is a refusal caused by duplicate content.
    ///
    /// Matches on the platform's human-readable message, so it is a
    /// best-effort classification only.
    pub fn is_duplicate(&self) -> bool {
        match self {
            Self::Forbidden(message) => message.to_lowercase().contains("duplicate"),
            _ => false,
        }
    }
}

/// Publishing error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Social Error: {} at line {} in {}", kind, line, file)]
pub struct SocialError {
    /// The error kind
    pub kind: SocialErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl SocialError {
    /// Create a new SocialError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SocialErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
