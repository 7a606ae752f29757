//! Movie metadata service error types.

/// Error kinds for metadata service calls.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum TmdbErrorKind {
    /// Transport failure (connect, timeout, TLS).
    #[display("TMDB request failed: {}", _0)]
    Http(String),

    /// Non-success HTTP status.
    #[display("TMDB returned HTTP {}: {}", status, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Response body was not the expected JSON shape.
    #[display("Failed to decode TMDB response: {}", _0)]
    Decode(String),

    /// Client could not be constructed.
    #[display("Failed to build TMDB client: {}", _0)]
    ClientBuild(String),
}

/// Metadata service error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("TMDB Error: {} at line {} in {}", kind, line, file)]
pub struct TmdbError {
    /// The error kind
    pub kind: TmdbErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl TmdbError {
    /// Create a new TmdbError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TmdbErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
