//! Mode lookup and definition error types.

/// Error kinds for mode dispatch.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ModeErrorKind {
    /// No mode is registered under the given key.
    #[display("Unknown mode '{}' (available: {})", key, available)]
    UnknownMode {
        /// Key that was requested
        key: String,
        /// Comma-separated list of registered keys
        available: String,
    },

    /// A mode definition is internally inconsistent.
    #[display("Invalid mode definition: {}", _0)]
    InvalidDefinition(String),
}

/// Mode error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Mode Error: {} at line {} in {}", kind, line, file)]
pub struct ModeError {
    /// The error kind
    pub kind: ModeErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ModeError {
    /// Create a new ModeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
