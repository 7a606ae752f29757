//! Configuration and credential error type.

/// Settings or credentials could not be loaded.
///
/// Raised before any network call: bad settings files, wrongly typed values,
/// or missing credentials. Missing credentials are reported together.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong with the configuration
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Error naming every missing environment variable at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinecast_error::ConfigError;
    ///
    /// let err = ConfigError::missing_variables(&["TMDB_API_KEY", "X_API_SECRET"]);
    /// assert_eq!(err.message, "Missing environment variables: TMDB_API_KEY, X_API_SECRET");
    /// ```
    #[track_caller]
    pub fn missing_variables(names: &[&str]) -> Self {
        Self::new(format!("Missing environment variables: {}", names.join(", ")))
    }

    /// A setting holds a value the run cannot work with.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinecast_error::ConfigError;
    ///
    /// let err = ConfigError::invalid_setting("tmdb.timeout_secs", "must be at least 1");
    /// assert_eq!(err.message, "Invalid setting tmdb.timeout_secs: must be at least 1");
    /// ```
    #[track_caller]
    pub fn invalid_setting(key: &str, reason: &str) -> Self {
        Self::new(format!("Invalid setting {}: {}", key, reason))
    }
}
