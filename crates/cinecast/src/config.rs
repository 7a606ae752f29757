//! Run configuration: layered settings plus credentials from the environment.
//!
//! Settings are merged from three sources, later ones winning:
//! 1. Bundled defaults (include_str! from cinecast.toml)
//! 2. User override (./cinecast.toml)
//! 3. `CINECAST__SECTION__KEY` environment variables
//!
//! Credentials never come from files. They are read from the environment
//! (after `.env` is loaded) and validated together so one error names every
//! missing variable.

use cinecast_error::ConfigError;
use cinecast_social::{ELLIPSIS, XCredentials};
use cinecast_tmdb::TmdbConfig;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default settings.
const DEFAULT_SETTINGS: &str = include_str!("../cinecast.toml");

/// Metadata service API key.
pub const TMDB_API_KEY: &str = "TMDB_API_KEY";
/// Optional override of the default region.
pub const TMDB_DEFAULT_REGION: &str = "TMDB_DEFAULT_REGION";
/// X app bearer token.
pub const X_BEARER_TOKEN: &str = "X_BEARER_TOKEN";
/// X consumer key.
pub const X_API_KEY: &str = "X_API_KEY";
/// X consumer secret.
pub const X_API_SECRET: &str = "X_API_SECRET";
/// X user access token.
pub const X_ACCESS_TOKEN: &str = "X_ACCESS_TOKEN";
/// X user access token secret.
pub const X_ACCESS_SECRET: &str = "X_ACCESS_SECRET";

/// Metadata service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TmdbSettings {
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Region code used by region-scoped queries
    pub default_region: String,
}

/// Publishing platform settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct XSettings {
    /// API v2 base URL
    pub api_base: String,
    /// Post length ceiling in characters
    pub max_post_length: usize,
}

/// Non-secret settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Metadata service section
    pub tmdb: TmdbSettings,
    /// Publishing platform section
    pub x: XSettings,
}

impl Settings {
    /// Load settings with precedence: environment > ./cinecast.toml > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed, a value has the wrong
    /// type, the timeout is zero, or the post ceiling cannot fit the ellipsis.
    #[instrument]
    pub fn load() -> Result<Self, ConfigError> {
        debug!("Loading settings with precedence: environment > current dir > bundled defaults");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
            .add_source(File::with_name("cinecast").required(false))
            .add_source(
                Environment::with_prefix("CINECAST")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Bundled defaults with a TOML document layered on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or a value has the wrong type.
    pub fn from_toml(overrides: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values a run cannot work with.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tmdb.timeout_secs == 0 {
            return Err(ConfigError::invalid_setting(
                "tmdb.timeout_secs",
                "must be at least 1",
            ));
        }
        let min_length = ELLIPSIS.chars().count() + 1;
        if self.x.max_post_length < min_length {
            return Err(ConfigError::invalid_setting(
                "x.max_post_length",
                &format!("must be at least {}", min_length),
            ));
        }
        Ok(())
    }

    /// Metadata request timeout.
    pub fn tmdb_timeout(&self) -> Duration {
        Duration::from_secs(self.tmdb.timeout_secs)
    }
}

/// Secrets read from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    tmdb_api_key: String,
    x: Option<XCredentials>,
}

impl Credentials {
    /// Read credentials through `lookup`.
    ///
    /// Empty or whitespace-only values count as missing. X credentials are
    /// only read when `require_x` is set.
    ///
    /// # Errors
    ///
    /// Returns one error naming every missing variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinecast::config::Credentials;
    /// use std::collections::HashMap;
    ///
    /// let env = HashMap::from([("TMDB_API_KEY", "key"), ("X_API_KEY", "")]);
    /// let err = Credentials::from_lookup(|name| env.get(name).map(|v| v.to_string()), true)
    ///     .unwrap_err();
    /// assert!(err.message.contains("X_API_KEY"));
    /// assert!(!err.message.contains("TMDB_API_KEY"));
    /// ```
    pub fn from_lookup<F>(lookup: F, require_x: bool) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<&str> = Vec::new();
        let mut take = |name: &'static str| {
            let value = lookup(name).filter(|v| !v.trim().is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let tmdb_api_key = take(TMDB_API_KEY);
        let x = require_x.then(|| {
            XCredentials::new(
                take(X_BEARER_TOKEN),
                take(X_API_KEY),
                take(X_API_SECRET),
                take(X_ACCESS_TOKEN),
                take(X_ACCESS_SECRET),
            )
        });

        if !missing.is_empty() {
            return Err(ConfigError::missing_variables(&missing));
        }

        Ok(Self { tmdb_api_key, x })
    }

    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns one error naming every missing variable.
    pub fn from_env(require_x: bool) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok(), require_x)
    }

    /// Metadata service API key.
    pub fn tmdb_api_key(&self) -> &str {
        &self.tmdb_api_key
    }

    /// X credentials, absent for dry runs.
    pub fn x(&self) -> Option<&XCredentials> {
        self.x.as_ref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("tmdb_api_key", &"<redacted>")
            .field("x", &self.x)
            .finish()
    }
}

/// Everything a run needs, built once at startup.
#[derive(Debug, Clone)]
pub struct CinecastConfig {
    settings: Settings,
    credentials: Credentials,
}

impl CinecastConfig {
    /// Load settings and read credentials from the process environment.
    ///
    /// Dry runs only need the metadata API key.
    ///
    /// # Errors
    ///
    /// Returns an error if settings fail to load or credentials are missing.
    #[instrument]
    pub fn load(dry_run: bool) -> Result<Self, ConfigError> {
        Self::from_parts(Settings::load()?, |name| std::env::var(name).ok(), dry_run)
    }

    /// Combine loaded settings with credentials read through `lookup`.
    ///
    /// A non-empty `TMDB_DEFAULT_REGION` replaces the configured region.
    ///
    /// # Errors
    ///
    /// Returns one error naming every missing credential.
    pub fn from_parts<F>(mut settings: Settings, lookup: F, dry_run: bool) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(region) = lookup(TMDB_DEFAULT_REGION).filter(|v| !v.trim().is_empty()) {
            debug!(region = %region, "Default region overridden from environment");
            settings.tmdb.default_region = region;
        }

        let credentials = Credentials::from_lookup(&lookup, !dry_run)?;
        Ok(Self {
            settings,
            credentials,
        })
    }

    /// Loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loaded credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Default region for region-scoped queries.
    pub fn region(&self) -> &str {
        &self.settings.tmdb.default_region
    }

    /// Metadata client configuration.
    pub fn tmdb_config(&self) -> TmdbConfig {
        TmdbConfig::new(self.credentials.tmdb_api_key.clone())
            .with_base_url(self.settings.tmdb.base_url.clone())
            .with_timeout(self.settings.tmdb_timeout())
    }
}
