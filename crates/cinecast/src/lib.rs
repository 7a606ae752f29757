//! Cinecast - posts one TMDB movie per run to X.
//!
//! Each run takes a mode key, lets that mode's selection policy pick a movie
//! from TMDB, renders it with the mode's template and publishes it as a single
//! post. Finding nothing, or the platform refusing a duplicate, ends the run
//! normally.
//!
//! # Configuration
//!
//! Non-secret settings come from the bundled `cinecast.toml`, an optional
//! `./cinecast.toml` and `CINECAST__*` environment variables. Credentials come
//! from the environment or `.env`:
//!
//! - `TMDB_API_KEY` (always)
//! - `X_BEARER_TOKEN`, `X_API_KEY`, `X_API_SECRET`, `X_ACCESS_TOKEN`,
//!   `X_ACCESS_SECRET` (unless `--dry-run`)
//! - `TMDB_DEFAULT_REGION` (optional, defaults to `TR`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;

use chrono::Local;
use cinecast_error::CinecastResult;
use cinecast_modes::{ModeRegistry, RunOutcome, Runner};
use cinecast_social::{NoOpPlatform, Platform, Publisher, XPlatform};
use cinecast_tmdb::TmdbClient;
use crate::cli::Cli;
use crate::config::CinecastConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{info, instrument};

/// One line per mode: key and description.
pub fn mode_listing(registry: &ModeRegistry) -> String {
    registry
        .list()
        .iter()
        .map(|mode| format!("{:>3}  {}", mode.key(), mode.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Publishing platform for this run.
///
/// # Errors
///
/// Returns error if X credentials are missing or empty.
pub fn build_platform(config: &CinecastConfig, dry_run: bool) -> CinecastResult<Arc<dyn Platform>> {
    if dry_run {
        return Ok(Arc::new(NoOpPlatform::new()));
    }

    let credentials = config.credentials().x().cloned().ok_or_else(|| {
        cinecast_error::ConfigError::new("X credentials are required unless --dry-run is set")
    })?;
    let platform = XPlatform::with_api_base(credentials, config.settings().x.api_base.clone())?;
    Ok(Arc::new(platform))
}

/// Execute the command line.
///
/// # Errors
///
/// Returns error if:
/// - The mode key is unknown
/// - Configuration or credentials are missing or invalid
/// - A metadata query fails
/// - The platform fails with anything other than a refusal
#[instrument(skip_all, fields(mode = ?cli.mode, dry_run = cli.dry_run))]
pub async fn run(cli: Cli) -> CinecastResult<()> {
    let registry = ModeRegistry::builtin()?;

    if cli.list {
        println!("{}", mode_listing(&registry));
        return Ok(());
    }

    let key = cli.mode.as_deref().unwrap_or_default();
    let mode = registry.resolve(key)?;
    info!(mode = %mode.key(), description = %mode.description(), "Starting run");

    let config = CinecastConfig::load(cli.dry_run)?;
    let source = Arc::new(TmdbClient::new(config.tmdb_config())?);
    let publisher = Publisher::new(build_platform(&config, cli.dry_run)?)
        .with_max_length(config.settings().x.max_post_length);
    let runner = Runner::new(source, publisher, config.region());

    let today = Local::now().date_naive();
    let mut rng = StdRng::from_entropy();
    match runner.run(&mode, today, &mut rng).await? {
        RunOutcome::NoCandidate => info!("Run finished without a post"),
        outcome @ RunOutcome::Published { .. } => info!(%outcome, "Run finished"),
    }

    Ok(())
}
