//! Modes and the registry that dispatches on their keys.

use crate::{SelectionContext, SelectionPolicy, Template};
use cinecast_core::Movie;
use cinecast_error::{ModeError, ModeErrorKind};
use cinecast_tmdb::TmdbResult;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A key bound to one selection policy and one template.
#[derive(derive_getters::Getters)]
pub struct Mode {
    /// Short key used on the command line.
    key: String,
    /// Human description for listings.
    description: String,
    /// Candidate selection.
    #[getter(skip)]
    policy: Box<dyn SelectionPolicy>,
    /// Message layout.
    template: Template,
    /// Log line used when the policy finds nothing.
    not_found: String,
}

impl Mode {
    /// Create a new mode.
    pub fn new(
        key: impl Into<String>,
        description: impl Into<String>,
        policy: impl SelectionPolicy + 'static,
        template: Template,
        not_found: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            policy: Box::new(policy),
            template,
            not_found: not_found.into(),
        }
    }

    /// Candidate selection policy.
    pub fn policy(&self) -> &dyn SelectionPolicy {
        self.policy.as_ref()
    }

    /// Run this mode's policy.
    ///
    /// # Errors
    ///
    /// Returns error if a metadata query fails.
    pub async fn select(&self, ctx: &mut SelectionContext<'_>) -> TmdbResult<Option<Movie>> {
        self.policy.select(ctx).await
    }

    /// Render a chosen movie with this mode's template.
    pub fn render(&self, movie: &Movie) -> String {
        self.template.render(movie)
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mode")
            .field("key", &self.key)
            .field("description", &self.description)
            .field("policy", &self.policy.name())
            .field("template", &self.template)
            .finish()
    }
}

/// Registry of modes by key.
pub struct ModeRegistry {
    modes: HashMap<String, Arc<Mode>>,
}

impl ModeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            modes: HashMap::new(),
        }
    }

    /// Registry holding the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns error if a built-in definition is invalid.
    pub fn builtin() -> Result<Self, ModeError> {
        let mut registry = Self::new();
        for mode in crate::catalog::builtin_modes()? {
            registry.register(mode)?;
        }
        Ok(registry)
    }

    /// Register a mode.
    ///
    /// A mode registered under an existing key replaces it and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns error if the key is empty.
    #[tracing::instrument(skip(self, mode), fields(mode_key = %mode.key))]
    pub fn register(&mut self, mode: Mode) -> Result<(), ModeError> {
        if mode.key.trim().is_empty() {
            return Err(ModeError::new(ModeErrorKind::InvalidDefinition(
                "mode key must not be empty".to_string(),
            )));
        }

        if self.modes.contains_key(&mode.key) {
            tracing::warn!(mode = %mode.key, "Mode already registered, overwriting previous registration");
        } else {
            tracing::debug!("Registering mode");
        }

        self.modes.insert(mode.key.clone(), Arc::new(mode));
        Ok(())
    }

    /// Get a mode by key.
    pub fn get(&self, key: &str) -> Option<Arc<Mode>> {
        self.modes.get(key).cloned()
    }

    /// Get a mode by key, failing with the list of valid keys.
    ///
    /// # Errors
    ///
    /// Returns `UnknownMode` if no mode has this key.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, key: &str) -> Result<Arc<Mode>, ModeError> {
        self.get(key).ok_or_else(|| {
            ModeError::new(ModeErrorKind::UnknownMode {
                key: key.to_string(),
                available: self.keys().join(", "),
            })
        })
    }

    /// All modes, numeric keys first in numeric order.
    pub fn list(&self) -> Vec<Arc<Mode>> {
        let mut modes: Vec<Arc<Mode>> = self.modes.values().cloned().collect();
        modes.sort_by_key(|mode| key_order(&mode.key));
        modes
    }

    /// All keys in listing order.
    pub fn keys(&self) -> Vec<String> {
        self.list().iter().map(|mode| mode.key.clone()).collect()
    }

    /// Get number of registered modes.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn key_order(key: &str) -> (u32, String) {
    (key.parse().unwrap_or(u32::MAX), key.to_string())
}
