//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers.
///
/// # Serialization
///
/// Serializes to TOML for file storage; every field is optional in the
/// file thanks to `#[serde(default)]`.
///
/// # Example
///
/// ```
/// use pulse_runtime::config::PulseConfig;
///
/// let config = PulseConfig::default();
/// assert!(!config.debug);
/// assert!(config.auth.allow_fallback);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PulseConfig {
    /// Enable debug mode (verbose logging, diagnostics).
    pub debug: bool,

    /// Authentication configuration.
    pub auth: AuthConfig,

    /// Path configuration.
    pub paths: PathsConfig,
}

impl PulseConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes to TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Merges another config into this one.
    ///
    /// Values from `other` override values in `self` only if they
    /// differ from the default. This enables layered configuration.
    pub fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.debug != default.debug {
            self.debug = other.debug;
        }
        self.auth.merge(&other.auth);
        self.paths.merge(&other.paths);
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    /// Whether an unreachable backend falls back to a locally
    /// synthesized principal. On by default, the development mode the
    /// system was built around; switch off for anything shared.
    pub allow_fallback: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allow_fallback: true,
        }
    }
}

impl AuthConfig {
    fn merge(&mut self, other: &Self) {
        let default = Self::default();
        if other.allow_fallback != default.allow_fallback {
            self.allow_fallback = other.allow_fallback;
        }
    }
}

/// Path configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory for the session snapshot. `None` means the built-in
    /// default (`~/.pulse`).
    pub session_dir: Option<PathBuf>,
}

impl PathsConfig {
    /// Returns the configured session directory, or the built-in
    /// default.
    #[must_use]
    pub fn session_dir_or_default(&self) -> PathBuf {
        self.session_dir
            .clone()
            .unwrap_or_else(crate::session::default_session_dir)
    }

    fn merge(&mut self, other: &Self) {
        if other.session_dir.is_some() {
            self.session_dir = other.session_dir.clone();
        }
    }
}
