//! Multi-source configuration loader.

use super::{ConfigError, PulseConfig};
use std::path::PathBuf;

/// Environment variable enabling debug mode (`1`/`true`).
const ENV_DEBUG: &str = "PULSE_DEBUG";
/// Environment variable toggling the auth fallback (`0`/`false` disables).
const ENV_ALLOW_FALLBACK: &str = "PULSE_ALLOW_FALLBACK";
/// Environment variable overriding the session directory.
const ENV_SESSION_DIR: &str = "PULSE_SESSION_DIR";

/// Returns the default global config file path (`~/.pulse/config.toml`).
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pulse")
        .join("config.toml")
}

/// Loads configuration with `Environment > Global file > Default`
/// precedence.
///
/// # Example
///
/// ```no_run
/// use pulse_runtime::config::ConfigLoader;
///
/// let config = ConfigLoader::new().load().expect("config");
/// if config.debug {
///     eprintln!("debug mode on");
/// }
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    global_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader using the default global path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the global config file path (mainly for tests).
    #[must_use]
    pub fn with_global_path(mut self, path: PathBuf) -> Self {
        self.global_path = Some(path);
        self
    }

    /// Loads and merges all layers.
    ///
    /// A missing global file is not an error; an unreadable or
    /// malformed one is.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] or [`ConfigError::Parse`] for the global
    /// file.
    pub fn load(&self) -> Result<PulseConfig, ConfigError> {
        let mut config = PulseConfig::default();

        let global_path = self
            .global_path
            .clone()
            .unwrap_or_else(default_config_path);
        if global_path.exists() {
            let contents = std::fs::read_to_string(&global_path)?;
            let global = PulseConfig::from_toml(&contents)?;
            config.merge(&global);
            tracing::debug!(path = %global_path.display(), "loaded global config");
        }

        Self::apply_env(&mut config);
        Ok(config)
    }

    fn apply_env(config: &mut PulseConfig) {
        if let Some(value) = env_flag(ENV_DEBUG) {
            config.debug = value;
        }
        if let Some(value) = env_flag(ENV_ALLOW_FALLBACK) {
            config.auth.allow_fallback = value;
        }
        if let Ok(dir) = std::env::var(ENV_SESSION_DIR) {
            if !dir.is_empty() {
                config.paths.session_dir = Some(PathBuf::from(dir));
            }
        }
    }
}

/// Reads a boolean environment flag: `1`/`true` → true, `0`/`false` →
/// false, anything else (including unset) → `None`.
fn env_flag(name: &str) -> Option<bool> {
    match std::env::var(name).ok()?.to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
