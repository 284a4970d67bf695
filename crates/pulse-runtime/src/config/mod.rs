//! Configuration management.
//!
//! Layered configuration with default-aware merging:
//!
//! ```text
//! Environment > Global file > Default
//! ```

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{default_config_path, ConfigLoader};
pub use types::{AuthConfig, PathsConfig, PulseConfig};
