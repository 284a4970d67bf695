//! Pulse runtime — concrete collaborators behind the domain core.
//!
//! The domain crates (`pulse-auth`, `pulse-survey`) define pure
//! decision logic and abstract collaborator traits. This crate
//! provides the working implementations the application layer wires
//! together:
//!
//! # Modules
//!
//! ## [`auth`] — Authentication Boundary
//!
//! - [`AuthBackend`](auth::AuthBackend): login / logout / revalidate
//! - [`MockAuthBackend`](auth::MockAuthBackend): seeded local backend
//! - [`SessionManager`](auth::SessionManager): owns the current
//!   principal, the persisted snapshot, and the explicit fallback
//!   policy for an unreachable backend
//!
//! ## [`session`] — Session Persistence
//!
//! - [`SessionSnapshot`](session::SessionSnapshot): principal + timestamp
//! - [`SessionStore`](session::SessionStore): storage abstraction
//! - [`LocalFileStore`](session::LocalFileStore): atomic JSON file
//! - [`MemoryStore`](session::MemoryStore): in-memory fake for tests
//!
//! ## [`directory`] — Mock Data Provider
//!
//! - [`Directory`](directory::Directory): customers, employees, and
//!   the question catalog with per-customer annotations, behind an
//!   explicit store object constructed from a seed — never a module
//!   global
//! - [`RecordingSink`](directory::RecordingSink): submission sink that
//!   records payloads and can simulate failures
//!
//! ## [`config`] — Configuration
//!
//! - [`PulseConfig`](config::PulseConfig): TOML-backed configuration
//! - [`ConfigLoader`](config::ConfigLoader): Environment > Global >
//!   Default layering

pub mod auth;
pub mod config;
pub mod directory;
pub mod session;

// Re-exports for convenience
pub use auth::{
    AuthBackend, Credentials, FallbackPolicy, LoginOutcome, MockAuthBackend, MockIdentity,
    SessionManager,
};
pub use config::{default_config_path, ConfigError, ConfigLoader, PulseConfig};
pub use directory::{
    Customer, Directory, DirectorySeed, Employee, RecordedSubmission, RecordingSink,
};
pub use session::{
    default_session_dir, LocalFileStore, MemoryStore, SessionSnapshot, SessionStore, StorageError,
};
