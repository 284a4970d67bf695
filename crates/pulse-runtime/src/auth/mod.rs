//! Authentication boundary.
//!
//! The [`SessionManager`] owns the current principal and talks to an
//! [`AuthBackend`] through a single, explicit fallback policy: when
//! the backend is unreachable, the manager synthesizes a local
//! principal and reports the outcome as
//! [`LoginOutcome::Fallback`] — dual-track control flow modeled as a
//! result, never as silently swallowed failure.

mod backend;
mod manager;

pub use backend::{AuthBackend, Credentials, MockAuthBackend, MockIdentity};
pub use manager::{FallbackPolicy, LoginOutcome, SessionManager};
