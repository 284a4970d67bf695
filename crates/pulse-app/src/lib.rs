//! Pulse application layer.
//!
//! Wires the runtime collaborators to the pure domain core and exposes
//! the surface a frontend talks to:
//!
//! - [`PulseApp`]: login/logout/restore, the navigation guard, and
//!   survey flow construction
//! - [`Navigation`]: what the router should do with a requested path
//! - [`AppError`]: unified error for frontend handling
//!
//! # Example
//!
//! ```
//! use pulse_app::{Navigation, PulseApp};
//! use pulse_runtime::{Credentials, MockAuthBackend, MockIdentity, MemoryStore};
//! use pulse_types::{IdentityKind, OrganizationId, Role};
//!
//! # async fn example() {
//! let backend = MockAuthBackend::with_identities(vec![MockIdentity::new(
//!     "ana@example.com",
//!     "pw",
//!     OrganizationId::seeded("acme"),
//!     Role::Admin,
//!     IdentityKind::Hr,
//! )]);
//! let mut app = PulseApp::builder(backend, MemoryStore::new()).build();
//!
//! // No session: everything leads to login.
//! assert_eq!(app.navigate("/reports"), Navigation::Login);
//!
//! app.login(&Credentials::new("ana@example.com", "pw"))
//!     .await
//!     .expect("login");
//! assert!(matches!(app.navigate("/reports"), Navigation::Proceed { .. }));
//! # }
//! ```

mod app;
mod error;

pub use app::{Navigation, PulseApp, PulseAppBuilder};
pub use error::AppError;

// Re-export the surface a frontend needs from the lower layers.
pub use pulse_auth::{
    AuthError, PermissionSet, Principal, Route, RouteDecision, RoutePolicy,
};
pub use pulse_runtime::{
    Credentials, Directory, DirectorySeed, LoginOutcome, PulseConfig, RecordingSink,
};
pub use pulse_survey::{AttemptPhase, SurveyAttempt, SurveyRunner};
pub use pulse_types::{IdentityKind, Role};
