//! Permission model and route access policy for Pulse.
//!
//! This crate answers two questions, kept deliberately separate:
//!
//! ```text
//! Effective Access = PermissionSet(WHAT)  ∩  RoutePolicy(WHERE)
//! ```
//!
//! | Layer | Type | Controls |
//! |-------|------|----------|
//! | [`PermissionSet`] | Bitflags | What operations a role allows |
//! | [`RoutePolicy`] | Struct | Which views a principal may open |
//!
//! # Design Principles
//!
//! - **Derivation, not storage** — a [`Principal`]'s permission set is
//!   always the output of [`PermissionSet::for_role`]; deserializing a
//!   persisted principal re-derives it, so the two can never drift.
//! - **Role never meets kind** — [`PermissionSet::for_role`] ignores
//!   [`IdentityKind`]; kind-based restriction lives exclusively in the
//!   route rules. Each concern tests on its own.
//! - **Decisions never fail** — route decisions are pure booleans;
//!   malformed input degrades to deny, it never panics or errors.
//!
//! # Example
//!
//! ```
//! use pulse_auth::{Principal, PermissionSet, Route, RoutePolicy};
//! use pulse_types::{IdentityKind, OrganizationId, PrincipalId, Role};
//!
//! let hr = Principal::new(
//!     PrincipalId::new(),
//!     "ana@example.com",
//!     OrganizationId::new(),
//!     Role::Admin,
//!     IdentityKind::Hr,
//! );
//!
//! assert!(hr.permissions().contains(PermissionSet::MANAGE_QUESTIONS));
//! assert!(!hr.permissions().contains(PermissionSet::MANAGE_CUSTOMERS));
//!
//! let policy = RoutePolicy;
//! assert!(policy.can_access(Some(&hr), Route::Questions));
//! assert!(!policy.can_access(Some(&hr), Route::Customers));
//! assert_eq!(policy.landing_route(&hr), Route::Dashboard);
//! ```

mod error;
mod permission;
mod policy;
mod principal;
mod route;

pub use error::AuthError;
pub use permission::PermissionSet;
pub use policy::{RouteDecision, RoutePolicy};
pub use principal::Principal;
pub use route::Route;

// Re-export the identity enums for convenience
pub use pulse_types::{IdentityKind, Role};
