//! Core types for the Pulse survey administration core.
//!
//! This crate provides the foundational identifier and identity types
//! shared by every other Pulse crate.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Core Layer                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  pulse-types   : ID types, Role, IdentityKind, ErrorCode ◄── HERE
//! │  pulse-auth    : PermissionSet, Principal, RoutePolicy      │
//! │  pulse-survey  : Question catalog, SurveyAttempt engine     │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Runtime Layer                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  pulse-runtime : auth backend, session store, directory     │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Application Layer                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  pulse-app     : navigation guard, survey flow, AppError    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Identifier Design
//!
//! All identifiers are UUID-based:
//!
//! - **Session safety**: identities survive serialization to the
//!   session snapshot and back without coordination
//! - **Seed determinism**: fixture records (questions, customers)
//!   can be created with UUID v5 so seeded data is stable across runs
//! - **Serialization**: first-class serde support
//!
//! # Example
//!
//! ```
//! use pulse_types::{CustomerId, QuestionId, Role, IdentityKind};
//!
//! // Seeded identifiers are deterministic
//! let q1 = QuestionId::seeded("workload-balance");
//! let q2 = QuestionId::seeded("workload-balance");
//! assert_eq!(q1, q2);
//!
//! // Ad-hoc identifiers are random
//! let c1 = CustomerId::new();
//! let c2 = CustomerId::new();
//! assert_ne!(c1, c2);
//!
//! // Role and kind parse leniently: anything unrecognized degrades
//! assert_eq!(Role::parse("master"), Role::Master);
//! assert_eq!(Role::parse("superuser"), Role::Unknown);
//! assert_eq!(IdentityKind::parse("employee"), IdentityKind::Employee);
//! ```

mod error;
mod id;
mod role;

pub use error::ErrorCode;
pub use id::{CustomerId, OrganizationId, PrincipalId, QuestionId, RespondentId, SurveyId};
pub use role::{IdentityKind, Role};
