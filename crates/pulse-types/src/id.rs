//! Identifier types for Pulse.
//!
//! All identifiers are UUID-based so they survive serialization into
//! session snapshots and submission payloads without coordination.

use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

/// Pulse namespace UUID for deterministic UUID v5 generation.
///
/// Used as the namespace when deriving identifiers for seeded fixture
/// records (questions, customers, surveys) so that seeded data keeps
/// the same identity across process restarts.
const PULSE_NAMESPACE: Uuid = uuid!("7c9e4f1a-52b8-4d6e-9a3f-1d8c20e5b7a4");

macro_rules! uuid_id {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new identifier with a random UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a deterministic identifier from a seed key (UUID v5).
            ///
            /// The same key always produces the same identifier. Use this
            /// for seeded fixture data that must keep a stable identity.
            #[must_use]
            pub fn seeded(key: &str) -> Self {
                let scoped = format!(concat!($prefix, ":{}"), key);
                Self(Uuid::new_v5(&PULSE_NAMESPACE, scoped.as_bytes()))
            }

            /// Returns the inner UUID.
            #[must_use]
            pub fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

uuid_id!(
    /// Identifier for an authenticated principal.
    ///
    /// A principal is "who" is acting — an HR staff member or an
    /// employee respondent — separate from "what they may do", which
    /// is derived from their role by the permission model.
    PrincipalId,
    "principal"
);

uuid_id!(
    /// Identifier for an organization (tenant).
    ///
    /// Every principal, customer, and question catalog belongs to
    /// exactly one organization.
    OrganizationId,
    "org"
);

uuid_id!(
    /// Identifier for a customer of the organization.
    ///
    /// Customers scope annotation text on questions and group the
    /// employees who answer surveys.
    CustomerId,
    "customer"
);

uuid_id!(
    /// Identifier for a catalog question.
    ///
    /// Question identity never includes the per-customer annotation;
    /// annotations are attached at read time by the catalog provider.
    QuestionId,
    "q"
);

uuid_id!(
    /// Identifier for one survey being answered.
    SurveyId,
    "survey"
);

uuid_id!(
    /// Identifier for a survey respondent.
    ///
    /// Distinct from [`PrincipalId`] at the type level: the submission
    /// payload references respondents, not login identities. A
    /// respondent id can be derived from the principal that opened the
    /// attempt via `From<PrincipalId>`.
    RespondentId,
    "resp"
);

impl From<PrincipalId> for RespondentId {
    fn from(id: PrincipalId) -> Self {
        Self(id.uuid())
    }
}

// Tests are in lib.rs as integration tests for the public API.
