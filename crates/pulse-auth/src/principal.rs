//! Principal (authenticated identity) types.
//!
//! A [`Principal`] represents the identity driving access decisions:
//! who logged in, which organization they belong to, their role tier,
//! and their identity kind.
//!
//! # Permission Invariant
//!
//! The carried permission set is **always** the output of
//! [`PermissionSet::for_role`] for the carried role. Two mechanisms
//! enforce this:
//!
//! 1. The only constructors derive the set; there is no way to inject
//!    an arbitrary one.
//! 2. Serialization goes through a shadow record without the permission
//!    field, so deserializing a persisted principal re-derives it. A
//!    snapshot written by an older build can never smuggle in a stale
//!    set.

use crate::PermissionSet;
use pulse_types::{IdentityKind, OrganizationId, PrincipalId, Role};
use serde::{Deserialize, Serialize};

/// The authenticated identity driving access decisions.
///
/// Principals are immutable value types: there is no setter for any
/// field. Refreshing a role goes through [`with_role`](Self::with_role),
/// which returns a new principal with a freshly derived permission set.
///
/// # Example
///
/// ```
/// use pulse_auth::{PermissionSet, Principal};
/// use pulse_types::{IdentityKind, OrganizationId, PrincipalId, Role};
///
/// let p = Principal::new(
///     PrincipalId::new(),
///     "jo@example.com",
///     OrganizationId::new(),
///     Role::Member,
///     IdentityKind::Employee,
/// );
///
/// assert_eq!(p.permissions(), PermissionSet::ANSWER_SURVEY);
///
/// // Role replacement re-derives the permission set
/// let promoted = p.with_role(Role::Admin);
/// assert!(promoted.permissions().contains(PermissionSet::VIEW_REPORTS));
/// // The original is unchanged
/// assert_eq!(p.permissions(), PermissionSet::ANSWER_SURVEY);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PrincipalRecord", into = "PrincipalRecord")]
pub struct Principal {
    id: PrincipalId,
    email: String,
    organization: OrganizationId,
    role: Role,
    kind: IdentityKind,
    permissions: PermissionSet,
}

impl Principal {
    /// Creates a principal, deriving its permission set from `role`.
    #[must_use]
    pub fn new(
        id: PrincipalId,
        email: impl Into<String>,
        organization: OrganizationId,
        role: Role,
        kind: IdentityKind,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            organization,
            role,
            kind,
            permissions: PermissionSet::for_role(role),
        }
    }

    /// Returns the principal identifier.
    #[must_use]
    pub fn id(&self) -> PrincipalId {
        self.id
    }

    /// Returns the login email or handle.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the owning organization.
    #[must_use]
    pub fn organization(&self) -> OrganizationId {
        self.organization
    }

    /// Returns the role tier.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the identity kind.
    #[must_use]
    pub fn kind(&self) -> IdentityKind {
        self.kind
    }

    /// Returns the derived permission set.
    #[must_use]
    pub fn permissions(&self) -> PermissionSet {
        self.permissions
    }

    /// Returns `true` if every capability in `required` is present.
    ///
    /// # Example
    ///
    /// ```
    /// use pulse_auth::{PermissionSet, Principal};
    /// use pulse_types::{IdentityKind, OrganizationId, PrincipalId, Role};
    ///
    /// let p = Principal::new(
    ///     PrincipalId::new(),
    ///     "jo@example.com",
    ///     OrganizationId::new(),
    ///     Role::Admin,
    ///     IdentityKind::Hr,
    /// );
    /// assert!(p.can(PermissionSet::MANAGE_QUESTIONS));
    /// assert!(!p.can(PermissionSet::MANAGE_CUSTOMERS));
    /// ```
    #[must_use]
    pub fn can(&self, required: PermissionSet) -> bool {
        self.permissions.contains(required)
    }

    /// Returns a new principal with the given role and a freshly
    /// derived permission set. The original is unchanged.
    #[must_use]
    pub fn with_role(&self, role: Role) -> Self {
        Self::new(self.id, self.email.clone(), self.organization, role, self.kind)
    }

    /// Returns `true` if this is an employee-kind principal.
    #[must_use]
    pub fn is_employee(&self) -> bool {
        self.kind.is_employee()
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}/{}", self.email, self.kind, self.role)
    }
}

/// Serialized form of [`Principal`].
///
/// Carries identity only; the permission set is re-derived on the way
/// back in so it can never drift from the role.
#[derive(Serialize, Deserialize)]
struct PrincipalRecord {
    id: PrincipalId,
    email: String,
    organization: OrganizationId,
    role: Role,
    kind: IdentityKind,
}

impl From<PrincipalRecord> for Principal {
    fn from(r: PrincipalRecord) -> Self {
        Self::new(r.id, r.email, r.organization, r.role, r.kind)
    }
}

impl From<Principal> for PrincipalRecord {
    fn from(p: Principal) -> Self {
        Self {
            id: p.id,
            email: p.email,
            organization: p.organization,
            role: p.role,
            kind: p.kind,
        }
    }
}
