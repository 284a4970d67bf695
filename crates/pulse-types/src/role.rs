//! Role and identity-kind types.
//!
//! A principal carries two orthogonal classifications:
//!
//! - [`Role`] — the fine-grained permission tier (`master`, `admin`,
//!   `member`). Determines the capability set.
//! - [`IdentityKind`] — the coarse identity category (`hr` staff vs
//!   `employee` respondent). Determines which routes are reachable.
//!
//! Keeping them separate keeps the permission model and the route
//! policy independently testable: the permission table never consults
//! kind, and the route rules never derive capabilities.

use serde::{Deserialize, Serialize};

/// The permission tier of a principal.
///
/// # Unknown Values
///
/// Input from outside the system (a backend response, a stale
/// snapshot) may carry a role string this version does not know.
/// [`Role::parse`] is total: anything unrecognized maps to
/// [`Role::Unknown`], which derives an empty capability set and is
/// denied by every route rule. Degrade, never panic.
///
/// # Example
///
/// ```
/// use pulse_types::Role;
///
/// assert_eq!(Role::parse("admin"), Role::Admin);
/// assert_eq!(Role::parse("ADMIN"), Role::Admin);
/// assert_eq!(Role::parse("root"), Role::Unknown);
/// assert!(Role::Master.is_master());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative tier, including customer management.
    Master,
    /// Administrative tier without customer management.
    Admin,
    /// Non-administrative tier; may only answer surveys.
    Member,
    /// Unrecognized tier. Derives no capabilities.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Parses a role name (case-insensitive, total).
    ///
    /// Unrecognized names map to [`Role::Unknown`] rather than
    /// failing, so callers never have to handle a parse error.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "master" => Self::Master,
            "admin" => Self::Admin,
            "member" => Self::Member,
            _ => Self::Unknown,
        }
    }

    /// Returns `true` for [`Role::Master`].
    #[must_use]
    pub fn is_master(&self) -> bool {
        matches!(self, Self::Master)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The coarse identity category of a principal.
///
/// Distinct from [`Role`]: an employee respondent may nominally carry
/// any role, but the route policy restricts employee-kind principals
/// to the survey and dashboard views regardless of it.
///
/// # Example
///
/// ```
/// use pulse_types::IdentityKind;
///
/// assert_eq!(IdentityKind::parse("hr"), IdentityKind::Hr);
/// assert_eq!(IdentityKind::parse("employee"), IdentityKind::Employee);
/// assert_eq!(IdentityKind::parse("bot"), IdentityKind::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKind {
    /// HR staff operating the administration views.
    Hr,
    /// Employee respondent answering surveys.
    Employee,
    /// Unrecognized kind. Denied by every route rule.
    #[serde(other)]
    Unknown,
}

impl IdentityKind {
    /// Parses a kind name (case-insensitive, total).
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "hr" => Self::Hr,
            "employee" => Self::Employee,
            _ => Self::Unknown,
        }
    }

    /// Returns `true` for [`IdentityKind::Employee`].
    #[must_use]
    pub fn is_employee(&self) -> bool {
        matches!(self, Self::Employee)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::Employee => "employee",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
