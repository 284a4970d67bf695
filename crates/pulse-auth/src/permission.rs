//! Capability-based permission model.
//!
//! Defines the logical capabilities a role grants. The set is fully
//! determined by [`Role`]; it never consults the principal's
//! [`IdentityKind`](pulse_types::IdentityKind) — kind-based restriction
//! is the route policy's job, which keeps the two concerns composable
//! and independently testable.
//!
//! # Role Table
//!
//! | role | VIEW_DASHBOARD | MANAGE_QUESTIONS | VIEW_REPORTS | MANAGE_CUSTOMERS | ANSWER_SURVEY |
//! |---------|---|---|---|---|---|
//! | master  | T | T | T | T | T |
//! | admin   | T | T | T | F | T |
//! | member  | F | F | F | F | T |
//! | unknown | F | F | F | F | F |
//!
//! # Example
//!
//! ```
//! use pulse_auth::PermissionSet;
//! use pulse_types::Role;
//!
//! let admin = PermissionSet::for_role(Role::Admin);
//! assert!(admin.contains(PermissionSet::MANAGE_QUESTIONS));
//! assert!(!admin.contains(PermissionSet::MANAGE_CUSTOMERS));
//!
//! let nobody = PermissionSet::for_role(Role::Unknown);
//! assert!(nobody.is_empty());
//! ```

use bitflags::bitflags;
use pulse_types::Role;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Logical capabilities derived from a principal's role.
    ///
    /// Each capability gates a family of staff operations:
    ///
    /// | Capability | Operations |
    /// |------------|------------|
    /// | [`VIEW_DASHBOARD`](Self::VIEW_DASHBOARD) | open the dashboard view |
    /// | [`MANAGE_QUESTIONS`](Self::MANAGE_QUESTIONS) | create/edit/annotate catalog questions |
    /// | [`VIEW_REPORTS`](Self::VIEW_REPORTS) | open aggregated report views |
    /// | [`MANAGE_CUSTOMERS`](Self::MANAGE_CUSTOMERS) | customer directory maintenance |
    /// | [`ANSWER_SURVEY`](Self::ANSWER_SURVEY) | open and submit a survey attempt |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PermissionSet: u8 {
        /// Open the dashboard view.
        const VIEW_DASHBOARD   = 0b0000_0001;
        /// Create, edit, and annotate catalog questions.
        const MANAGE_QUESTIONS = 0b0000_0010;
        /// Open aggregated report views.
        const VIEW_REPORTS     = 0b0000_0100;
        /// Maintain the customer directory.
        const MANAGE_CUSTOMERS = 0b0000_1000;
        /// Open and submit a survey attempt.
        const ANSWER_SURVEY    = 0b0001_0000;
    }
}

impl PermissionSet {
    /// The administrative capabilities shared by master and admin.
    pub const STAFF: Self = Self::VIEW_DASHBOARD
        .union(Self::MANAGE_QUESTIONS)
        .union(Self::VIEW_REPORTS);

    /// Derives the permission set for a role.
    ///
    /// Pure and total: every role value, including [`Role::Unknown`],
    /// maps to exactly one set. Never consults identity kind.
    ///
    /// # Example
    ///
    /// ```
    /// use pulse_auth::PermissionSet;
    /// use pulse_types::Role;
    ///
    /// assert_eq!(PermissionSet::for_role(Role::Master), PermissionSet::all());
    /// assert_eq!(
    ///     PermissionSet::for_role(Role::Member),
    ///     PermissionSet::ANSWER_SURVEY
    /// );
    /// ```
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Master => Self::STAFF | Self::MANAGE_CUSTOMERS | Self::ANSWER_SURVEY,
            Role::Admin => Self::STAFF | Self::ANSWER_SURVEY,
            Role::Member => Self::ANSWER_SURVEY,
            Role::Unknown => Self::empty(),
        }
    }

    /// Returns a human-readable list of capability names.
    ///
    /// # Example
    ///
    /// ```
    /// use pulse_auth::PermissionSet;
    ///
    /// let caps = PermissionSet::VIEW_DASHBOARD | PermissionSet::ANSWER_SURVEY;
    /// assert_eq!(caps.names(), vec!["VIEW_DASHBOARD", "ANSWER_SURVEY"]);
    /// ```
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::VIEW_DASHBOARD) {
            names.push("VIEW_DASHBOARD");
        }
        if self.contains(Self::MANAGE_QUESTIONS) {
            names.push("MANAGE_QUESTIONS");
        }
        if self.contains(Self::VIEW_REPORTS) {
            names.push("VIEW_REPORTS");
        }
        if self.contains(Self::MANAGE_CUSTOMERS) {
            names.push("MANAGE_CUSTOMERS");
        }
        if self.contains(Self::ANSWER_SURVEY) {
            names.push("ANSWER_SURVEY");
        }
        names
    }
}

impl std::fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_has_every_capability() {
        let caps = PermissionSet::for_role(Role::Master);
        assert!(caps.contains(PermissionSet::VIEW_DASHBOARD));
        assert!(caps.contains(PermissionSet::MANAGE_QUESTIONS));
        assert!(caps.contains(PermissionSet::VIEW_REPORTS));
        assert!(caps.contains(PermissionSet::MANAGE_CUSTOMERS));
        assert!(caps.contains(PermissionSet::ANSWER_SURVEY));
        assert_eq!(caps, PermissionSet::all());
    }

    #[test]
    fn admin_lacks_only_customer_management() {
        let caps = PermissionSet::for_role(Role::Admin);
        assert!(caps.contains(PermissionSet::VIEW_DASHBOARD));
        assert!(caps.contains(PermissionSet::MANAGE_QUESTIONS));
        assert!(caps.contains(PermissionSet::VIEW_REPORTS));
        assert!(!caps.contains(PermissionSet::MANAGE_CUSTOMERS));
        assert!(caps.contains(PermissionSet::ANSWER_SURVEY));
    }

    #[test]
    fn member_only_answers_surveys() {
        let caps = PermissionSet::for_role(Role::Member);
        assert_eq!(caps, PermissionSet::ANSWER_SURVEY);
        assert!(!caps.contains(PermissionSet::VIEW_DASHBOARD));
        assert!(!caps.contains(PermissionSet::MANAGE_QUESTIONS));
        assert!(!caps.contains(PermissionSet::VIEW_REPORTS));
        assert!(!caps.contains(PermissionSet::MANAGE_CUSTOMERS));
    }

    #[test]
    fn unknown_role_has_nothing() {
        let caps = PermissionSet::for_role(Role::Unknown);
        assert!(caps.is_empty());
        assert_eq!(caps.to_string(), "(none)");
    }

    #[test]
    fn names_follow_declaration_order() {
        let caps = PermissionSet::MANAGE_CUSTOMERS | PermissionSet::VIEW_DASHBOARD;
        assert_eq!(caps.names(), vec!["VIEW_DASHBOARD", "MANAGE_CUSTOMERS"]);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(PermissionSet::ANSWER_SURVEY.to_string(), "ANSWER_SURVEY");
        assert_eq!(
            (PermissionSet::VIEW_REPORTS | PermissionSet::ANSWER_SURVEY).to_string(),
            "VIEW_REPORTS | ANSWER_SURVEY"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let caps = PermissionSet::for_role(Role::Admin);
        let json = serde_json::to_string(&caps).expect("serialize");
        let parsed: PermissionSet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, caps);
    }

    #[test]
    fn set_operations() {
        let a = PermissionSet::VIEW_DASHBOARD | PermissionSet::VIEW_REPORTS;
        let b = PermissionSet::VIEW_REPORTS | PermissionSet::ANSWER_SURVEY;

        assert_eq!(a & b, PermissionSet::VIEW_REPORTS);
        assert_eq!(a - b, PermissionSet::VIEW_DASHBOARD);
    }
}
