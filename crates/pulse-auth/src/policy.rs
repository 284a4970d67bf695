//! Route access policy.
//!
//! Pure decision functions consumed by the navigation guard in the
//! application layer. The policy decides; the guard redirects. No
//! navigation happens here.
//!
//! # Rules
//!
//! Evaluated in order, first match wins:
//!
//! 1. No principal → deny everything (guard redirects to login).
//! 2. Employee kind → allowed only for `/survey` and `/dashboard`.
//! 3. Master role → allowed for any route.
//! 4. HR kind (non-master) → allowed for any route except `/customers`.
//! 5. Otherwise → deny.
//!
//! The employee-kind restriction deliberately precedes the master-role
//! allowance: an employee-kind principal stays confined to the survey
//! views whatever its nominal role. Unrecognized role or kind values
//! fall through the rules and degrade to deny — decisions never fail.
//!
//! # Audit Logging
//!
//! Every decision is logged: allow at `debug`, deny at `warn`, with
//! principal, role, kind, and route fields.

use crate::{Principal, Route};
use pulse_types::IdentityKind;

/// Outcome of a navigation-guard query.
///
/// Pure function output — never persisted.
///
/// # Example
///
/// ```
/// use pulse_auth::{Principal, Route, RoutePolicy};
/// use pulse_types::{IdentityKind, OrganizationId, PrincipalId, Role};
///
/// let employee = Principal::new(
///     PrincipalId::new(),
///     "sam@example.com",
///     OrganizationId::new(),
///     Role::Member,
///     IdentityKind::Employee,
/// );
///
/// let decision = RoutePolicy.decide(Some(&employee), Route::Reports);
/// assert!(!decision.allowed);
/// assert_eq!(decision.redirect_to, Some(Route::Survey));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDecision {
    /// Whether the principal may open the route.
    pub allowed: bool,
    /// Where the guard should send a denied principal, if anywhere.
    ///
    /// `None` means there is no authenticated principal and the guard
    /// should redirect to login instead.
    pub redirect_to: Option<Route>,
}

impl RouteDecision {
    /// An allow decision (no redirect).
    #[must_use]
    pub fn allow() -> Self {
        Self {
            allowed: true,
            redirect_to: None,
        }
    }

    /// A deny decision redirecting to the principal's landing route.
    #[must_use]
    pub fn deny_to(route: Route) -> Self {
        Self {
            allowed: false,
            redirect_to: Some(route),
        }
    }

    /// A deny decision for the unauthenticated case.
    #[must_use]
    pub fn deny_to_login() -> Self {
        Self {
            allowed: false,
            redirect_to: None,
        }
    }
}

/// Pure route access policy.
///
/// Stateless and reentrant: callable from any number of concurrent
/// render passes without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutePolicy;

impl RoutePolicy {
    /// Returns `true` if `principal` may open `route`.
    ///
    /// Malformed input (no principal, unrecognized role or kind)
    /// degrades to deny; this function never fails.
    #[must_use]
    pub fn can_access(&self, principal: Option<&Principal>, route: Route) -> bool {
        let allowed = Self::evaluate(principal, route);

        match principal {
            Some(p) if allowed => {
                tracing::debug!(
                    principal = %p.id(),
                    role = %p.role(),
                    kind = %p.kind(),
                    route = %route,
                    "route access allowed"
                );
            }
            Some(p) => {
                tracing::warn!(
                    principal = %p.id(),
                    role = %p.role(),
                    kind = %p.kind(),
                    route = %route,
                    "route access denied"
                );
            }
            None => {
                tracing::warn!(route = %route, "route access denied: no principal");
            }
        }

        allowed
    }

    /// Rule evaluation without audit logging.
    fn evaluate(principal: Option<&Principal>, route: Route) -> bool {
        let Some(principal) = principal else {
            return false;
        };

        // Employee kind is confined before any role is consulted.
        if principal.kind() == IdentityKind::Employee {
            return matches!(route, Route::Survey | Route::Dashboard);
        }

        if principal.role().is_master() {
            return true;
        }

        if principal.kind() == IdentityKind::Hr {
            return route != Route::Customers;
        }

        false
    }

    /// Returns the post-login landing route for a principal.
    ///
    /// Also used as the redirect target for denied access. Consistency
    /// property: the returned route always satisfies
    /// [`can_access`](Self::can_access) for the same principal.
    #[must_use]
    pub fn landing_route(&self, principal: &Principal) -> Route {
        if principal.is_employee() {
            Route::Survey
        } else {
            Route::Dashboard
        }
    }

    /// Full navigation-guard decision for one route.
    ///
    /// Combines [`can_access`](Self::can_access) with the redirect
    /// target the guard should use on deny.
    #[must_use]
    pub fn decide(&self, principal: Option<&Principal>, route: Route) -> RouteDecision {
        if self.can_access(principal, route) {
            return RouteDecision::allow();
        }
        match principal {
            Some(p) => RouteDecision::deny_to(self.landing_route(p)),
            None => RouteDecision::deny_to_login(),
        }
    }

    /// Returns `true` if the UI should overlay the restriction notice.
    ///
    /// Employee-kind principals see a notice on every reachable view
    /// except the survey itself. This is a display-only projection
    /// layered on top of the boolean access decision, not an access
    /// rule.
    #[must_use]
    pub fn shows_restriction_notice(&self, principal: &Principal, route: Route) -> bool {
        principal.is_employee() && route != Route::Survey
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_types::{OrganizationId, PrincipalId, Role};

    fn principal(role: Role, kind: IdentityKind) -> Principal {
        Principal::new(
            PrincipalId::new(),
            "test@example.com",
            OrganizationId::new(),
            role,
            kind,
        )
    }

    #[test]
    fn no_principal_denied_everywhere() {
        let policy = RoutePolicy;
        for route in Route::ALL {
            assert!(!policy.can_access(None, route), "route {route}");
        }
    }

    #[test]
    fn employee_reaches_only_survey_and_dashboard() {
        let policy = RoutePolicy;
        let p = principal(Role::Member, IdentityKind::Employee);

        for route in Route::ALL {
            let expected = matches!(route, Route::Survey | Route::Dashboard);
            assert_eq!(policy.can_access(Some(&p), route), expected, "route {route}");
        }
    }

    #[test]
    fn employee_kind_confines_even_master_role() {
        let policy = RoutePolicy;
        let p = principal(Role::Master, IdentityKind::Employee);

        assert!(policy.can_access(Some(&p), Route::Survey));
        assert!(policy.can_access(Some(&p), Route::Dashboard));
        assert!(!policy.can_access(Some(&p), Route::Customers));
        assert!(!policy.can_access(Some(&p), Route::Questions));
    }

    #[test]
    fn master_hr_reaches_everything() {
        let policy = RoutePolicy;
        let p = principal(Role::Master, IdentityKind::Hr);

        for route in Route::ALL {
            assert!(policy.can_access(Some(&p), route), "route {route}");
        }
    }

    #[test]
    fn hr_non_master_denied_customers_only() {
        let policy = RoutePolicy;
        for role in [Role::Admin, Role::Member, Role::Unknown] {
            let p = principal(role, IdentityKind::Hr);
            for route in Route::ALL {
                let expected = route != Route::Customers;
                assert_eq!(
                    policy.can_access(Some(&p), route),
                    expected,
                    "role {role} route {route}"
                );
            }
        }
    }

    #[test]
    fn unknown_kind_denied_everywhere() {
        let policy = RoutePolicy;
        let p = principal(Role::Admin, IdentityKind::Unknown);

        for route in Route::ALL {
            assert!(!policy.can_access(Some(&p), route), "route {route}");
        }
    }

    #[test]
    fn landing_route_by_kind() {
        let policy = RoutePolicy;
        assert_eq!(
            policy.landing_route(&principal(Role::Member, IdentityKind::Employee)),
            Route::Survey
        );
        assert_eq!(
            policy.landing_route(&principal(Role::Admin, IdentityKind::Hr)),
            Route::Dashboard
        );
    }

    #[test]
    fn landing_route_is_always_accessible() {
        let policy = RoutePolicy;
        let roles = [Role::Master, Role::Admin, Role::Member, Role::Unknown];
        let kinds = [IdentityKind::Hr, IdentityKind::Employee];

        for role in roles {
            for kind in kinds {
                let p = principal(role, kind);
                let landing = policy.landing_route(&p);
                assert!(
                    policy.can_access(Some(&p), landing),
                    "role {role} kind {kind} landing {landing}"
                );
            }
        }
    }

    #[test]
    fn decide_allow_has_no_redirect() {
        let policy = RoutePolicy;
        let p = principal(Role::Master, IdentityKind::Hr);

        let decision = policy.decide(Some(&p), Route::Customers);
        assert!(decision.allowed);
        assert_eq!(decision.redirect_to, None);
    }

    #[test]
    fn decide_deny_redirects_to_landing() {
        let policy = RoutePolicy;
        let p = principal(Role::Admin, IdentityKind::Hr);

        let decision = policy.decide(Some(&p), Route::Customers);
        assert!(!decision.allowed);
        assert_eq!(decision.redirect_to, Some(Route::Dashboard));
    }

    #[test]
    fn decide_without_principal_redirects_to_login() {
        let policy = RoutePolicy;
        let decision = policy.decide(None, Route::Dashboard);
        assert_eq!(decision, RouteDecision::deny_to_login());
    }

    #[test]
    fn restriction_notice_for_employee_off_survey() {
        let policy = RoutePolicy;
        let employee = principal(Role::Member, IdentityKind::Employee);
        let hr = principal(Role::Admin, IdentityKind::Hr);

        assert!(policy.shows_restriction_notice(&employee, Route::Dashboard));
        assert!(!policy.shows_restriction_notice(&employee, Route::Survey));
        assert!(!policy.shows_restriction_notice(&hr, Route::Dashboard));
    }
}
