//! Session manager: the current principal and its lifecycle.

use super::{AuthBackend, Credentials};
use crate::session::{SessionSnapshot, SessionStore};
use pulse_auth::{AuthError, Principal};
use pulse_types::{IdentityKind, OrganizationId, PrincipalId, Role};

/// What to do when the auth backend is unreachable.
///
/// The fallback is a development concession the system keeps on
/// purpose: instead of a dead login screen, an unreachable backend
/// yields a locally-synthesized principal, reported explicitly as
/// [`LoginOutcome::Fallback`] and logged at warn. It engages only on
/// [`AuthError::Unreachable`] — invalid credentials never fall back.
#[derive(Debug, Clone)]
pub struct FallbackPolicy {
    /// Whether the fallback engages at all.
    pub enabled: bool,
    /// Role granted to the synthesized principal.
    pub role: Role,
    /// Kind granted to the synthesized principal.
    pub kind: IdentityKind,
    /// Organization the synthesized principal belongs to.
    pub organization: OrganizationId,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            role: Role::Admin,
            kind: IdentityKind::Hr,
            organization: OrganizationId::seeded("fallback"),
        }
    }
}

impl FallbackPolicy {
    /// A policy that never engages.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// How a successful login was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// The backend authenticated the credentials.
    Authenticated(Principal),
    /// The backend was unreachable; a local principal was synthesized.
    Fallback {
        /// The synthesized principal.
        principal: Principal,
        /// Why the backend call failed.
        reason: String,
    },
}

impl LoginOutcome {
    /// Returns the logged-in principal, however it was resolved.
    #[must_use]
    pub fn principal(&self) -> &Principal {
        match self {
            Self::Authenticated(p) | Self::Fallback { principal: p, .. } => p,
        }
    }

    /// Returns `true` if the fallback engaged.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Owns the current principal and its persistence.
///
/// Lifecycle:
///
/// - [`login`](Self::login) creates the principal (backend or
///   fallback) and persists a snapshot
/// - [`restore`](Self::restore) revalidates a persisted snapshot at
///   process start
/// - [`logout`](Self::logout) destroys both the principal and the
///   snapshot
///
/// The principal is immutable while logged in; a role change arrives
/// as a wholesale replacement via a fresh login.
#[derive(Debug)]
pub struct SessionManager<B, S> {
    backend: B,
    store: S,
    fallback: FallbackPolicy,
    current: Option<Principal>,
}

impl<B: AuthBackend, S: SessionStore> SessionManager<B, S> {
    /// Creates a manager with no logged-in principal.
    #[must_use]
    pub fn new(backend: B, store: S, fallback: FallbackPolicy) -> Self {
        Self {
            backend,
            store,
            fallback,
            current: None,
        }
    }

    /// Returns the current principal, if logged in.
    #[must_use]
    pub fn current(&self) -> Option<&Principal> {
        self.current.as_ref()
    }

    /// Authenticates against the backend, falling back per policy.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] straight from the backend —
    ///   never triggers the fallback
    /// - [`AuthError::Unreachable`] when the backend is down and the
    ///   fallback is disabled
    pub async fn login(&mut self, credentials: &Credentials) -> Result<LoginOutcome, AuthError> {
        let outcome = match self.backend.login(credentials).await {
            Ok(principal) => LoginOutcome::Authenticated(principal),
            Err(AuthError::Unreachable(reason)) if self.fallback.enabled => {
                tracing::warn!(
                    email = %credentials.email,
                    reason = %reason,
                    "auth backend unreachable, synthesizing local principal"
                );
                let principal = Principal::new(
                    PrincipalId::seeded(&credentials.email),
                    credentials.email.clone(),
                    self.fallback.organization,
                    self.fallback.role,
                    self.fallback.kind,
                );
                LoginOutcome::Fallback { principal, reason }
            }
            Err(err) => return Err(err),
        };

        self.persist(outcome.principal()).await;
        self.current = Some(outcome.principal().clone());
        Ok(outcome)
    }

    /// Restores a persisted session at process start.
    ///
    /// Revalidates through the backend. An invalid session clears the
    /// snapshot; an unreachable backend trusts the snapshot when the
    /// fallback is enabled.
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError::Unreachable`] when the fallback is
    /// disabled.
    pub async fn restore(&mut self) -> Result<Option<&Principal>, AuthError> {
        let snapshot = match self.store.load().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable session snapshot");
                None
            }
        };
        let Some(snapshot) = snapshot else {
            return Ok(None);
        };

        match self.backend.validate_session().await {
            Ok(principal) => {
                self.current = Some(principal);
            }
            Err(AuthError::Unreachable(reason)) if self.fallback.enabled => {
                tracing::warn!(
                    reason = %reason,
                    "auth backend unreachable, restoring principal from snapshot"
                );
                self.current = Some(snapshot.principal);
            }
            Err(AuthError::SessionInvalid | AuthError::InvalidCredentials) => {
                tracing::debug!("persisted session no longer valid, clearing snapshot");
                if let Err(err) = self.store.clear().await {
                    tracing::warn!(error = %err, "failed to clear stale session snapshot");
                }
                return Ok(None);
            }
            Err(err) => return Err(err),
        }

        Ok(self.current.as_ref())
    }

    /// Logs out, destroying the principal and the snapshot.
    pub async fn logout(&mut self) {
        self.backend.logout().await;
        if let Err(err) = self.store.clear().await {
            tracing::warn!(error = %err, "failed to clear session snapshot on logout");
        }
        self.current = None;
    }

    async fn persist(&self, principal: &Principal) {
        let snapshot = SessionSnapshot::new(principal.clone());
        // Login must not fail because persistence did.
        if let Err(err) = self.store.save(&snapshot).await {
            tracing::warn!(error = %err, "failed to persist session snapshot");
        }
    }
}
