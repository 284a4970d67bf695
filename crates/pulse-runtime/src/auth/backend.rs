//! Auth backend abstraction and the seeded mock implementation.

use parking_lot::Mutex;
use pulse_auth::{AuthError, Principal};
use pulse_types::{IdentityKind, OrganizationId, PrincipalId, Role};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Login credentials.
///
/// Carried as plain strings; the backend behind the trait decides
/// what to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email or handle.
    pub email: String,
    /// Password, passed through to the backend verbatim.
    pub password: String,
}

impl Credentials {
    /// Creates credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Authentication backend abstraction.
///
/// Implementations must be thread-safe (`Send + Sync`) for use across
/// async tasks.
pub trait AuthBackend: Send + Sync {
    /// Authenticates and returns the principal.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Principal, AuthError>> + Send;

    /// Ends the backend-side session.
    fn logout(&self) -> impl Future<Output = ()> + Send;

    /// Revalidates the backend-side session.
    ///
    /// # Errors
    ///
    /// [`AuthError::SessionInvalid`] if no session is active,
    /// [`AuthError::Unreachable`] if the backend cannot be reached.
    fn validate_session(&self) -> impl Future<Output = Result<Principal, AuthError>> + Send;
}

/// One identity known to the [`MockAuthBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockIdentity {
    /// Login email.
    pub email: String,
    /// Expected password.
    pub password: String,
    /// Owning organization.
    pub organization: OrganizationId,
    /// Role tier granted on login.
    pub role: Role,
    /// Identity kind granted on login.
    pub kind: IdentityKind,
}

impl MockIdentity {
    /// Creates a mock identity.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        organization: OrganizationId,
        role: Role,
        kind: IdentityKind,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            organization,
            role,
            kind,
        }
    }
}

/// Seeded local auth backend.
///
/// Holds a fixed list of identities injected at construction and a
/// backend-side "current session" slot, mirroring the surface of a
/// real backend closely enough for the session manager not to care.
///
/// # Example
///
/// ```
/// use pulse_runtime::auth::{AuthBackend, Credentials, MockAuthBackend, MockIdentity};
/// use pulse_types::{IdentityKind, OrganizationId, Role};
///
/// # async fn example() {
/// let backend = MockAuthBackend::with_identities(vec![MockIdentity::new(
///     "ana@example.com",
///     "s3cret",
///     OrganizationId::seeded("acme"),
///     Role::Admin,
///     IdentityKind::Hr,
/// )]);
///
/// let principal = backend
///     .login(&Credentials::new("ana@example.com", "s3cret"))
///     .await
///     .expect("valid credentials");
/// assert_eq!(principal.email(), "ana@example.com");
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockAuthBackend {
    identities: Vec<MockIdentity>,
    current: Mutex<Option<Principal>>,
}

impl MockAuthBackend {
    /// Creates a backend that knows no identities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend seeded with the given identities.
    #[must_use]
    pub fn with_identities(identities: Vec<MockIdentity>) -> Self {
        Self {
            identities,
            current: Mutex::new(None),
        }
    }

    fn principal_for(identity: &MockIdentity) -> Principal {
        // Deterministic id so the same identity logs in as the same
        // principal across sessions.
        Principal::new(
            PrincipalId::seeded(&identity.email),
            identity.email.clone(),
            identity.organization,
            identity.role,
            identity.kind,
        )
    }
}

impl AuthBackend for MockAuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        let identity = self
            .identities
            .iter()
            .find(|i| i.email.eq_ignore_ascii_case(&credentials.email));

        match identity {
            Some(identity) if identity.password == credentials.password => {
                let principal = Self::principal_for(identity);
                *self.current.lock() = Some(principal.clone());
                Ok(principal)
            }
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn logout(&self) {
        *self.current.lock() = None;
    }

    async fn validate_session(&self) -> Result<Principal, AuthError> {
        self.current.lock().clone().ok_or(AuthError::SessionInvalid)
    }
}
