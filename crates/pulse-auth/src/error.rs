//! Authentication error type.
//!
//! Route and permission decisions never error — malformed input
//! degrades to deny. [`AuthError`] covers the authentication boundary
//! only: logging in and revalidating a persisted session.

use pulse_types::ErrorCode;
use thiserror::Error;

/// Failure at the authentication boundary.
///
/// None of these is fatal to the caller: invalid credentials are shown
/// to the user, an unreachable backend engages the local fallback
/// policy, and an invalid session sends the user back to login.
///
/// # Example
///
/// ```
/// use pulse_auth::AuthError;
/// use pulse_types::ErrorCode;
///
/// let err = AuthError::Unreachable("connection refused".to_string());
/// assert_eq!(err.code(), "AUTH_UNREACHABLE");
/// assert!(err.is_recoverable());
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The backend rejected the supplied credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The backend could not be reached.
    ///
    /// The session manager may engage its fallback policy on this
    /// variant; it never does so for the other variants.
    #[error("auth backend unreachable: {0}")]
    Unreachable(String),

    /// A persisted session no longer validates.
    #[error("session is no longer valid")]
    SessionInvalid,
}

impl ErrorCode for AuthError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "AUTH_INVALID_CREDENTIALS",
            Self::Unreachable(_) => "AUTH_UNREACHABLE",
            Self::SessionInvalid => "AUTH_SESSION_INVALID",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // Retyping credentials may succeed
            Self::InvalidCredentials => true,
            // Fallback or retry may succeed
            Self::Unreachable(_) => true,
            // Logging in again creates a fresh session
            Self::SessionInvalid => true,
        }
    }
}
