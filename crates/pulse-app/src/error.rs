//! Application-level error type.
//!
//! [`AppError`] unifies all internal errors for the application layer.

use pulse_auth::{AuthError, PermissionSet};
use pulse_runtime::{ConfigError, StorageError};
use pulse_survey::{CatalogError, EngineError, SubmissionError};
use pulse_types::ErrorCode;
use thiserror::Error;

/// Unified application error.
///
/// Collects all internal errors into a single type for frontend
/// handling.
///
/// # Example
///
/// ```
/// use pulse_app::AppError;
/// use pulse_auth::AuthError;
/// use pulse_types::ErrorCode;
///
/// // Internal error automatically converts to AppError
/// let app_err: AppError = AuthError::InvalidCredentials.into();
/// assert_eq!(app_err.code(), "AUTH_INVALID_CREDENTIALS");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Survey engine rejected a transition
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Question catalog failed
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Submission sink failed
    #[error("submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Session storage failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration failed
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The operation requires a logged-in principal
    #[error("not authenticated")]
    NotAuthenticated,

    /// The principal lacks a required capability
    #[error("missing permission: {required}")]
    Forbidden {
        /// The capabilities the operation requires.
        required: PermissionSet,
    },
}

impl ErrorCode for AppError {
    fn code(&self) -> &'static str {
        match self {
            Self::Auth(e) => e.code(),
            Self::Engine(e) => e.code(),
            Self::Catalog(e) => e.code(),
            Self::Submission(e) => e.code(),
            Self::Storage(e) => e.code(),
            Self::Config(e) => e.code(),
            Self::NotAuthenticated => "APP_NOT_AUTHENTICATED",
            Self::Forbidden { .. } => "APP_FORBIDDEN",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Auth(e) => e.is_recoverable(),
            Self::Engine(e) => e.is_recoverable(),
            Self::Catalog(e) => e.is_recoverable(),
            Self::Submission(e) => e.is_recoverable(),
            Self::Storage(e) => e.is_recoverable(),
            Self::Config(e) => e.is_recoverable(),
            // Logging in fixes it
            Self::NotAuthenticated => true,
            // A different principal is needed, not a retry
            Self::Forbidden { .. } => false,
        }
    }
}
