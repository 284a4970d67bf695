//! Unified error interface for Pulse.
//!
//! Every Pulse error type implements [`ErrorCode`] so the application
//! layer can handle failures uniformly:
//!
//! - **Machine-readable codes**: stable identifiers for logging and
//!   programmatic handling
//! - **Recoverability info**: drives retry affordances in whatever
//!   frontend sits above the core
//!
//! # Example
//!
//! ```
//! use pulse_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum FetchError {
//!     Unreachable,
//!     BadPayload,
//! }
//!
//! impl ErrorCode for FetchError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::Unreachable => "FETCH_UNREACHABLE",
//!             Self::BadPayload => "FETCH_BAD_PAYLOAD",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Unreachable)
//!     }
//! }
//!
//! let err = FetchError::Unreachable;
//! assert_eq!(err.code(), "FETCH_UNREACHABLE");
//! assert!(err.is_recoverable());
//! ```

/// Unified error code interface for Pulse errors.
///
/// # Code Format
///
/// Error codes should be:
///
/// - **UPPER_SNAKE_CASE**: e.g., `"SUBMIT_UNREACHABLE"`
/// - **Namespace-prefixed**: e.g., `"AUTH_"`, `"ENGINE_"`, `"STORAGE_"`
/// - **Stable**: codes are an API contract and should not change once
///   defined
///
/// # Recoverability
///
/// An error is recoverable if retrying may succeed or the user can take
/// an action that fixes it (re-entering credentials, retrying a
/// submission). Programmer errors and invalid input that will not
/// change on retry are not recoverable.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns `true` if retrying or user action may resolve the error.
    fn is_recoverable(&self) -> bool;
}
