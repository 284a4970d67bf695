//! Persisted session snapshot.

use chrono::{DateTime, Utc};
use pulse_auth::Principal;
use serde::{Deserialize, Serialize};

use super::StorageError;

/// The persisted form of a logged-in session.
///
/// Deserializing re-derives the principal's permission set from its
/// role (see [`Principal`]), so a snapshot written by an older build
/// can never restore a stale capability set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The principal that was logged in.
    pub principal: Principal,
    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
}

impl SessionSnapshot {
    /// Creates a snapshot stamped with the current time.
    #[must_use]
    pub fn new(principal: Principal) -> Self {
        Self {
            principal,
            saved_at: Utc::now(),
        }
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serde`] if serialization fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serde`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }
}
