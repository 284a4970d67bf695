//! Session storage abstraction.
//!
//! The [`SessionStore`] trait defines the interface for persisting the
//! single current-session snapshot. This keeps the backend pluggable:
//! a local file for the desktop flow, an in-memory fake for tests, or
//! whatever key-value scoped storage the host environment provides.

use super::{SessionSnapshot, StorageError};
use std::future::Future;

/// Single-slot session snapshot storage.
///
/// Implementations must be thread-safe (`Send + Sync`) for use across
/// async tasks. "No session yet" is a normal condition and is modeled
/// as `Ok(None)` on [`load`](Self::load), not as an error.
///
/// # Example
///
/// ```no_run
/// use pulse_runtime::session::{SessionSnapshot, SessionStore, StorageError};
///
/// async fn remember(
///     store: &impl SessionStore,
///     snapshot: &SessionSnapshot,
/// ) -> Result<(), StorageError> {
///     store.save(snapshot).await?;
///     Ok(())
/// }
/// ```
pub trait SessionStore: Send + Sync {
    /// Saves the snapshot, replacing any previous one.
    fn save(
        &self,
        snapshot: &SessionSnapshot,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Loads the snapshot, or `None` if no session is persisted.
    fn load(&self) -> impl Future<Output = Result<Option<SessionSnapshot>, StorageError>> + Send;

    /// Removes the snapshot. Idempotent: clearing an empty store is
    /// `Ok`.
    fn clear(&self) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Returns `true` if a snapshot is persisted.
    fn exists(&self) -> impl Future<Output = Result<bool, StorageError>> + Send;
}
