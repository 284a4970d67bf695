//! In-memory session storage.

use super::{SessionSnapshot, SessionStore, StorageError};
use parking_lot::Mutex;

/// In-memory single-slot store.
///
/// The in-memory fake for tests and for hosts that provide no durable
/// storage; contents die with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<SessionSnapshot>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        *self.slot.lock() = Some(snapshot.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<SessionSnapshot>, StorageError> {
        Ok(self.slot.lock().clone())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock() = None;
        Ok(())
    }

    async fn exists(&self) -> Result<bool, StorageError> {
        Ok(self.slot.lock().is_some())
    }
}
