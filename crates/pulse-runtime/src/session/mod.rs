//! Session persistence.
//!
//! The current principal survives a process restart through a
//! single-slot [`SessionStore`]. The snapshot is ephemeral state: it
//! is overwritten on login, cleared on logout, and revalidated through
//! the auth backend on restore.

mod error;
mod local;
mod memory;
mod snapshot;
mod store;

pub use error::StorageError;
pub use local::{default_session_dir, LocalFileStore};
pub use memory::MemoryStore;
pub use snapshot::SessionSnapshot;
pub use store::SessionStore;
