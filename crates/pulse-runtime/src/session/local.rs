//! Local file-based session storage.
//!
//! The snapshot lives in a single JSON file:
//!
//! ```text
//! ~/.pulse/
//! └── session.json
//! ```

use super::{SessionSnapshot, SessionStore, StorageError};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Local file-based session store.
///
/// The default storage backend for single-machine use.
///
/// # Features
///
/// - Snapshot stored as pretty-printed JSON
/// - Atomic writes (write to temp, then rename)
/// - Automatic directory creation
///
/// # Example
///
/// ```no_run
/// use pulse_runtime::session::{LocalFileStore, SessionStore};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = LocalFileStore::new(PathBuf::from("~/.pulse"))?;
/// let snapshot = store.load().await?;
/// println!("persisted session: {}", snapshot.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    /// Directory holding the session file.
    base_path: PathBuf,
}

impl LocalFileStore {
    /// Creates a new local file store.
    ///
    /// The directory will be created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DirectoryCreation`] if the directory
    /// cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self, StorageError> {
        let expanded = expand_tilde(&base_path);

        if !expanded.exists() {
            std::fs::create_dir_all(&expanded)
                .map_err(|e| StorageError::directory_creation(&expanded, e))?;
        }

        Ok(Self {
            base_path: expanded,
        })
    }

    /// Returns the base path.
    #[must_use]
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn session_path(&self) -> PathBuf {
        self.base_path.join("session.json")
    }

    fn temp_path(&self) -> PathBuf {
        self.base_path.join(".session.json.tmp")
    }
}

impl SessionStore for LocalFileStore {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        let json = snapshot.to_json()?;
        let path = self.session_path();
        let temp_path = self.temp_path();

        // Write to temp file first (atomic write pattern)
        fs::write(&temp_path, &json).await?;

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, &path).await?;

        Ok(())
    }

    async fn load(&self) -> Result<Option<SessionSnapshot>, StorageError> {
        let path = self.session_path();

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).await?;
        let snapshot = SessionSnapshot::from_json(&json)?;

        Ok(Some(snapshot))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let path = self.session_path();

        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    async fn exists(&self) -> Result<bool, StorageError> {
        Ok(self.session_path().exists())
    }
}

/// Expands `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(rest) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
    }
    path.to_path_buf()
}

/// Returns the default session storage directory.
#[must_use]
pub fn default_session_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pulse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_auth::Principal;
    use pulse_types::{IdentityKind, OrganizationId, PrincipalId, Role};
    use tempfile::TempDir;

    fn test_store() -> (LocalFileStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = LocalFileStore::new(temp.path().to_path_buf()).unwrap();
        (store, temp)
    }

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot::new(Principal::new(
            PrincipalId::new(),
            "local@example.com",
            OrganizationId::new(),
            Role::Admin,
            IdentityKind::Hr,
        ))
    }

    #[tokio::test]
    async fn save_and_load() {
        let (store, _temp) = test_store();

        let snap = snapshot();
        store.save(&snap).await.unwrap();

        let loaded = store.load().await.unwrap().expect("snapshot present");
        assert_eq!(loaded, snap);
    }

    #[tokio::test]
    async fn load_empty_is_none() {
        let (store, _temp) = test_store();
        assert!(store.load().await.unwrap().is_none());
        assert!(!store.exists().await.unwrap());
    }

    #[tokio::test]
    async fn save_overwrites_previous() {
        let (store, _temp) = test_store();

        store.save(&snapshot()).await.unwrap();
        let second = snapshot();
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap().expect("snapshot present");
        assert_eq!(loaded.principal.id(), second.principal.id());
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let (store, _temp) = test_store();

        store.save(&snapshot()).await.unwrap();
        assert!(store.exists().await.unwrap());

        store.clear().await.unwrap();
        assert!(!store.exists().await.unwrap());

        // Clearing again is fine.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_is_serde_error() {
        let (store, _temp) = test_store();
        std::fs::write(store.base_path().join("session.json"), "not json").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serde(_)));
    }

    #[test]
    fn expand_tilde_with_home() {
        let expanded = expand_tilde(Path::new("~/test/path"));
        if dirs::home_dir().is_some() {
            assert!(!expanded.to_str().unwrap().starts_with("~/"));
        }
    }

    #[test]
    fn expand_tilde_without_tilde() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(expand_tilde(&path), path);
    }
}
