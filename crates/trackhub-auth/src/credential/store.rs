//! Durable credential cache.
//!
//! The store is a dumb string cache: it performs no validation and never
//! fails. Storage being unavailable degrades to "no credential cached",
//! so a broken cache can only ever log a user out, never lock them in.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

/// Abstracts the durable cache holding the current bearer credential.
///
/// Implementations hold at most one credential string. All operations are
/// infallible from the caller's perspective: storage failures surface as
/// an absent credential on read and as silent no-ops on write.
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Returns the cached credential, or `None` if absent or unreadable.
    fn get(&self) -> Option<String>;

    /// Caches a credential, replacing any previous value.
    fn set(&self, credential: &str);

    /// Removes the cached credential. Idempotent.
    fn clear(&self);
}

/// File-backed credential store.
///
/// Persists the credential as a single file so it survives process
/// restarts within the same user profile, the way browser local storage
/// survives page reloads.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    /// Location of the credential file.
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store persisting at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let credential = contents.trim().to_string();
                if credential.is_empty() {
                    None
                } else {
                    Some(credential)
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Credential cache unreadable");
                None
            }
        }
    }

    fn set(&self, credential: &str) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!(path = %parent.display(), error = %e, "Failed to create credential cache directory");
            return;
        }
        if let Err(e) = fs::write(&self.path, credential) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist credential");
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to clear credential cache");
            }
        }
    }
}

/// In-memory credential store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    /// The cached credential, if any.
    credential: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.lock().clone()
    }

    fn set(&self, credential: &str) {
        *self.lock() = Some(credential.to_string());
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}

impl MemoryCredentialStore {
    // The store contract is infallible; a poisoned lock just yields the
    // last written value.
    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.credential
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(), None);
        store.set("abc.def.ghi");
        assert_eq!(store.get(), Some("abc.def.ghi".to_string()));
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credential"));
        assert_eq!(store.get(), None);
        store.set("abc.def.ghi");
        assert_eq!(store.get(), Some("abc.def.ghi".to_string()));
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credential"));
        store.clear();
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested/profile/credential"));
        store.set("tok");
        assert_eq!(store.get(), Some("tok".to_string()));
    }

    #[test]
    fn test_unwritable_path_degrades_to_absent() {
        // Writing under a path whose parent is a file cannot succeed; the
        // store must swallow the failure and read back as absent.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let store = FileCredentialStore::new(blocker.join("credential"));
        store.set("tok");
        assert_eq!(store.get(), None);
    }
}
