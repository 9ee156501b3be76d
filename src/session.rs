use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File name the admin token persists under, the local-storage key of the
/// browser client.
pub const TOKEN_FILE_NAME: &str = "motofix_admin_token";

/// Where the current session token lives. Injected into the API client so
/// tests and embedders can swap the persistence mechanism.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        matches!(self.get().as_deref(), Some(token) if !token.is_empty())
    }
}

impl<S: TokenStore + ?Sized> TokenStore for std::sync::Arc<S> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Ephemeral store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, token: &str) {
        *self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
    }

    fn clear(&self) {
        *self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// Persists the token as a single file in the given directory. Storage
/// failures degrade to an unauthenticated session rather than aborting the
/// operation that triggered them.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_FILE_NAME),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "token read failed");
                None
            }
        }
    }

    fn set(&self, token: &str) {
        if let Err(err) = fs::write(&self.path, token) {
            tracing::warn!(path = %self.path.display(), error = %err, "token write failed");
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "token clear failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FileTokenStore, MemoryTokenStore, TokenStore};

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);
        assert!(!store.is_authenticated());

        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
        assert!(store.is_authenticated());

        store.clear();
        assert_eq!(store.get(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        let store = MemoryTokenStore::new();
        store.set("");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileTokenStore::new(dir.path());

        assert_eq!(store.get(), None);

        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));

        store.clear();
        assert_eq!(store.get(), None);
        // Clearing twice is fine.
        store.clear();
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        FileTokenStore::new(dir.path()).set("persisted");

        let reopened = FileTokenStore::new(dir.path());
        assert_eq!(reopened.get().as_deref(), Some("persisted"));
    }
}
