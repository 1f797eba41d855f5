//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists each key as one file under a base directory. It is
//! used on desktop platforms to retain the session across app restarts.
//!
//! Use [`FileStore::in_data_dir`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/tandem/` |
//! | Linux | `~/.local/share/tandem/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\tandem\` |

use std::path::PathBuf;

use crate::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at the platform data directory, falling back to the
    /// current directory when none is available.
    pub fn in_data_dir(app_name: &str) -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app_name);
        Self::new(base)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are dotted identifiers like "tandem.session"; keep any path
        // separators out of the filename.
        self.base.join(key.replace(['/', '\\'], "_"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    async fn set(&self, key: &str, value: String) {
        if let Err(err) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("failed to create store directory: {err}");
            return;
        }
        if let Err(err) = std::fs::write(self.path_for(key), value) {
            tracing::warn!("failed to persist {key}: {err}");
        }
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.path_for(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("tandem_store_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.set("tandem.session", "{\"ok\":true}".to_string()).await;

        // Re-open from the same directory
        let store2 = FileStore::new(dir.clone());
        assert_eq!(
            store2.get("tandem.session").await.as_deref(),
            Some("{\"ok\":true}")
        );

        store2.remove("tandem.session").await;
        assert!(store2.get("tandem.session").await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
