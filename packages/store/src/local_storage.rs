//! `localStorage`-backed store for the web build.

use crate::KeyValueStore;

/// Browser `localStorage` KeyValueStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: String) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, &value).is_err() {
                tracing::warn!("localStorage write failed for {key}");
            }
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
