//! Durable client-side key-value persistence.
//!
//! Everything Tandem keeps across restarts (the session record, local
//! preferences) goes through the [`KeyValueStore`] trait, so the same
//! session logic works against an in-memory map (tests), the filesystem
//! (desktop), or the browser's `localStorage` (web).

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(target_arch = "wasm32")]
mod local_storage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

/// Async interface for persisting small string values under fixed keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: String) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}
