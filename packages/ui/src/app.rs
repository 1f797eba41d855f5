//! Application context: one [`AppClient`] shared through the component tree.

use client::{AppClient, ClientConfig};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = store::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// The application client, specialized to this platform's persistence.
pub type AppHandle = AppClient<PlatformStore>;

fn platform_store() -> PlatformStore {
    #[cfg(target_arch = "wasm32")]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::in_data_dir("tandem")
    }
}

/// Get the shared application client. Clones share the cache, the
/// notifier and the session.
pub fn use_app() -> AppHandle {
    use_context::<AppHandle>()
}

/// Provider component owning the application client.
/// Wrap the router with this (outside [`crate::AuthProvider`]).
#[component]
pub fn AppProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = ClientConfig::load();
        AppClient::new(&config, platform_store())
    });

    rsx! {
        {children}
    }
}
