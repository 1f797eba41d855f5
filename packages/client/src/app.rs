//! The application client: one of everything, wired together.

use api::{ApiClient, ApiError};
use store::KeyValueStore;

use crate::cache::QueryCache;
use crate::config::ClientConfig;
use crate::mutation::{self, MutationKind};
use crate::notify::Notifier;
use crate::session::AuthStore;

/// Everything the UI needs to read and write application data.
///
/// The per-resource operations live in sibling modules as `impl` blocks on
/// this type. Clones share the cache, the notifier, the token slot and the
/// session state.
#[derive(Clone)]
pub struct AppClient<S> {
    pub api: ApiClient,
    pub cache: QueryCache,
    pub notifier: Notifier,
    pub auth: AuthStore<ApiClient, S>,
}

impl<S> AppClient<S>
where
    S: KeyValueStore + Clone,
{
    pub fn new(config: &ClientConfig, store: S) -> Self {
        let api = ApiClient::new(config.api_base_url.clone());
        Self {
            cache: QueryCache::new(config.cache_config()),
            notifier: Notifier::new(),
            // The auth store shares the api client, so the token it sets
            // is the one requests go out with.
            auth: AuthStore::new(api.clone(), store),
            api,
        }
    }

    /// Run the post-write protocol for `result`: invalidation and a
    /// success toast on `Ok`, a global error notice on `Err`.
    pub(crate) fn settle<T>(
        &self,
        kind: MutationKind,
        result: Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        mutation::settle(&self.cache, &self.notifier, &kind, result)
    }
}
