//! Authentication state and its persisted record.
//!
//! [`AuthStore`] owns the in-memory [`Session`] and mirrors it to a
//! [`KeyValueStore`] under [`SESSION_KEY`] so a reload resumes where the
//! user left off. The backend is a trait so tests can drive the store
//! without a server.
//!
//! Rehydration runs before the first authenticated render: until it
//! completes, [`Session::is_loading`] is true and routing decisions must
//! wait. A record that fails to parse is discarded (and removed from the
//! store) rather than surfaced — a stale schema should look like a fresh
//! logout, not an error.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use api::{ApiClient, ApiError, LoginResponse, User};
use store::KeyValueStore;

/// Storage key the serialized [`SessionRecord`] lives under.
pub const SESSION_KEY: &str = "tandem.session";

/// What gets persisted across reloads.
///
/// Both tokens are stored together with the user, so rehydration restores
/// the full session in one read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    pub is_authenticated: bool,
}

/// In-memory authentication state the UI renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            is_authenticated: false,
            // Loading until the persisted record has been consulted.
            is_loading: true,
        }
    }
}

/// Server side of authentication, abstracted for tests.
pub trait AuthBackend {
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<LoginResponse, ApiError>>;

    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<LoginResponse, ApiError>>;

    fn logout(&self) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// Attach or clear the bearer token used by subsequent requests.
    fn set_token(&self, token: Option<String>);
}

impl AuthBackend for ApiClient {
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<LoginResponse, ApiError>> {
        ApiClient::login(self, username, password)
    }

    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<LoginResponse, ApiError>> {
        ApiClient::register(self, username, email, password)
    }

    fn logout(&self) -> impl std::future::Future<Output = Result<(), ApiError>> {
        ApiClient::logout(self)
    }

    fn set_token(&self, token: Option<String>) {
        ApiClient::set_token(self, token);
    }
}

/// Authentication store: session state plus its persisted mirror.
///
/// Clones share state; the application holds one instance.
#[derive(Clone)]
pub struct AuthStore<B, S> {
    backend: B,
    store: S,
    state: Arc<Mutex<Session>>,
}

impl<B, S> AuthStore<B, S>
where
    B: AuthBackend + Clone,
    S: KeyValueStore + Clone,
{
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            store,
            state: Arc::new(Mutex::new(Session::default())),
        }
    }

    /// Current session state, by value.
    pub fn snapshot(&self) -> Session {
        self.state.lock().unwrap().clone()
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        self.state.lock().unwrap().is_loading = true;
        match self.backend.login(username, password).await {
            Ok(response) => self.establish(response).await,
            Err(err) => {
                self.state.lock().unwrap().is_loading = false;
                Err(err)
            }
        }
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        self.state.lock().unwrap().is_loading = true;
        match self.backend.register(username, email, password).await {
            Ok(response) => self.establish(response).await,
            Err(err) => {
                self.state.lock().unwrap().is_loading = false;
                Err(err)
            }
        }
    }

    async fn establish(&self, response: LoginResponse) -> Result<User, ApiError> {
        let record = SessionRecord {
            user: response.user.clone(),
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token,
            is_authenticated: true,
        };
        match serde_json::to_string(&record) {
            Ok(serialized) => self.store.set(SESSION_KEY, serialized).await,
            Err(err) => tracing::warn!("failed to serialize session record: {err}"),
        }

        self.backend.set_token(Some(response.access_token.clone()));
        *self.state.lock().unwrap() = Session {
            user: Some(response.user.clone()),
            token: Some(response.access_token),
            is_authenticated: true,
            is_loading: false,
        };
        Ok(response.user)
    }

    /// Tear the session down. Local state is cleared first; the server-side
    /// logout is best-effort and its failure is not surfaced.
    pub async fn logout(&self) {
        self.store.remove(SESSION_KEY).await;
        self.backend.set_token(None);
        *self.state.lock().unwrap() = Session {
            is_loading: false,
            ..Session::default()
        };

        if let Err(err) = self.backend.logout().await {
            tracing::debug!("server logout failed, session cleared locally: {err}");
        }
    }

    /// Restore a persisted session, if any. Always leaves `is_loading`
    /// false; the UI may route on the result.
    pub async fn rehydrate(&self) {
        let restored = match self.store.get(SESSION_KEY).await {
            Some(raw) => match serde_json::from_str::<SessionRecord>(&raw) {
                Ok(record) if record.is_authenticated => Some(record),
                Ok(_) => None,
                Err(err) => {
                    tracing::warn!("discarding unreadable session record: {err}");
                    self.store.remove(SESSION_KEY).await;
                    None
                }
            },
            None => None,
        };

        match restored {
            Some(record) => {
                self.backend.set_token(Some(record.access_token.clone()));
                *self.state.lock().unwrap() = Session {
                    user: Some(record.user),
                    token: Some(record.access_token),
                    is_authenticated: true,
                    is_loading: false,
                };
            }
            None => {
                self.state.lock().unwrap().is_loading = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use store::MemoryStore;

    #[derive(Clone, Default)]
    struct FakeAuth {
        token: Arc<Mutex<Option<String>>>,
        fail_login: bool,
        fail_logout: bool,
        // When set, login/register wait for a notification before responding.
        gate: Option<Arc<tokio::sync::Notify>>,
    }

    fn sample_user() -> User {
        User {
            id: 1,
            username: "maya".to_string(),
            email: "maya@example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    impl AuthBackend for FakeAuth {
        async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse, ApiError> {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail_login {
                return Err(ApiError::Status {
                    status: 401,
                    message: "Invalid username or password".to_string(),
                });
            }
            Ok(LoginResponse {
                access_token: "access-1".to_string(),
                refresh_token: "refresh-1".to_string(),
                user: sample_user(),
            })
        }

        async fn register(
            &self,
            _username: &str,
            _email: &str,
            _password: &str,
        ) -> Result<LoginResponse, ApiError> {
            self.login("", "").await
        }

        async fn logout(&self) -> Result<(), ApiError> {
            if self.fail_logout {
                return Err(ApiError::Network("connection refused".to_string()));
            }
            Ok(())
        }

        fn set_token(&self, token: Option<String>) {
            *self.token.lock().unwrap() = token;
        }
    }

    #[tokio::test]
    async fn test_login_persists_session_and_sets_token() {
        let backend = FakeAuth::default();
        let store = MemoryStore::new();
        let auth = AuthStore::new(backend.clone(), store.clone());

        let user = auth.login("maya", "hunter22").await.unwrap();
        assert_eq!(user.username, "maya");

        let session = auth.snapshot();
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert_eq!(session.token.as_deref(), Some("access-1"));
        assert_eq!(backend.token.lock().unwrap().as_deref(), Some("access-1"));

        let raw = store.get(SESSION_KEY).await.unwrap();
        let record: SessionRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.access_token, "access-1");
        assert_eq!(record.refresh_token, "refresh-1");
        assert!(record.is_authenticated);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_no_trace() {
        let backend = FakeAuth {
            fail_login: true,
            ..FakeAuth::default()
        };
        let store = MemoryStore::new();
        let auth = AuthStore::new(backend.clone(), store.clone());

        let err = auth.login("maya", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid username or password");

        let session = auth.snapshot();
        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
        assert!(backend.token.lock().unwrap().is_none());
        assert!(store.get(SESSION_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_login_sets_loading_while_in_flight() {
        let gate = Arc::new(tokio::sync::Notify::new());
        let backend = FakeAuth {
            gate: Some(gate.clone()),
            ..FakeAuth::default()
        };
        let auth = AuthStore::new(backend, MemoryStore::new());
        auth.rehydrate().await;
        assert!(!auth.snapshot().is_loading);

        let pending = tokio::spawn({
            let auth = auth.clone();
            async move { auth.login("maya", "hunter22").await }
        });
        tokio::task::yield_now().await;
        assert!(auth.snapshot().is_loading);

        gate.notify_one();
        pending.await.unwrap().unwrap();

        let session = auth.snapshot();
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
    }

    #[tokio::test]
    async fn test_failed_login_clears_loading() {
        let gate = Arc::new(tokio::sync::Notify::new());
        let backend = FakeAuth {
            fail_login: true,
            gate: Some(gate.clone()),
            ..FakeAuth::default()
        };
        let auth = AuthStore::new(backend, MemoryStore::new());
        auth.rehydrate().await;

        let pending = tokio::spawn({
            let auth = auth.clone();
            async move { auth.login("maya", "wrong").await }
        });
        tokio::task::yield_now().await;
        assert!(auth.snapshot().is_loading);

        gate.notify_one();
        pending.await.unwrap().unwrap_err();
        assert!(!auth.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_logout_clears_locally_even_when_server_fails() {
        let backend = FakeAuth {
            fail_logout: true,
            ..FakeAuth::default()
        };
        let store = MemoryStore::new();
        let auth = AuthStore::new(backend.clone(), store.clone());

        auth.login("maya", "hunter22").await.unwrap();
        auth.logout().await;

        let session = auth.snapshot();
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(!session.is_loading);
        assert!(backend.token.lock().unwrap().is_none());
        assert!(store.get(SESSION_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_rehydrate_restores_persisted_session() {
        let backend = FakeAuth::default();
        let store = MemoryStore::new();

        {
            let auth = AuthStore::new(backend.clone(), store.clone());
            auth.login("maya", "hunter22").await.unwrap();
        }

        // Fresh store instance, as after a reload
        let auth = AuthStore::new(backend.clone(), store.clone());
        assert!(auth.snapshot().is_loading);

        auth.rehydrate().await;
        let session = auth.snapshot();
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert_eq!(session.user.unwrap().username, "maya");
        assert_eq!(backend.token.lock().unwrap().as_deref(), Some("access-1"));
    }

    #[tokio::test]
    async fn test_rehydrate_without_record_just_finishes_loading() {
        let auth = AuthStore::new(FakeAuth::default(), MemoryStore::new());
        auth.rehydrate().await;

        let session = auth.snapshot();
        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
    }

    #[tokio::test]
    async fn test_rehydrate_discards_unreadable_record() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json".to_string()).await;

        let auth = AuthStore::new(FakeAuth::default(), store.clone());
        auth.rehydrate().await;

        assert!(!auth.snapshot().is_authenticated);
        assert!(store.get(SESSION_KEY).await.is_none());
    }
}
