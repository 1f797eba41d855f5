//! User search and account operations.

use api::{ApiError, UpdateUserInput, User};
use store::KeyValueStore;

use crate::app::AppClient;
use crate::keys::QueryKey;
use crate::mutation::MutationKind;

impl<S> AppClient<S>
where
    S: KeyValueStore + Clone,
{
    /// Search users by name. An empty query resolves to an empty list
    /// without a request (search boxes fire on every keystroke).
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, ApiError> {
        let query = query.trim().to_string();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::UserSearch(query.clone()), move || {
                let api = api.clone();
                let query = query.clone();
                async move { api.search_users(&query).await }
            })
            .await
    }

    /// Change the account password. The server revokes outstanding tokens,
    /// so the caller is expected to log the user out afterwards.
    pub async fn change_password(&self, user: &User, password: &str) -> Result<User, ApiError> {
        let input = UpdateUserInput {
            username: user.username.clone(),
            email: user.email.clone(),
            password: Some(password.to_string()),
        };
        let result = self.api.update_user(user.id, &input).await;
        self.settle(MutationKind::ChangePassword, result)
    }
}
