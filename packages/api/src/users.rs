//! User search and account endpoints.

use crate::client::{ApiClient, ApiError};
use crate::models::{UpdateUserInput, User};

impl ApiClient {
    pub async fn search_users(&self, search: &str) -> Result<Vec<User>, ApiError> {
        self.get_query("/users", &[("search", search)]).await
    }

    /// Update profile fields; setting `password` changes the password.
    pub async fn update_user(
        &self,
        user_id: i64,
        input: &UpdateUserInput,
    ) -> Result<User, ApiError> {
        self.put(&format!("/user/{user_id}"), input).await
    }
}
