//! Session endpoints: login, register, logout.

use serde::Serialize;

use crate::client::{ApiClient, ApiError};
use crate::models::LoginResponse;

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post("/login", &LoginBody { username, password }).await
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        self.post(
            "/register",
            &RegisterBody {
                username,
                email,
                password,
            },
        )
        .await
    }

    /// Best-effort server-side logout; callers are expected to ignore the
    /// error and tear the local session down regardless.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("/logout").await
    }
}
