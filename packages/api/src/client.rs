//! The single point of egress to the Tandem API.
//!
//! [`ApiClient`] wraps one configured [`reqwest::Client`] with the base URL
//! and a shared bearer-token slot. Every endpoint method in this crate goes
//! through the verbs here, and every failure is reduced to one
//! human-readable message by [`extract_error_message`] — the only place
//! error text is derived, used both for global failure toasts and for
//! inline handling at call sites.
//!
//! The wrapper does not retry, does not refresh tokens, and does not queue
//! requests while offline; an expired token simply surfaces as a failed
//! request and the user re-authenticates.

use std::sync::{Arc, RwLock};

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Error produced by any API call, already reduced to display text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never completed (connection refused, DNS, ...).
    #[error("{0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Convenience for call sites that only want the display string.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Derive a human-readable message from a failed response body.
///
/// The API reports errors as `{"message": "..."}`; when the body is not in
/// that shape (proxies, hard crashes) fall back to a generic message.
pub fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }
    format!("Request failed ({})", status.as_u16())
}

/// Configured HTTP client shared by every data operation.
///
/// Clones share the token slot, so a token set after login is attached to
/// requests made through any clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Set or clear the bearer token attached to outgoing requests.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(status, &body);
        tracing::debug!(status = status.as_u16(), path, "request failed: {message}");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send::<()>(Method::GET, path, None, None).await?;
        Self::decode(response).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self.send::<()>(Method::GET, path, None, Some(query)).await?;
        Self::decode(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::POST, path, Some(body), None).await?;
        Self::decode(response).await
    }

    /// POST with a body, discarding the response payload.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::POST, path, Some(body), None).await?;
        Ok(())
    }

    /// POST without a body, discarding the response payload.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send::<()>(Method::POST, path, None, None).await?;
        Ok(())
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::PUT, path, Some(body), None).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send::<()>(Method::DELETE, path, None, None).await?;
        Ok(())
    }

    /// DELETE carrying a JSON body (used by member removal).
    pub async fn delete_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, Some(body), None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_message_field() {
        let message = extract_error_message(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "The token has expired.", "error": "token_expired"}"#,
        );
        assert_eq!(message, "The token has expired.");
    }

    #[test]
    fn test_falls_back_on_unstructured_body() {
        let message = extract_error_message(StatusCode::BAD_GATEWAY, "<html>502</html>");
        assert_eq!(message, "Request failed (502)");
    }

    #[test]
    fn test_falls_back_on_empty_message() {
        let message = extract_error_message(StatusCode::BAD_REQUEST, r#"{"message": ""}"#);
        assert_eq!(message, "Request failed (400)");
    }

    #[test]
    fn test_error_display_is_the_message() {
        let err = ApiError::Status {
            status: 404,
            message: "Goal not found".to_string(),
        };
        assert_eq!(err.to_string(), "Goal not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.url("/goals"), "http://localhost:5000/goals");
    }

    #[test]
    fn test_token_shared_across_clones() {
        let client = ApiClient::new("http://localhost:5000");
        let clone = client.clone();
        client.set_token(Some("abc".to_string()));
        assert_eq!(clone.token().as_deref(), Some("abc"));
        clone.set_token(None);
        assert!(client.token().is_none());
    }
}
