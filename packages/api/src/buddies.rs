//! Buddy endpoints. The list response is wrapped (`{"buddies": [...]}`);
//! request lists come back bare.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiError};
use crate::models::{Buddy, BuddyRequest};

#[derive(Deserialize)]
struct BuddiesResponse {
    buddies: Vec<Buddy>,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl ApiClient {
    pub async fn buddies(&self) -> Result<Vec<Buddy>, ApiError> {
        let response: BuddiesResponse = self.get("/buddy/list").await?;
        Ok(response.buddies)
    }

    pub async fn received_buddy_requests(&self) -> Result<Vec<BuddyRequest>, ApiError> {
        self.get("/buddy/requests/received").await
    }

    pub async fn sent_buddy_requests(&self) -> Result<Vec<BuddyRequest>, ApiError> {
        self.get("/buddy/requests/sent").await
    }

    pub async fn send_buddy_request(
        &self,
        user_id: i64,
        message: Option<&str>,
    ) -> Result<(), ApiError> {
        self.post_unit(&format!("/buddy/request/{user_id}"), &RequestBody { message })
            .await
    }

    pub async fn accept_buddy_request(&self, request_id: i64) -> Result<(), ApiError> {
        self.post_empty(&format!("/buddy/request/{request_id}/accept"))
            .await
    }

    pub async fn decline_buddy_request(&self, request_id: i64) -> Result<(), ApiError> {
        self.post_empty(&format!("/buddy/request/{request_id}/decline"))
            .await
    }

    pub async fn remove_buddy(&self, user_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/buddy/{user_id}/remove")).await
    }
}
