//! Buddy operations: the list, request traffic in both directions.

use api::{ApiError, Buddy, BuddyRequest};
use store::KeyValueStore;

use crate::app::AppClient;
use crate::keys::{QueryKey, RequestDirection};
use crate::mutation::MutationKind;

impl<S> AppClient<S>
where
    S: KeyValueStore + Clone,
{
    pub async fn buddies(&self) -> Result<Vec<Buddy>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::Buddies, move || {
                let api = api.clone();
                async move { api.buddies().await }
            })
            .await
    }

    pub async fn buddy_requests(
        &self,
        direction: RequestDirection,
    ) -> Result<Vec<BuddyRequest>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::BuddyRequests(direction), move || {
                let api = api.clone();
                async move {
                    match direction {
                        RequestDirection::Received => api.received_buddy_requests().await,
                        RequestDirection::Sent => api.sent_buddy_requests().await,
                    }
                }
            })
            .await
    }

    pub async fn send_buddy_request(
        &self,
        user_id: i64,
        message: Option<&str>,
    ) -> Result<(), ApiError> {
        let result = self.api.send_buddy_request(user_id, message).await;
        self.settle(MutationKind::SendBuddyRequest, result)
    }

    pub async fn accept_buddy_request(&self, request_id: i64) -> Result<(), ApiError> {
        let result = self.api.accept_buddy_request(request_id).await;
        self.settle(MutationKind::AcceptBuddyRequest, result)
    }

    pub async fn decline_buddy_request(&self, request_id: i64) -> Result<(), ApiError> {
        let result = self.api.decline_buddy_request(request_id).await;
        self.settle(MutationKind::DeclineBuddyRequest, result)
    }

    pub async fn remove_buddy(&self, user_id: i64) -> Result<(), ApiError> {
        let result = self.api.remove_buddy(user_id).await;
        self.settle(MutationKind::RemoveBuddy, result)
    }
}
