//! Circle operations: membership, leaderboard, chat.

use api::{
    ApiError, Circle, CircleMember, CircleMessage, CreateCircleInput, LeaderboardEntry,
};
use store::KeyValueStore;

use crate::app::AppClient;
use crate::keys::QueryKey;
use crate::mutation::MutationKind;

impl<S> AppClient<S>
where
    S: KeyValueStore + Clone,
{
    pub async fn circles(&self) -> Result<Vec<Circle>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::Circles, move || {
                let api = api.clone();
                async move { api.list_circles().await }
            })
            .await
    }

    pub async fn circle(&self, circle_id: i64) -> Result<Circle, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::Circle(circle_id), move || {
                let api = api.clone();
                async move { api.get_circle(circle_id).await }
            })
            .await
    }

    pub async fn circle_members(&self, circle_id: i64) -> Result<Vec<CircleMember>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::CircleMembers(circle_id), move || {
                let api = api.clone();
                async move { api.circle_members(circle_id).await }
            })
            .await
    }

    pub async fn circle_leaderboard(
        &self,
        circle_id: i64,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::CircleLeaderboard(circle_id), move || {
                let api = api.clone();
                async move { api.circle_leaderboard(circle_id).await }
            })
            .await
    }

    pub async fn circle_messages(&self, circle_id: i64) -> Result<Vec<CircleMessage>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::CircleMessages(circle_id), move || {
                let api = api.clone();
                async move { api.circle_messages(circle_id).await }
            })
            .await
    }

    pub async fn create_circle(&self, input: &CreateCircleInput) -> Result<Circle, ApiError> {
        let result = self.api.create_circle(input).await;
        self.settle(MutationKind::CreateCircle, result)
    }

    pub async fn update_circle(
        &self,
        circle_id: i64,
        input: &CreateCircleInput,
    ) -> Result<Circle, ApiError> {
        let result = self.api.update_circle(circle_id, input).await;
        self.settle(MutationKind::UpdateCircle { circle_id }, result)
    }

    pub async fn delete_circle(&self, circle_id: i64) -> Result<(), ApiError> {
        let result = self.api.delete_circle(circle_id).await;
        self.settle(MutationKind::DeleteCircle, result)
    }

    pub async fn add_circle_member(&self, circle_id: i64, user_id: i64) -> Result<(), ApiError> {
        let result = self.api.add_circle_member(circle_id, user_id).await;
        self.settle(MutationKind::AddCircleMember { circle_id }, result)
    }

    pub async fn remove_circle_member(
        &self,
        circle_id: i64,
        user_id: i64,
    ) -> Result<(), ApiError> {
        let result = self.api.remove_circle_member(circle_id, user_id).await;
        self.settle(MutationKind::RemoveCircleMember { circle_id }, result)
    }

    pub async fn send_circle_message(
        &self,
        circle_id: i64,
        content: &str,
    ) -> Result<CircleMessage, ApiError> {
        let result = self.api.send_circle_message(circle_id, content).await;
        self.settle(MutationKind::SendCircleMessage { circle_id }, result)
    }
}
