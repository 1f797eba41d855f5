//! Goal and check-in operations.

use api::{ApiError, CheckIn, CreateCheckInInput, CreateGoalInput, Goal};
use store::KeyValueStore;

use crate::app::AppClient;
use crate::keys::QueryKey;
use crate::mutation::MutationKind;

impl<S> AppClient<S>
where
    S: KeyValueStore + Clone,
{
    pub async fn goals(&self) -> Result<Vec<Goal>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::Goals, move || {
                let api = api.clone();
                async move { api.list_goals().await }
            })
            .await
    }

    pub async fn goal(&self, goal_id: i64) -> Result<Goal, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::Goal(goal_id), move || {
                let api = api.clone();
                async move { api.get_goal(goal_id).await }
            })
            .await
    }

    pub async fn goal_check_ins(&self, goal_id: i64) -> Result<Vec<CheckIn>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::GoalCheckIns(goal_id), move || {
                let api = api.clone();
                async move { api.goal_check_ins(goal_id).await }
            })
            .await
    }

    pub async fn create_goal(&self, input: &CreateGoalInput) -> Result<Goal, ApiError> {
        let result = self.api.create_goal(input).await;
        self.settle(MutationKind::CreateGoal, result)
    }

    pub async fn update_goal(
        &self,
        goal_id: i64,
        input: &CreateGoalInput,
    ) -> Result<Goal, ApiError> {
        let result = self.api.update_goal(goal_id, input).await;
        self.settle(MutationKind::UpdateGoal { goal_id }, result)
    }

    pub async fn delete_goal(&self, goal_id: i64) -> Result<(), ApiError> {
        let result = self.api.delete_goal(goal_id).await;
        self.settle(MutationKind::DeleteGoal, result)
    }

    pub async fn create_check_in(
        &self,
        goal_id: i64,
        input: &CreateCheckInInput,
    ) -> Result<CheckIn, ApiError> {
        let result = self.api.create_check_in(goal_id, input).await;
        self.settle(MutationKind::CreateCheckIn { goal_id }, result)
    }
}
