//! Goal and check-in endpoints.

use crate::client::{ApiClient, ApiError};
use crate::models::{CheckIn, CreateCheckInInput, CreateGoalInput, Goal};

impl ApiClient {
    pub async fn list_goals(&self) -> Result<Vec<Goal>, ApiError> {
        self.get("/goals").await
    }

    pub async fn get_goal(&self, goal_id: i64) -> Result<Goal, ApiError> {
        self.get(&format!("/goal/{goal_id}")).await
    }

    pub async fn create_goal(&self, input: &CreateGoalInput) -> Result<Goal, ApiError> {
        self.post("/goals", input).await
    }

    pub async fn update_goal(
        &self,
        goal_id: i64,
        input: &CreateGoalInput,
    ) -> Result<Goal, ApiError> {
        self.put(&format!("/goal/{goal_id}"), input).await
    }

    pub async fn delete_goal(&self, goal_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/goal/{goal_id}")).await
    }

    pub async fn goal_check_ins(&self, goal_id: i64) -> Result<Vec<CheckIn>, ApiError> {
        self.get(&format!("/goal/{goal_id}/check-ins")).await
    }

    pub async fn create_check_in(
        &self,
        goal_id: i64,
        input: &CreateCheckInInput,
    ) -> Result<CheckIn, ApiError> {
        self.post(&format!("/goal/{goal_id}/check-ins"), input).await
    }
}
