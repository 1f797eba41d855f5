//! Circle endpoints: the list/create route is plural (`/circles`), item and
//! sub-resource routes are singular (`/circle/:id/...`).

use serde::Serialize;

use crate::client::{ApiClient, ApiError};
use crate::models::{
    Circle, CircleMember, CircleMessage, CreateCircleInput, LeaderboardEntry,
};

#[derive(Serialize)]
struct MemberBody {
    user_id: i64,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    content: &'a str,
}

impl ApiClient {
    pub async fn list_circles(&self) -> Result<Vec<Circle>, ApiError> {
        self.get("/circles").await
    }

    pub async fn get_circle(&self, circle_id: i64) -> Result<Circle, ApiError> {
        self.get(&format!("/circle/{circle_id}")).await
    }

    pub async fn create_circle(&self, input: &CreateCircleInput) -> Result<Circle, ApiError> {
        self.post("/circles", input).await
    }

    pub async fn update_circle(
        &self,
        circle_id: i64,
        input: &CreateCircleInput,
    ) -> Result<Circle, ApiError> {
        self.put(&format!("/circle/{circle_id}"), input).await
    }

    pub async fn delete_circle(&self, circle_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/circle/{circle_id}")).await
    }

    pub async fn circle_members(&self, circle_id: i64) -> Result<Vec<CircleMember>, ApiError> {
        self.get(&format!("/circle/{circle_id}/users")).await
    }

    pub async fn add_circle_member(&self, circle_id: i64, user_id: i64) -> Result<(), ApiError> {
        self.post_unit(&format!("/circle/{circle_id}/users"), &MemberBody { user_id })
            .await
    }

    pub async fn remove_circle_member(
        &self,
        circle_id: i64,
        user_id: i64,
    ) -> Result<(), ApiError> {
        self.delete_json(&format!("/circle/{circle_id}/users"), &MemberBody { user_id })
            .await
    }

    pub async fn circle_leaderboard(
        &self,
        circle_id: i64,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.get(&format!("/circle/{circle_id}/leaderboard")).await
    }

    pub async fn circle_messages(&self, circle_id: i64) -> Result<Vec<CircleMessage>, ApiError> {
        self.get(&format!("/circle/{circle_id}/message")).await
    }

    pub async fn send_circle_message(
        &self,
        circle_id: i64,
        content: &str,
    ) -> Result<CircleMessage, ApiError> {
        self.post(&format!("/circle/{circle_id}/message"), &MessageBody { content })
            .await
    }
}
