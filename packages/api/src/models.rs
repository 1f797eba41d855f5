//! Entity types as served by the Tandem API.
//!
//! All entities are server-owned; the client holds cache-only copies and
//! never mutates them in place. Write payloads (`Create*Input`) carry only
//! the fields the corresponding endpoint accepts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Response of `POST /login` and `POST /register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Daily,
    Weekly,
    Monthly,
    Project,
    Habit,
    Custom,
}

impl GoalType {
    pub const ALL: [GoalType; 6] = [
        GoalType::Daily,
        GoalType::Weekly,
        GoalType::Monthly,
        GoalType::Project,
        GoalType::Habit,
        GoalType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Daily => "daily",
            GoalType::Weekly => "weekly",
            GoalType::Monthly => "monthly",
            GoalType::Project => "project",
            GoalType::Habit => "habit",
            GoalType::Custom => "custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.as_str() == s)
    }

    /// Whether check-ins against goals of this type must carry content.
    pub fn requires_check_in_content(&self) -> bool {
        matches!(self, GoalType::Project | GoalType::Habit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub goal_type: GoalType,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circle_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub goal_type: GoalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circle_id: Option<i64>,
}

impl Default for GoalType {
    fn default() -> Self {
        GoalType::Daily
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Box<Goal>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckInInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCircleInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleRole {
    Creator,
    Admin,
    Member,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMember {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: CircleRole,
    pub joined_at: DateTime<Utc>,
}

/// Derived, read-only aggregate per circle member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub username: String,
    pub total_checkins: u32,
    pub active_goals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checkin: Option<DateTime<Utc>>,
    pub member_since: DateTime<Utc>,
    pub role: CircleRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMessage {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub username: String,
    pub circle_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuddyRequestStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuddyRequest {
    pub id: i64,
    pub requester_id: i64,
    pub requester_username: String,
    pub receiver_id: i64,
    pub receiver_username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: BuddyRequestStatus,
    pub created_at: DateTime<Utc>,
}

/// The materialized form of an accepted buddy request, keyed by the other
/// user's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buddy {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub buddies_since: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub username: String,
    pub check_in_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCommentInput {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateReactionInput {
    #[serde(rename = "type")]
    pub kind: String,
}

/// A check-in enriched with social counts for the aggregated feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(flatten)]
    pub check_in: CheckIn,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<Reaction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u32>,
}

/// Payload of `PUT /user/:id`; password is only present when changing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserInput {
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_type_round_trip() {
        for goal_type in GoalType::ALL {
            assert_eq!(GoalType::from_str(goal_type.as_str()), Some(goal_type));
        }
        assert_eq!(GoalType::from_str("yearly"), None);
    }

    #[test]
    fn test_goal_deserializes_without_optionals() {
        let goal: Goal = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Run",
                "goal_type": "habit",
                "is_active": true,
                "user_id": 9,
                "created_at": "2024-03-01T08:00:00Z",
                "updated_at": "2024-03-01T08:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(goal.goal_type, GoalType::Habit);
        assert!(goal.description.is_none());
        assert!(goal.start_date.is_none());
    }

    #[test]
    fn test_feed_item_flattens_check_in() {
        let item: FeedItem = serde_json::from_str(
            r#"{
                "id": 4,
                "content": "Done!",
                "created_at": "2024-03-02T10:30:00Z",
                "user_id": 2,
                "goal_id": 7,
                "username": "alice",
                "reaction_count": 3,
                "comment_count": 1
            }"#,
        )
        .unwrap();
        assert_eq!(item.check_in.id, 4);
        assert_eq!(item.reaction_count, Some(3));
        assert!(item.comments.is_none());
    }

    #[test]
    fn test_reaction_type_field_name() {
        let reaction: Reaction = serde_json::from_str(
            r#"{
                "id": 1,
                "type": "cheer",
                "user_id": 3,
                "username": "bob",
                "check_in_id": 4,
                "created_at": "2024-03-02T11:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(reaction.kind, "cheer");
        let json = serde_json::to_value(&reaction).unwrap();
        assert_eq!(json["type"], "cheer");
    }
}
