//! Feed and check-in social endpoints (comments, reactions).

use crate::client::{ApiClient, ApiError};
use crate::models::{Comment, CreateCommentInput, CreateReactionInput, FeedItem, Reaction};

/// Which slice of the aggregated feed to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedScope {
    /// Every visible check-in.
    All,
    /// Check-ins of followed users.
    Following,
    /// Check-ins of fellow circle members.
    Circles,
}

impl FeedScope {
    pub fn path(&self) -> &'static str {
        match self {
            FeedScope::All => "/feed",
            FeedScope::Following => "/feed/following",
            FeedScope::Circles => "/feed/circles",
        }
    }
}

impl ApiClient {
    pub async fn feed(&self, scope: FeedScope) -> Result<Vec<FeedItem>, ApiError> {
        self.get(scope.path()).await
    }

    pub async fn check_in_comments(&self, check_in_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.get(&format!("/check-ins/{check_in_id}/comments")).await
    }

    pub async fn add_comment(
        &self,
        check_in_id: i64,
        input: &CreateCommentInput,
    ) -> Result<Comment, ApiError> {
        self.post(&format!("/check-ins/{check_in_id}/comments"), input)
            .await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/comments/{comment_id}")).await
    }

    pub async fn check_in_reactions(&self, check_in_id: i64) -> Result<Vec<Reaction>, ApiError> {
        self.get(&format!("/check-ins/{check_in_id}/reactions")).await
    }

    pub async fn add_reaction(
        &self,
        check_in_id: i64,
        input: &CreateReactionInput,
    ) -> Result<Reaction, ApiError> {
        self.post(&format!("/check-ins/{check_in_id}/reactions"), input)
            .await
    }
}
