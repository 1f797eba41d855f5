//! Feed, comment and reaction operations.

use api::{
    ApiError, Comment, CreateCommentInput, CreateReactionInput, FeedItem, FeedScope, Reaction,
};
use store::KeyValueStore;

use crate::app::AppClient;
use crate::keys::QueryKey;
use crate::mutation::MutationKind;

impl<S> AppClient<S>
where
    S: KeyValueStore + Clone,
{
    pub async fn feed(&self, scope: FeedScope) -> Result<Vec<FeedItem>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::Feed(scope), move || {
                let api = api.clone();
                async move { api.feed(scope).await }
            })
            .await
    }

    pub async fn check_in_comments(&self, check_in_id: i64) -> Result<Vec<Comment>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::CheckInComments(check_in_id), move || {
                let api = api.clone();
                async move { api.check_in_comments(check_in_id).await }
            })
            .await
    }

    pub async fn check_in_reactions(&self, check_in_id: i64) -> Result<Vec<Reaction>, ApiError> {
        let api = self.api.clone();
        self.cache
            .fetch_as(QueryKey::CheckInReactions(check_in_id), move || {
                let api = api.clone();
                async move { api.check_in_reactions(check_in_id).await }
            })
            .await
    }

    pub async fn add_comment(
        &self,
        check_in_id: i64,
        input: &CreateCommentInput,
    ) -> Result<Comment, ApiError> {
        let result = self.api.add_comment(check_in_id, input).await;
        self.settle(MutationKind::AddComment { check_in_id }, result)
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        let result = self.api.delete_comment(comment_id).await;
        self.settle(MutationKind::DeleteComment, result)
    }

    pub async fn add_reaction(
        &self,
        check_in_id: i64,
        input: &CreateReactionInput,
    ) -> Result<Reaction, ApiError> {
        let result = self.api.add_reaction(check_in_id, input).await;
        self.settle(MutationKind::AddReaction { check_in_id }, result)
    }
}
