//! Write operations as data.
//!
//! Every mutation the client can perform is a [`MutationKind`] carrying the
//! ids its invalidations depend on. [`MutationKind::invalidates`] is the
//! single source of truth for which cached reads a successful write
//! dirties; [`MutationKind::success_notice`] is the toast shown on success
//! (reactions and circle messages are deliberately silent — the new state
//! is visible immediately where the user acted).
//!
//! No mutation performs an optimistic local update: the cache entry is
//! dropped and the next read refetches, trading perceived latency for
//! server-truth consistency.

use api::ApiError;

use crate::cache::QueryCache;
use crate::keys::{KeyFilter, QueryKey, RequestDirection};
use crate::notify::Notifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    CreateGoal,
    UpdateGoal { goal_id: i64 },
    DeleteGoal,
    CreateCheckIn { goal_id: i64 },
    AddComment { check_in_id: i64 },
    DeleteComment,
    AddReaction { check_in_id: i64 },
    CreateCircle,
    UpdateCircle { circle_id: i64 },
    DeleteCircle,
    AddCircleMember { circle_id: i64 },
    RemoveCircleMember { circle_id: i64 },
    SendCircleMessage { circle_id: i64 },
    SendBuddyRequest,
    AcceptBuddyRequest,
    DeclineBuddyRequest,
    RemoveBuddy,
    ChangePassword,
}

impl MutationKind {
    /// Cache keys a successful write of this kind invalidates.
    pub fn invalidates(&self) -> Vec<KeyFilter> {
        use KeyFilter::{AllCheckInComments, AllFeeds, Exact};
        use QueryKey::*;

        match *self {
            MutationKind::CreateGoal | MutationKind::DeleteGoal => vec![Exact(Goals)],
            MutationKind::UpdateGoal { goal_id } => {
                vec![Exact(Goals), Exact(Goal(goal_id))]
            }
            MutationKind::CreateCheckIn { goal_id } => {
                vec![Exact(GoalCheckIns(goal_id)), AllFeeds]
            }
            MutationKind::AddComment { check_in_id } => {
                vec![Exact(CheckInComments(check_in_id)), AllFeeds]
            }
            MutationKind::DeleteComment => vec![AllCheckInComments, AllFeeds],
            MutationKind::AddReaction { check_in_id } => {
                vec![Exact(CheckInReactions(check_in_id)), AllFeeds]
            }
            MutationKind::CreateCircle | MutationKind::DeleteCircle => vec![Exact(Circles)],
            MutationKind::UpdateCircle { circle_id } => {
                vec![Exact(Circles), Exact(Circle(circle_id))]
            }
            MutationKind::AddCircleMember { circle_id }
            | MutationKind::RemoveCircleMember { circle_id } => {
                vec![Exact(CircleMembers(circle_id))]
            }
            MutationKind::SendCircleMessage { circle_id } => {
                vec![Exact(CircleMessages(circle_id))]
            }
            MutationKind::SendBuddyRequest => {
                vec![Exact(BuddyRequests(RequestDirection::Sent))]
            }
            MutationKind::AcceptBuddyRequest => vec![
                Exact(BuddyRequests(RequestDirection::Received)),
                Exact(Buddies),
            ],
            MutationKind::DeclineBuddyRequest => {
                vec![Exact(BuddyRequests(RequestDirection::Received))]
            }
            MutationKind::RemoveBuddy => vec![Exact(Buddies)],
            MutationKind::ChangePassword => vec![],
        }
    }

    /// Toast shown after the write succeeds, if any.
    pub fn success_notice(&self) -> Option<&'static str> {
        match self {
            MutationKind::CreateGoal => Some("Goal created successfully!"),
            MutationKind::UpdateGoal { .. } => Some("Goal updated successfully!"),
            MutationKind::DeleteGoal => Some("Goal deleted successfully!"),
            MutationKind::CreateCheckIn { .. } => Some("Check-in submitted successfully!"),
            MutationKind::AddComment { .. } => Some("Comment added!"),
            MutationKind::DeleteComment => Some("Comment deleted!"),
            MutationKind::AddReaction { .. } => None,
            MutationKind::CreateCircle => Some("Circle created successfully!"),
            MutationKind::UpdateCircle { .. } => Some("Circle updated successfully!"),
            MutationKind::DeleteCircle => Some("Circle deleted successfully!"),
            MutationKind::AddCircleMember { .. } => Some("Member added to circle!"),
            MutationKind::RemoveCircleMember { .. } => Some("Member removed from circle!"),
            MutationKind::SendCircleMessage { .. } => None,
            MutationKind::SendBuddyRequest => Some("Buddy request sent!"),
            MutationKind::AcceptBuddyRequest => Some("Buddy request accepted!"),
            MutationKind::DeclineBuddyRequest => Some("Buddy request declined!"),
            MutationKind::RemoveBuddy => Some("Buddy removed!"),
            MutationKind::ChangePassword => {
                Some("Password changed successfully! Please log in again.")
            }
        }
    }
}

/// Apply the outcome of a performed write: invalidate and notify on
/// success, raise a global error notice on failure.
pub(crate) fn settle<T>(
    cache: &QueryCache,
    notifier: &Notifier,
    kind: &MutationKind,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    match result {
        Ok(value) => {
            for filter in kind.invalidates() {
                cache.invalidate(&filter);
            }
            if let Some(message) = kind.success_notice() {
                notifier.success(message);
            }
            Ok(value)
        }
        Err(err) => {
            notifier.error(err.to_string());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::FeedScope;
    use serde_json::json;

    async fn seeded_cache() -> QueryCache {
        let cache = QueryCache::default();
        let keys = [
            QueryKey::Goals,
            QueryKey::Goal(7),
            QueryKey::GoalCheckIns(7),
            QueryKey::Feed(FeedScope::All),
            QueryKey::Feed(FeedScope::Following),
            QueryKey::Feed(FeedScope::Circles),
            QueryKey::CheckInComments(4),
            QueryKey::CheckInComments(5),
            QueryKey::CheckInReactions(4),
            QueryKey::Circles,
            QueryKey::Circle(3),
            QueryKey::CircleMembers(3),
            QueryKey::CircleMessages(3),
            QueryKey::Buddies,
            QueryKey::BuddyRequests(RequestDirection::Received),
            QueryKey::BuddyRequests(RequestDirection::Sent),
        ];
        for key in keys {
            cache
                .fetch(key, || async { Ok(json!("seed")) })
                .await
                .unwrap();
        }
        cache
    }

    #[tokio::test]
    async fn test_create_check_in_invalidates_goal_check_ins_and_feed() {
        let cache = seeded_cache().await;
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        settle(
            &cache,
            &notifier,
            &MutationKind::CreateCheckIn { goal_id: 7 },
            Ok(()),
        )
        .unwrap();

        assert!(!cache.contains(&QueryKey::GoalCheckIns(7)));
        assert!(!cache.contains(&QueryKey::Feed(FeedScope::All)));
        assert!(!cache.contains(&QueryKey::Feed(FeedScope::Following)));
        assert!(!cache.contains(&QueryKey::Feed(FeedScope::Circles)));
        // unrelated keys survive
        assert!(cache.contains(&QueryKey::Goals));
        assert!(cache.contains(&QueryKey::CheckInComments(4)));

        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.message, "Check-in submitted successfully!");
    }

    #[tokio::test]
    async fn test_send_buddy_request_only_touches_sent_requests() {
        let cache = seeded_cache().await;
        let notifier = Notifier::new();

        settle(&cache, &notifier, &MutationKind::SendBuddyRequest, Ok(())).unwrap();

        assert!(!cache.contains(&QueryKey::BuddyRequests(RequestDirection::Sent)));
        assert!(cache.contains(&QueryKey::BuddyRequests(RequestDirection::Received)));
        assert!(cache.contains(&QueryKey::Buddies));
    }

    #[tokio::test]
    async fn test_accept_and_decline_buddy_request() {
        let cache = seeded_cache().await;
        let notifier = Notifier::new();

        settle(&cache, &notifier, &MutationKind::AcceptBuddyRequest, Ok(())).unwrap();
        assert!(!cache.contains(&QueryKey::BuddyRequests(RequestDirection::Received)));
        assert!(!cache.contains(&QueryKey::Buddies));
        assert!(cache.contains(&QueryKey::BuddyRequests(RequestDirection::Sent)));

        let cache = seeded_cache().await;
        settle(&cache, &notifier, &MutationKind::DeclineBuddyRequest, Ok(())).unwrap();
        assert!(!cache.contains(&QueryKey::BuddyRequests(RequestDirection::Received)));
        assert!(cache.contains(&QueryKey::Buddies));
    }

    #[tokio::test]
    async fn test_create_circle_invalidates_circle_list() {
        let cache = seeded_cache().await;
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        settle(&cache, &notifier, &MutationKind::CreateCircle, Ok(())).unwrap();

        assert!(!cache.contains(&QueryKey::Circles));
        assert!(cache.contains(&QueryKey::Circle(3)));
        assert_eq!(
            rx.recv().await.unwrap().message,
            "Circle created successfully!"
        );
    }

    #[tokio::test]
    async fn test_update_goal_also_invalidates_single_entry() {
        let cache = seeded_cache().await;
        let notifier = Notifier::new();

        settle(
            &cache,
            &notifier,
            &MutationKind::UpdateGoal { goal_id: 7 },
            Ok(()),
        )
        .unwrap();

        assert!(!cache.contains(&QueryKey::Goals));
        assert!(!cache.contains(&QueryKey::Goal(7)));
        assert!(cache.contains(&QueryKey::GoalCheckIns(7)));
    }

    #[tokio::test]
    async fn test_delete_comment_invalidates_every_comment_list() {
        let cache = seeded_cache().await;
        let notifier = Notifier::new();

        settle(&cache, &notifier, &MutationKind::DeleteComment, Ok(())).unwrap();

        assert!(!cache.contains(&QueryKey::CheckInComments(4)));
        assert!(!cache.contains(&QueryKey::CheckInComments(5)));
        assert!(!cache.contains(&QueryKey::Feed(FeedScope::All)));
        assert!(cache.contains(&QueryKey::CheckInReactions(4)));
    }

    #[tokio::test]
    async fn test_member_and_message_mutations_scope_to_their_circle() {
        let cache = seeded_cache().await;
        let notifier = Notifier::new();

        settle(
            &cache,
            &notifier,
            &MutationKind::AddCircleMember { circle_id: 3 },
            Ok(()),
        )
        .unwrap();
        assert!(!cache.contains(&QueryKey::CircleMembers(3)));
        assert!(cache.contains(&QueryKey::CircleMessages(3)));

        settle(
            &cache,
            &notifier,
            &MutationKind::SendCircleMessage { circle_id: 3 },
            Ok(()),
        )
        .unwrap();
        assert!(!cache.contains(&QueryKey::CircleMessages(3)));
        assert!(cache.contains(&QueryKey::Circle(3)));
    }

    #[tokio::test]
    async fn test_failed_mutation_notifies_and_keeps_cache() {
        let cache = seeded_cache().await;
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        let result: Result<(), _> = settle(
            &cache,
            &notifier,
            &MutationKind::CreateGoal,
            Err(ApiError::Status {
                status: 422,
                message: "Title is required".to_string(),
            }),
        );

        assert!(result.is_err());
        assert!(cache.contains(&QueryKey::Goals));
        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.level, crate::notify::NoticeLevel::Error);
        assert_eq!(notice.message, "Title is required");
    }

    #[test]
    fn test_silent_mutations_have_no_toast() {
        assert!(MutationKind::AddReaction { check_in_id: 1 }
            .success_notice()
            .is_none());
        assert!(MutationKind::SendCircleMessage { circle_id: 1 }
            .success_notice()
            .is_none());
    }
}
