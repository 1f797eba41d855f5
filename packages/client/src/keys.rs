//! Typed query keys.
//!
//! Every cached read is addressed by a [`QueryKey`]; every mutation
//! declares the [`KeyFilter`]s it invalidates. Making both enums (instead
//! of ad-hoc string arrays) turns the invalidation convention into a
//! checkable data structure: adding a resource without extending the
//! mutation table is a compile error at the match.

use api::FeedScope;

/// Direction of a buddy-request listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestDirection {
    Received,
    Sent,
}

/// Identifier under which one query result is cached and later invalidated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Goals,
    Goal(i64),
    GoalCheckIns(i64),
    Feed(FeedScope),
    CheckInComments(i64),
    CheckInReactions(i64),
    Circles,
    Circle(i64),
    CircleMembers(i64),
    CircleLeaderboard(i64),
    CircleMessages(i64),
    Buddies,
    BuddyRequests(RequestDirection),
    UserSearch(String),
}

/// Selector over query keys, used by mutations to invalidate.
///
/// Most mutations hit exact keys; two need a class: the feed is cached per
/// scope but social writes dirty all three, and deleting a comment (keyed
/// by comment id, not check-in id) dirties every comment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFilter {
    Exact(QueryKey),
    AllFeeds,
    AllCheckInComments,
}

impl KeyFilter {
    pub fn matches(&self, key: &QueryKey) -> bool {
        match self {
            KeyFilter::Exact(exact) => key == exact,
            KeyFilter::AllFeeds => matches!(key, QueryKey::Feed(_)),
            KeyFilter::AllCheckInComments => matches!(key, QueryKey::CheckInComments(_)),
        }
    }
}
