use chrono::NaiveDateTime;
use devshare_db_schema::{
  newtypes::{CommunityId, PersonId, PostId},
  source::{
    comment::Comment,
    community::Community,
    local_user::LocalUser,
    notification::Notification,
    person::Person,
    post::Post,
    tag::Tag,
  },
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A local user view.
pub struct LocalUserView {
  pub local_user: LocalUser,
  pub person: Person,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
/// Aggregate numbers of a post. The score is always derived from the votes.
pub struct PostCounts {
  pub score: i64,
  pub upvotes: i64,
  pub downvotes: i64,
  pub comments: i64,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A post view, used for listings and as the base of the post detail.
pub struct PostView {
  pub post: Post,
  pub creator: Person,
  pub community: Community,
  pub tags: Vec<Tag>,
  pub counts: PostCounts,
  pub saved: bool,
  /// 1 for an upvote, -1 for a downvote. Absent when there is no vote or no viewer.
  pub my_vote: Option<i16>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A comment view.
pub struct CommentView {
  pub comment: Comment,
  pub creator: Person,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommunityCounts {
  pub members: i64,
  pub posts: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A community view. The flags describe the viewer, and are all false without one.
pub struct CommunityView {
  pub community: Community,
  pub owner: Person,
  pub counts: CommunityCounts,
  pub is_member: bool,
  pub is_owner: bool,
  pub is_muted: bool,
  pub is_notified: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A person together with the time they joined a community.
pub struct CommunityMemberView {
  pub community_id: CommunityId,
  pub person: Person,
  pub published: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonCounts {
  pub followers: i64,
  pub following: i64,
  pub posts: i64,
  pub comments: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A person view.
pub struct PersonView {
  pub person: Person,
  pub counts: PersonCounts,
  /// Whether the viewer follows this person.
  pub is_following: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// One side of a follow edge, with the time the edge was created.
pub struct FollowView {
  pub person: Person,
  pub published: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A notification with the person who caused it.
pub struct NotificationView {
  pub notification: Notification,
  pub actor: Person,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PostSuggestion {
  pub id: PostId,
  pub title: String,
  pub community_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CommunitySuggestion {
  pub id: CommunityId,
  pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PersonSuggestion {
  pub id: PersonId,
  pub name: String,
  pub avatar: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// Autocomplete results for a search box.
pub struct SearchSuggestions {
  pub posts: Vec<PostSuggestion>,
  pub communities: Vec<CommunitySuggestion>,
  pub users: Vec<PersonSuggestion>,
}
