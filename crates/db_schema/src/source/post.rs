use crate::{
  newtypes::{CommunityId, PersonId, PostId},
  schema::{post, post_like, post_saved},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// A post.
pub struct Post {
  pub id: PostId,
  pub title: String,
  /// The post body, in markdown.
  pub content: String,
  /// The first image embedded in the content, or an explicitly given one.
  pub image_url: Option<String>,
  pub creator_id: PersonId,
  pub community_id: CommunityId,
  pub published: NaiveDateTime,
  pub updated: Option<NaiveDateTime>,
}

#[derive(Clone, Insertable)]
#[diesel(table_name = post)]
pub struct PostInsertForm {
  pub title: String,
  pub content: String,
  pub image_url: Option<String>,
  pub creator_id: PersonId,
  pub community_id: CommunityId,
}

#[derive(Clone, Default, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostUpdateForm {
  pub title: Option<String>,
  pub content: Option<String>,
  pub image_url: Option<Option<String>>,
  pub updated: Option<Option<NaiveDateTime>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = post_like)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// A vote. Score 1 is an upvote, -1 a downvote.
pub struct PostLike {
  pub id: i32,
  pub post_id: PostId,
  pub person_id: PersonId,
  pub score: i16,
  pub published: NaiveDateTime,
}

#[derive(Clone, Insertable, AsChangeset)]
#[diesel(table_name = post_like)]
pub struct PostLikeForm {
  pub post_id: PostId,
  pub person_id: PersonId,
  pub score: i16,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = post_saved)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PostSaved {
  pub id: i32,
  pub post_id: PostId,
  pub person_id: PersonId,
  pub published: NaiveDateTime,
}

#[derive(Clone, Insertable, AsChangeset)]
#[diesel(table_name = post_saved)]
pub struct PostSavedForm {
  pub post_id: PostId,
  pub person_id: PersonId,
}
