use crate::{
  newtypes::{PostId, TagId},
  schema::{post_tag, tag},
};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = tag)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// A topic tag. Tags are created the first time a post mentions them.
pub struct Tag {
  pub id: TagId,
  pub name: String,
}

#[derive(Clone, Insertable)]
#[diesel(table_name = tag)]
pub struct TagInsertForm {
  pub name: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = post_tag)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PostTag {
  pub id: i32,
  pub post_id: PostId,
  pub tag_id: TagId,
}

#[derive(Clone, Insertable)]
#[diesel(table_name = post_tag)]
pub struct PostTagForm {
  pub post_id: PostId,
  pub tag_id: TagId,
}
