use crate::{
  newtypes::PersonId,
  schema::{person, person_follower},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = person)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// A person. Profile fields live on the same row, so a profile always exists with its person.
pub struct Person {
  pub id: PersonId,
  pub name: String,
  /// A short bio, in markdown.
  pub bio: Option<String>,
  /// An avatar url.
  pub avatar: Option<String>,
  /// Whether the person is an admin.
  pub admin: bool,
  pub published: NaiveDateTime,
  pub updated: Option<NaiveDateTime>,
}

#[derive(Clone, Default, Insertable)]
#[diesel(table_name = person)]
pub struct PersonInsertForm {
  pub name: String,
  pub bio: Option<String>,
  pub avatar: Option<String>,
  pub admin: Option<bool>,
}

#[derive(Clone, Default, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonUpdateForm {
  pub bio: Option<Option<String>>,
  pub avatar: Option<Option<String>>,
  pub admin: Option<bool>,
  pub updated: Option<Option<NaiveDateTime>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = person_follower)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// A follow edge. `follower_id` follows `person_id`.
pub struct PersonFollower {
  pub id: i32,
  pub person_id: PersonId,
  pub follower_id: PersonId,
  pub published: NaiveDateTime,
}

#[derive(Clone, Insertable, AsChangeset)]
#[diesel(table_name = person_follower)]
pub struct PersonFollowerForm {
  pub person_id: PersonId,
  pub follower_id: PersonId,
}
