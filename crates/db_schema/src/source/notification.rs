use crate::{
  newtypes::{NotificationId, PersonId},
  schema::notification,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = notification)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Tells `recipient_id` that `actor_id` did something to the object `target_id`.
pub struct Notification {
  pub id: NotificationId,
  pub recipient_id: PersonId,
  pub actor_id: PersonId,
  pub verb: String,
  pub target_id: Option<i32>,
  pub read: bool,
  pub published: NaiveDateTime,
}

#[derive(Clone, Insertable)]
#[diesel(table_name = notification)]
pub struct NotificationInsertForm {
  pub recipient_id: PersonId,
  pub actor_id: PersonId,
  pub verb: String,
  pub target_id: Option<i32>,
}
