use crate::{
  newtypes::{LocalUserId, PersonId},
  schema::local_user,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = local_user)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// The login credentials of a person.
pub struct LocalUser {
  pub id: LocalUserId,
  pub person_id: PersonId,
  #[serde(skip)]
  pub password_encrypted: String,
  pub email: Option<String>,
}

#[derive(Clone, Insertable)]
#[diesel(table_name = local_user)]
pub struct LocalUserInsertForm {
  pub person_id: PersonId,
  /// Plain text password, hashed on insert.
  pub password_encrypted: String,
  pub email: Option<String>,
}
