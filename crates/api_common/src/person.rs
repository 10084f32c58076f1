use devshare_db_schema::newtypes::PersonId;
use devshare_db_views::structs::{FollowView, PersonView};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Register a new user.
pub struct Register {
  pub name: String,
  pub password: String,
  pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Logging into devshare.
pub struct Login {
  pub name: String,
  pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// A response for your login, containing the token to send as `Authorization: Bearer <jwt>`.
pub struct LoginResponse {
  pub jwt: String,
  pub person_view: PersonView,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Gets a person's details.
pub struct GetPerson {
  pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PersonResponse {
  pub person_view: PersonView,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Lists people, in alphabetical order.
pub struct ListPersons {
  /// Matches names.
  pub search: Option<String>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListPersonsResponse {
  pub persons: Vec<PersonView>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Changes your profile. An empty string clears the field.
pub struct SaveProfile {
  /// Your bio / info, in markdown.
  pub bio: Option<String>,
  /// An avatar url.
  pub avatar: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Lists the followers, or the followed people, of a person.
pub struct ListFollows {
  pub name: String,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListFollowsResponse {
  pub follows: Vec<FollowView>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Follow or unfollow a person.
pub struct FollowPerson {
  pub person_id: PersonId,
  pub follow: bool,
}
