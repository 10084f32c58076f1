use crate::{
  newtypes::{CommunityId, PersonId},
  schema::{community, community_member, community_mute, community_notify},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = community)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// A community.
pub struct Community {
  pub id: CommunityId,
  pub name: String,
  pub description: String,
  /// The creator. Never changes, and always stays a member.
  pub owner_id: PersonId,
  pub published: NaiveDateTime,
  pub updated: Option<NaiveDateTime>,
}

#[derive(Clone, Insertable)]
#[diesel(table_name = community)]
pub struct CommunityInsertForm {
  pub name: String,
  pub description: String,
  pub owner_id: PersonId,
}

#[derive(Clone, Default, AsChangeset)]
#[diesel(table_name = community)]
pub struct CommunityUpdateForm {
  pub description: Option<String>,
  pub updated: Option<Option<NaiveDateTime>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = community_member)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CommunityMember {
  pub id: i32,
  pub community_id: CommunityId,
  pub person_id: PersonId,
  pub published: NaiveDateTime,
}

#[derive(Clone, Insertable, AsChangeset)]
#[diesel(table_name = community_member)]
pub struct CommunityMemberForm {
  pub community_id: CommunityId,
  pub person_id: PersonId,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = community_mute)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Comments inside a muted community don't notify the person.
pub struct CommunityMute {
  pub id: i32,
  pub community_id: CommunityId,
  pub person_id: PersonId,
  pub published: NaiveDateTime,
}

#[derive(Clone, Insertable, AsChangeset)]
#[diesel(table_name = community_mute)]
pub struct CommunityMuteForm {
  pub community_id: CommunityId,
  pub person_id: PersonId,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = community_notify)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CommunityNotify {
  pub id: i32,
  pub community_id: CommunityId,
  pub person_id: PersonId,
  pub published: NaiveDateTime,
}

#[derive(Clone, Insertable, AsChangeset)]
#[diesel(table_name = community_notify)]
pub struct CommunityNotifyForm {
  pub community_id: CommunityId,
  pub person_id: PersonId,
}
