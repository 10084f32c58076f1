use crate::{
  newtypes::CommunityId,
  schema::{community, community_member, community_mute, community_notify},
  source::community::{
    Community,
    CommunityInsertForm,
    CommunityMember,
    CommunityMemberForm,
    CommunityMute,
    CommunityMuteForm,
    CommunityNotify,
    CommunityNotifyForm,
    CommunityUpdateForm,
  },
  traits::{Blockable, Crud, Joinable, Subscribable},
};
use diesel::{
  dsl::insert_into,
  result::Error,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

impl Crud for Community {
  type InsertForm = CommunityInsertForm;
  type UpdateForm = CommunityUpdateForm;
  type IdType = CommunityId;

  fn create(conn: &mut SqliteConnection, form: &CommunityInsertForm) -> Result<Self, Error> {
    insert_into(community::table)
      .values(form)
      .get_result::<Self>(conn)
  }

  fn read(conn: &mut SqliteConnection, community_id: CommunityId) -> Result<Self, Error> {
    community::table.find(community_id).first::<Self>(conn)
  }

  fn update(
    conn: &mut SqliteConnection,
    community_id: CommunityId,
    form: &CommunityUpdateForm,
  ) -> Result<Self, Error> {
    diesel::update(community::table.find(community_id))
      .set(form)
      .get_result::<Self>(conn)
  }
}

impl Community {
  pub fn delete(conn: &mut SqliteConnection, community_id: CommunityId) -> Result<usize, Error> {
    diesel::delete(community::table.find(community_id)).execute(conn)
  }

  pub fn read_from_name(conn: &mut SqliteConnection, community_name: &str) -> Result<Self, Error> {
    community::table
      .filter(community::name.eq(community_name))
      .first::<Self>(conn)
  }

  /// Creates the community and makes the owner its first member.
  pub fn create_with_owner(
    conn: &mut SqliteConnection,
    form: &CommunityInsertForm,
  ) -> Result<Self, Error> {
    conn.immediate_transaction(|conn| {
      let community = Community::create(conn, form)?;
      CommunityMember::join(conn, &CommunityMemberForm {
        community_id: community.id,
        person_id: community.owner_id,
      })?;
      Ok(community)
    })
  }
}

impl Joinable for CommunityMember {
  type Form = CommunityMemberForm;

  fn join(conn: &mut SqliteConnection, form: &CommunityMemberForm) -> Result<Self, Error> {
    insert_into(community_member::table)
      .values(form)
      .on_conflict((community_member::community_id, community_member::person_id))
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
  }

  fn leave(conn: &mut SqliteConnection, form: &CommunityMemberForm) -> Result<usize, Error> {
    diesel::delete(
      community_member::table
        .filter(community_member::community_id.eq(form.community_id))
        .filter(community_member::person_id.eq(form.person_id)),
    )
    .execute(conn)
  }
}

impl Blockable for CommunityMute {
  type Form = CommunityMuteForm;

  fn block(conn: &mut SqliteConnection, form: &CommunityMuteForm) -> Result<Self, Error> {
    insert_into(community_mute::table)
      .values(form)
      .on_conflict((community_mute::community_id, community_mute::person_id))
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
  }

  fn unblock(conn: &mut SqliteConnection, form: &CommunityMuteForm) -> Result<usize, Error> {
    diesel::delete(
      community_mute::table
        .filter(community_mute::community_id.eq(form.community_id))
        .filter(community_mute::person_id.eq(form.person_id)),
    )
    .execute(conn)
  }
}

impl Subscribable for CommunityNotify {
  type Form = CommunityNotifyForm;

  fn subscribe(conn: &mut SqliteConnection, form: &CommunityNotifyForm) -> Result<Self, Error> {
    insert_into(community_notify::table)
      .values(form)
      .on_conflict((community_notify::community_id, community_notify::person_id))
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
  }

  fn unsubscribe(conn: &mut SqliteConnection, form: &CommunityNotifyForm) -> Result<usize, Error> {
    diesel::delete(
      community_notify::table
        .filter(community_notify::community_id.eq(form.community_id))
        .filter(community_notify::person_id.eq(form.person_id)),
    )
    .execute(conn)
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    schema::community_member,
    source::{
      community::{Community, CommunityInsertForm, CommunityMember, CommunityMemberForm},
      person::{Person, PersonInsertForm},
    },
    traits::{Crud, Joinable},
    utils::{build_db_pool_for_tests, get_conn},
  };
  use devshare_utils::error::DevshareResult;
  use diesel::{dsl::count_star, ExpressionMethods, QueryDsl, RunQueryDsl};
  use pretty_assertions::assert_eq;

  #[test]
  fn test_crud() -> DevshareResult<()> {
    let pool = build_db_pool_for_tests()?;
    let conn = &mut get_conn(&pool)?;

    let owner = Person::create(conn, &PersonInsertForm {
      name: "bobbee".into(),
      ..Default::default()
    })?;
    let member = Person::create(conn, &PersonInsertForm {
      name: "jessica".into(),
      ..Default::default()
    })?;

    let new_community = CommunityInsertForm {
      name: "rustaceans".into(),
      description: "all things rust".into(),
      owner_id: owner.id,
    };
    let inserted_community = Community::create_with_owner(conn, &new_community)?;
    assert_eq!(owner.id, inserted_community.owner_id);

    let member_form = CommunityMemberForm {
      community_id: inserted_community.id,
      person_id: member.id,
    };
    CommunityMember::join(conn, &member_form)?;
    CommunityMember::join(conn, &member_form)?;

    let members: i64 = community_member::table
      .filter(community_member::community_id.eq(inserted_community.id))
      .select(count_star())
      .first(conn)?;
    // the owner joined on creation, and joining twice keeps a single row
    assert_eq!(2, members);

    let read_community = Community::read_from_name(conn, "rustaceans")?;
    assert_eq!(inserted_community, read_community);

    let num_deleted = Community::delete(conn, inserted_community.id)?;
    assert_eq!(1, num_deleted);
    let members_after: i64 = community_member::table.select(count_star()).first(conn)?;
    assert_eq!(0, members_after);
    Ok(())
  }
}
