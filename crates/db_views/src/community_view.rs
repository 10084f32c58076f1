use crate::structs::{CommunityCounts, CommunityMemberView, CommunityView};
use chrono::NaiveDateTime;
use devshare_db_schema::{
  newtypes::{CommunityId, PersonId},
  schema::{community, community_member, community_mute, community_notify, person, post},
  source::{community::Community, person::Person},
  utils::{contains_pattern, limit_and_offset},
};
use devshare_utils::error::DevshareResult;
use diesel::{
  dsl::{count_star, exists},
  result::Error,
  select,
  EscapeExpressionMethods,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
  TextExpressionMethods,
};

type CommunityViewTuple = (Community, Person);

impl CommunityView {
  pub fn read(
    conn: &mut SqliteConnection,
    community_id: CommunityId,
    my_person_id: Option<PersonId>,
  ) -> Result<Self, Error> {
    let row = community::table
      .find(community_id)
      .inner_join(person::table)
      .select((community::all_columns, person::all_columns))
      .first::<CommunityViewTuple>(conn)?;
    Self::from_row(conn, row, my_person_id)
  }

  pub fn read_from_name(
    conn: &mut SqliteConnection,
    name: &str,
    my_person_id: Option<PersonId>,
  ) -> Result<Self, Error> {
    let row = community::table
      .filter(community::name.eq(name))
      .inner_join(person::table)
      .select((community::all_columns, person::all_columns))
      .first::<CommunityViewTuple>(conn)?;
    Self::from_row(conn, row, my_person_id)
  }

  fn from_row(
    conn: &mut SqliteConnection,
    (community, owner): CommunityViewTuple,
    my_person_id: Option<PersonId>,
  ) -> Result<Self, Error> {
    let members = community_member::table
      .filter(community_member::community_id.eq(community.id))
      .select(count_star())
      .first::<i64>(conn)?;
    let posts = post::table
      .filter(post::community_id.eq(community.id))
      .select(count_star())
      .first::<i64>(conn)?;

    let (is_member, is_muted, is_notified) = match my_person_id {
      Some(person_id) => (
        select(exists(
          community_member::table
            .filter(community_member::community_id.eq(community.id))
            .filter(community_member::person_id.eq(person_id)),
        ))
        .get_result::<bool>(conn)?,
        select(exists(
          community_mute::table
            .filter(community_mute::community_id.eq(community.id))
            .filter(community_mute::person_id.eq(person_id)),
        ))
        .get_result::<bool>(conn)?,
        select(exists(
          community_notify::table
            .filter(community_notify::community_id.eq(community.id))
            .filter(community_notify::person_id.eq(person_id)),
        ))
        .get_result::<bool>(conn)?,
      ),
      None => (false, false, false),
    };

    Ok(Self {
      is_owner: my_person_id == Some(community.owner_id),
      counts: CommunityCounts { members, posts },
      community,
      owner,
      is_member,
      is_muted,
      is_notified,
    })
  }

  /// Everyone who joined the community, newest members first.
  pub fn members(
    conn: &mut SqliteConnection,
    community_id: CommunityId,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> DevshareResult<Vec<CommunityMemberView>> {
    let (limit, offset) = limit_and_offset(page, limit)?;
    let rows = community_member::table
      .inner_join(person::table)
      .filter(community_member::community_id.eq(community_id))
      .order_by((community_member::published.desc(), community_member::id.desc()))
      .select((person::all_columns, community_member::published))
      .limit(limit)
      .offset(offset)
      .load::<(Person, NaiveDateTime)>(conn)?;
    Ok(
      rows
        .into_iter()
        .map(|(person, published)| CommunityMemberView {
          community_id,
          person,
          published,
        })
        .collect(),
    )
  }
}

#[derive(Debug, Clone, Default)]
pub struct CommunityQuery {
  /// Only the communities this person joined.
  pub joined_by: Option<PersonId>,
  /// Case-insensitive substring of the name.
  pub search: Option<String>,
  pub my_person_id: Option<PersonId>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

impl CommunityQuery {
  /// Communities in alphabetical order.
  pub fn list(self, conn: &mut SqliteConnection) -> DevshareResult<Vec<CommunityView>> {
    let (limit, offset) = limit_and_offset(self.page, self.limit)?;

    let mut query = community::table
      .inner_join(person::table)
      .select((community::all_columns, person::all_columns))
      .into_boxed();
    if let Some(person_id) = self.joined_by {
      query = query.filter(
        community::id.eq_any(
          community_member::table
            .filter(community_member::person_id.eq(person_id))
            .select(community_member::community_id),
        ),
      );
    }
    if let Some(search) = self.search {
      query = query.filter(community::name.like(contains_pattern(&search)).escape('\\'));
    }

    let rows = query
      .order_by((community::name.asc(), community::id.asc()))
      .limit(limit)
      .offset(offset)
      .load::<CommunityViewTuple>(conn)?;
    rows
      .into_iter()
      .map(|row| Ok(CommunityView::from_row(conn, row, self.my_person_id)?))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_data;
  use devshare_db_schema::{
    relation::{toggle, Relation, RelationTarget},
    utils::{build_db_pool_for_tests, get_conn},
  };
  use pretty_assertions::assert_eq;

  #[test]
  fn test_viewer_flags_and_counts() -> DevshareResult<()> {
    let pool = build_db_pool_for_tests()?;
    let conn = &mut get_conn(&pool)?;

    let owner = test_data::person(conn, "owner")?;
    let member = test_data::person(conn, "member")?;
    let community = test_data::community(conn, "flags", &owner)?;
    test_data::post(conn, "hello", &owner, &community)?;

    let target = RelationTarget::Community(community.id);
    toggle(conn, member.id, target, Relation::Join)?;
    toggle(conn, member.id, target, Relation::Mute)?;
    toggle(conn, member.id, target, Relation::Notify)?;

    let as_member = CommunityView::read(conn, community.id, Some(member.id))?;
    assert_eq!(CommunityCounts { members: 2, posts: 1 }, as_member.counts);
    assert!(as_member.is_member);
    assert!(!as_member.is_owner);
    assert!(as_member.is_muted);
    assert!(as_member.is_notified);
    assert_eq!(owner, as_member.owner);

    let as_owner = CommunityView::read_from_name(conn, "flags", Some(owner.id))?;
    assert!(as_owner.is_member);
    assert!(as_owner.is_owner);
    assert!(!as_owner.is_muted);

    let anonymous = CommunityView::read(conn, community.id, None)?;
    assert!(!anonymous.is_member);
    assert!(!anonymous.is_owner);

    let members = CommunityView::members(conn, community.id, None, None)?;
    let mut names = members
      .iter()
      .map(|m| m.person.name.as_str())
      .collect::<Vec<_>>();
    names.sort_unstable();
    assert_eq!(vec!["member", "owner"], names);
    Ok(())
  }

  #[test]
  fn test_list() -> DevshareResult<()> {
    let pool = build_db_pool_for_tests()?;
    let conn = &mut get_conn(&pool)?;

    let owner = test_data::person(conn, "owner")?;
    let reader = test_data::person(conn, "reader")?;
    test_data::community(conn, "zeta", &owner)?;
    let beta = test_data::community(conn, "beta", &owner)?;
    test_data::community(conn, "alpha", &owner)?;
    toggle(conn, reader.id, RelationTarget::Community(beta.id), Relation::Join)?;

    let all = CommunityQuery::default().list(conn)?;
    assert_eq!(
      vec!["alpha", "beta", "zeta"],
      all.iter().map(|c| c.community.name.as_str()).collect::<Vec<_>>()
    );

    let joined = CommunityQuery {
      joined_by: Some(reader.id),
      my_person_id: Some(reader.id),
      ..Default::default()
    }
    .list(conn)?;
    assert_eq!(1, joined.len());
    assert_eq!(beta, joined[0].community);
    assert!(joined[0].is_member);

    let searched = CommunityQuery {
      search: Some("ETA".into()),
      ..Default::default()
    }
    .list(conn)?;
    assert_eq!(
      vec!["beta", "zeta"],
      searched
        .iter()
        .map(|c| c.community.name.as_str())
        .collect::<Vec<_>>()
    );
    Ok(())
  }
}
