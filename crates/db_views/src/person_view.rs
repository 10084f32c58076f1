use crate::structs::{FollowView, PersonCounts, PersonView};
use chrono::NaiveDateTime;
use devshare_db_schema::{
  newtypes::PersonId,
  schema::{comment, person, person_follower, post},
  source::person::Person,
  utils::{contains_pattern, limit_and_offset},
};
use devshare_utils::error::DevshareResult;
use diesel::{
  dsl::{count_star, exists},
  result::Error,
  select,
  EscapeExpressionMethods,
  ExpressionMethods,
  JoinOnDsl,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
  TextExpressionMethods,
};

impl PersonView {
  pub fn read(
    conn: &mut SqliteConnection,
    person_id: PersonId,
    my_person_id: Option<PersonId>,
  ) -> Result<Self, Error> {
    let person = person::table.find(person_id).first::<Person>(conn)?;
    Self::from_person(conn, person, my_person_id)
  }

  pub fn read_from_name(
    conn: &mut SqliteConnection,
    name: &str,
    my_person_id: Option<PersonId>,
  ) -> Result<Self, Error> {
    let person = person::table
      .filter(person::name.eq(name))
      .first::<Person>(conn)?;
    Self::from_person(conn, person, my_person_id)
  }

  fn from_person(
    conn: &mut SqliteConnection,
    person: Person,
    my_person_id: Option<PersonId>,
  ) -> Result<Self, Error> {
    let followers = person_follower::table
      .filter(person_follower::person_id.eq(person.id))
      .select(count_star())
      .first::<i64>(conn)?;
    let following = person_follower::table
      .filter(person_follower::follower_id.eq(person.id))
      .select(count_star())
      .first::<i64>(conn)?;
    let posts = post::table
      .filter(post::creator_id.eq(person.id))
      .select(count_star())
      .first::<i64>(conn)?;
    let comments = comment::table
      .filter(comment::creator_id.eq(person.id))
      .select(count_star())
      .first::<i64>(conn)?;
    let is_following = match my_person_id {
      Some(my_id) => select(exists(
        person_follower::table
          .filter(person_follower::person_id.eq(person.id))
          .filter(person_follower::follower_id.eq(my_id)),
      ))
      .get_result::<bool>(conn)?,
      None => false,
    };

    Ok(Self {
      person,
      counts: PersonCounts {
        followers,
        following,
        posts,
        comments,
      },
      is_following,
    })
  }
}

#[derive(Debug, Clone, Default)]
pub struct PersonQuery {
  /// Case-insensitive substring of the name.
  pub search: Option<String>,
  pub my_person_id: Option<PersonId>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

impl PersonQuery {
  /// People in alphabetical order.
  pub fn list(self, conn: &mut SqliteConnection) -> DevshareResult<Vec<PersonView>> {
    let (limit, offset) = limit_and_offset(self.page, self.limit)?;
    let mut query = person::table.into_boxed();
    if let Some(search) = self.search {
      query = query.filter(person::name.like(contains_pattern(&search)).escape('\\'));
    }
    let persons = query
      .order_by((person::name.asc(), person::id.asc()))
      .limit(limit)
      .offset(offset)
      .load::<Person>(conn)?;
    persons
      .into_iter()
      .map(|person| Ok(PersonView::from_person(conn, person, self.my_person_id)?))
      .collect()
  }
}

impl FollowView {
  /// Everyone who follows the person, most recent follows first.
  pub fn followers(
    conn: &mut SqliteConnection,
    person_id: PersonId,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> DevshareResult<Vec<Self>> {
    let (limit, offset) = limit_and_offset(page, limit)?;
    let rows = person_follower::table
      .inner_join(person::table.on(person::id.eq(person_follower::follower_id)))
      .filter(person_follower::person_id.eq(person_id))
      .order_by((person_follower::published.desc(), person_follower::id.desc()))
      .select((person::all_columns, person_follower::published))
      .limit(limit)
      .offset(offset)
      .load::<(Person, NaiveDateTime)>(conn)?;
    Ok(rows.into_iter().map(Self::from_tuple).collect())
  }

  /// Everyone the person follows, most recent follows first.
  pub fn following(
    conn: &mut SqliteConnection,
    person_id: PersonId,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> DevshareResult<Vec<Self>> {
    let (limit, offset) = limit_and_offset(page, limit)?;
    let rows = person_follower::table
      .inner_join(person::table.on(person::id.eq(person_follower::person_id)))
      .filter(person_follower::follower_id.eq(person_id))
      .order_by((person_follower::published.desc(), person_follower::id.desc()))
      .select((person::all_columns, person_follower::published))
      .limit(limit)
      .offset(offset)
      .load::<(Person, NaiveDateTime)>(conn)?;
    Ok(rows.into_iter().map(Self::from_tuple).collect())
  }

  fn from_tuple((person, published): (Person, NaiveDateTime)) -> Self {
    Self { person, published }
  }
}
