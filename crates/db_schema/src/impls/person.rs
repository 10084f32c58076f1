use crate::{
  newtypes::PersonId,
  schema::{person, person_follower},
  source::person::{Person, PersonFollower, PersonFollowerForm, PersonInsertForm, PersonUpdateForm},
  traits::{Crud, Followable},
};
use diesel::{
  dsl::insert_into,
  result::Error,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

impl Crud for Person {
  type InsertForm = PersonInsertForm;
  type UpdateForm = PersonUpdateForm;
  type IdType = PersonId;

  fn create(conn: &mut SqliteConnection, form: &PersonInsertForm) -> Result<Self, Error> {
    insert_into(person::table)
      .values(form)
      .get_result::<Self>(conn)
  }

  fn read(conn: &mut SqliteConnection, person_id: PersonId) -> Result<Self, Error> {
    person::table.find(person_id).first::<Self>(conn)
  }

  fn update(
    conn: &mut SqliteConnection,
    person_id: PersonId,
    form: &PersonUpdateForm,
  ) -> Result<Self, Error> {
    diesel::update(person::table.find(person_id))
      .set(form)
      .get_result::<Self>(conn)
  }
}

impl Person {
  pub fn read_from_name(conn: &mut SqliteConnection, from_name: &str) -> Result<Self, Error> {
    person::table
      .filter(person::name.eq(from_name))
      .first::<Self>(conn)
  }
}

impl Followable for PersonFollower {
  type Form = PersonFollowerForm;

  fn follow(conn: &mut SqliteConnection, form: &PersonFollowerForm) -> Result<Self, Error> {
    insert_into(person_follower::table)
      .values(form)
      .on_conflict((person_follower::follower_id, person_follower::person_id))
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
  }

  fn unfollow(conn: &mut SqliteConnection, form: &PersonFollowerForm) -> Result<usize, Error> {
    diesel::delete(
      person_follower::table
        .filter(person_follower::follower_id.eq(form.follower_id))
        .filter(person_follower::person_id.eq(form.person_id)),
    )
    .execute(conn)
  }
}
