use crate::structs::LocalUserView;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use devshare_db_schema::{
  newtypes::{LocalUserId, PersonId},
  schema::{local_user, person},
  source::{local_user::LocalUser, person::Person},
};
use devshare_utils::error::{DevshareError, DevshareErrorType};
use diesel::{result::Error, ExpressionMethods, QueryDsl, RunQueryDsl, SqliteConnection};
use std::future::{ready, Ready};

type LocalUserViewTuple = (LocalUser, Person);

impl LocalUserView {
  pub fn read(conn: &mut SqliteConnection, local_user_id: LocalUserId) -> Result<Self, Error> {
    let (local_user, person) = local_user::table
      .find(local_user_id)
      .inner_join(person::table)
      .select((local_user::all_columns, person::all_columns))
      .first::<LocalUserViewTuple>(conn)?;
    Ok(Self { local_user, person })
  }

  pub fn read_person(conn: &mut SqliteConnection, person_id: PersonId) -> Result<Self, Error> {
    let (local_user, person) = local_user::table
      .filter(person::id.eq(person_id))
      .inner_join(person::table)
      .select((local_user::all_columns, person::all_columns))
      .first::<LocalUserViewTuple>(conn)?;
    Ok(Self { local_user, person })
  }

  pub fn read_from_name(conn: &mut SqliteConnection, name: &str) -> Result<Self, Error> {
    let (local_user, person) = local_user::table
      .filter(person::name.eq(name))
      .inner_join(person::table)
      .select((local_user::all_columns, person::all_columns))
      .first::<LocalUserViewTuple>(conn)?;
    Ok(Self { local_user, person })
  }
}

/// The session middleware stores the logged in user in the request extensions. Handlers which
/// require a login take `LocalUserView`, handlers which work for anonymous visitors take
/// `Option<LocalUserView>`.
impl FromRequest for LocalUserView {
  type Error = DevshareError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(match req.extensions().get::<LocalUserView>() {
      Some(c) => Ok(c.clone()),
      None => Err(DevshareErrorType::NotLoggedIn.into()),
    })
  }
}
