use crate::{
  newtypes::PersonId,
  schema::local_user,
  source::local_user::{LocalUser, LocalUserInsertForm},
};
use bcrypt::{hash, verify, DEFAULT_COST};
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};
use diesel::{
  dsl::insert_into,
  result::Error,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

impl LocalUser {
  /// Stores the credentials, with the plain text password of the form replaced by its hash.
  pub fn create(conn: &mut SqliteConnection, form: &LocalUserInsertForm) -> DevshareResult<Self> {
    let password_hash = hash(&form.password_encrypted, DEFAULT_COST)
      .with_devshare_type(DevshareErrorType::InvalidPassword)?;
    let form_with_hash = LocalUserInsertForm {
      password_encrypted: password_hash,
      ..form.clone()
    };
    Ok(
      insert_into(local_user::table)
        .values(form_with_hash)
        .get_result::<Self>(conn)?,
    )
  }

  pub fn read_from_person(conn: &mut SqliteConnection, person_id: PersonId) -> Result<Self, Error> {
    local_user::table
      .filter(local_user::person_id.eq(person_id))
      .first::<Self>(conn)
  }

  pub fn verify_password(&self, password: &str) -> bool {
    verify(password, &self.password_encrypted).unwrap_or(false)
  }
}
