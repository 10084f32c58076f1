use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  person::{LoginResponse, Register},
  utils::blocking,
};
use devshare_db_schema::{
  source::{
    local_user::{LocalUser, LocalUserInsertForm},
    person::{Person, PersonInsertForm},
  },
  traits::Crud,
};
use devshare_db_views::structs::PersonView;
use diesel::OptionalExtension;
use devshare_utils::{
  claims::Claims,
  error::{DevshareError, DevshareErrorExt2, DevshareErrorType, DevshareResult},
  utils::validation::{is_valid_actor_name, password_length_check},
};

#[tracing::instrument(skip_all)]
pub async fn register(
  data: Json<Register>,
  context: Data<DevshareContext>,
) -> DevshareResult<Json<LoginResponse>> {
  let data = data.into_inner();
  is_valid_actor_name(&data.name)?;
  password_length_check(&data.password)?;
  let email = data
    .email
    .map(|e| e.trim().to_string())
    .filter(|e| !e.is_empty());

  let person_form = PersonInsertForm {
    name: data.name,
    ..Default::default()
  };
  let password = data.password;
  let person = blocking(context.pool(), move |conn| {
    conn.immediate_transaction(|conn| {
      if Person::read_from_name(conn, &person_form.name)
        .optional()?
        .is_some()
      {
        Err(DevshareErrorType::UsernameAlreadyExists)?
      }
      let person = Person::create(conn, &person_form)
        .map_err(DevshareError::from)
        .unique_violation_as(DevshareErrorType::UsernameAlreadyExists)?;
      LocalUser::create(conn, &LocalUserInsertForm {
        person_id: person.id,
        password_encrypted: password,
        email,
      })
      .unique_violation_as(DevshareErrorType::EmailAlreadyExists)?;
      Ok(person) as Result<Person, DevshareError>
    })
  })
  .await??;
  tracing::info!("Registered {}", person.name);

  let person_id = person.id;
  let person_view = blocking(context.pool(), move |conn| {
    PersonView::read(conn, person_id, Some(person_id))
  })
  .await??;

  let settings = context.settings();
  let jwt = Claims::generate(person_id.0, &settings.hostname, &settings.jwt_secret)?;
  Ok(Json(LoginResponse { jwt, person_view }))
}
