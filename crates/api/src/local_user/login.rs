use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  person::{Login, LoginResponse},
  utils::blocking,
};
use devshare_db_views::structs::{LocalUserView, PersonView};
use devshare_utils::{
  claims::Claims,
  error::{DevshareErrorExt, DevshareErrorType, DevshareResult},
};

#[tracing::instrument(skip_all)]
pub async fn login(
  data: Json<Login>,
  context: Data<DevshareContext>,
) -> DevshareResult<Json<LoginResponse>> {
  let name = data.name.clone();
  let local_user_view = blocking(context.pool(), move |conn| {
    LocalUserView::read_from_name(conn, &name)
  })
  .await?
  .not_found_as(DevshareErrorType::IncorrectLogin)?;

  if !local_user_view.local_user.verify_password(&data.password) {
    Err(DevshareErrorType::IncorrectLogin)?
  }

  let person_id = local_user_view.person.id;
  let person_view = blocking(context.pool(), move |conn| {
    PersonView::read(conn, person_id, Some(person_id))
  })
  .await??;

  let settings = context.settings();
  let jwt = Claims::generate(person_id.0, &settings.hostname, &settings.jwt_secret)?;
  Ok(Json(LoginResponse { jwt, person_view }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_data;
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_login() -> DevshareResult<()> {
    let context = test_data::context()?;
    let user = test_data::user(&context, "logger").await?;

    let res = login(
      Json(Login {
        name: "logger".into(),
        password: "hunter2hunter2".into(),
      }),
      context.clone(),
    )
    .await?;
    assert_eq!(user.person, res.person_view.person);
    let claims = Claims::validate(&res.jwt, &context.settings().jwt_secret)?.claims;
    assert_eq!(user.person.id.0, claims.person_id()?);

    let wrong_password = login(
      Json(Login {
        name: "logger".into(),
        password: "not the password".into(),
      }),
      context.clone(),
    )
    .await
    .err()
    .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::IncorrectLogin), wrong_password);

    let unknown = login(
      Json(Login {
        name: "nobody".into(),
        password: "hunter2hunter2".into(),
      }),
      context,
    )
    .await
    .err()
    .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::IncorrectLogin), unknown);
    Ok(())
  }
}
