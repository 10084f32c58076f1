use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  person::{PersonResponse, SaveProfile},
  utils::blocking,
};
use devshare_db_schema::{
  source::person::{Person, PersonUpdateForm},
  traits::Crud,
  utils::{diesel_option_overwrite, naive_now},
};
use devshare_db_views::structs::{LocalUserView, PersonView};
use devshare_utils::{
  error::{DevshareErrorExt, DevshareErrorType, DevshareResult},
  utils::validation::{is_valid_bio_field, is_valid_url},
};

#[tracing::instrument(skip(context))]
pub async fn save_profile(
  data: Json<SaveProfile>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<PersonResponse>> {
  let bio = diesel_option_overwrite(data.bio.clone());
  let avatar = diesel_option_overwrite(data.avatar.clone());
  if bio.is_none() && avatar.is_none() {
    Err(DevshareErrorType::NoProfileChanges)?
  }
  if let Some(Some(bio)) = &bio {
    is_valid_bio_field(bio)?;
  }
  if let Some(Some(avatar)) = &avatar {
    is_valid_url(avatar)?;
  }

  let person_id = local_user_view.person.id;
  let form = PersonUpdateForm {
    bio,
    avatar,
    updated: Some(Some(naive_now())),
    ..Default::default()
  };
  blocking(context.pool(), move |conn| {
    Person::update(conn, person_id, &form)
  })
  .await?
  .with_devshare_type(DevshareErrorType::CouldntUpdateProfile)?;

  let person_view = blocking(context.pool(), move |conn| {
    PersonView::read(conn, person_id, Some(person_id))
  })
  .await??;
  Ok(Json(PersonResponse { person_view }))
}
