use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  context::DevshareContext,
  person::{GetPerson, PersonResponse},
  utils::blocking,
};
use devshare_db_views::structs::{LocalUserView, PersonView};
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

#[tracing::instrument(skip(context))]
pub async fn get_person(
  data: Query<GetPerson>,
  context: Data<DevshareContext>,
  local_user_view: Option<LocalUserView>,
) -> DevshareResult<Json<PersonResponse>> {
  let my_person_id = local_user_view.map(|l| l.person.id);
  let name = data.name.clone();
  let person_view = blocking(context.pool(), move |conn| {
    PersonView::read_from_name(conn, &name, my_person_id)
  })
  .await?
  .not_found_as(DevshareErrorType::CouldntFindPerson)?;

  Ok(Json(PersonResponse { person_view }))
}
