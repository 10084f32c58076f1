use actix_web::web::{Data, Json};
use devshare_api_common::{
  community::{CommunityResponse, CreateCommunity},
  context::DevshareContext,
  utils::blocking,
};
use devshare_db_schema::source::community::{Community, CommunityInsertForm};
use devshare_db_views::structs::{CommunityView, LocalUserView};
use diesel::OptionalExtension;
use devshare_utils::{
  error::{DevshareErrorExt, DevshareErrorExt2, DevshareErrorType, DevshareResult},
  utils::validation::{description_length_check, is_valid_actor_name},
};

#[tracing::instrument(skip(context))]
pub async fn create_community(
  data: Json<CreateCommunity>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<CommunityResponse>> {
  let data = data.into_inner();
  is_valid_actor_name(&data.name)?;
  let description = data.description.unwrap_or_default();
  description_length_check(&description)?;

  let name = data.name.clone();
  let existing = blocking(context.pool(), move |conn| {
    Community::read_from_name(conn, &name).optional()
  })
  .await??;
  if existing.is_some() {
    Err(DevshareErrorType::CommunityAlreadyExists)?
  }

  let person_id = local_user_view.person.id;
  let form = CommunityInsertForm {
    name: data.name,
    description,
    owner_id: person_id,
  };
  let community = blocking(context.pool(), move |conn| {
    Community::create_with_owner(conn, &form)
  })
  .await?
  .with_devshare_type(DevshareErrorType::CouldntCreateCommunity)
  // Somebody else took the name after the check above
  .unique_violation_as(DevshareErrorType::CommunityAlreadyExists)?;

  let community_id = community.id;
  let community_view = blocking(context.pool(), move |conn| {
    CommunityView::read(conn, community_id, Some(person_id))
  })
  .await??;
  Ok(Json(CommunityResponse { community_view }))
}
