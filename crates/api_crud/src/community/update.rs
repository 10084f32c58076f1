use actix_web::web::{Data, Json};
use devshare_api_common::{
  community::{CommunityResponse, EditCommunity},
  context::DevshareContext,
  utils::{blocking, check_community_owner},
};
use devshare_db_schema::{
  source::community::{Community, CommunityUpdateForm},
  traits::Crud,
  utils::naive_now,
};
use devshare_db_views::structs::{CommunityView, LocalUserView};
use devshare_utils::{
  error::{DevshareErrorExt, DevshareErrorType, DevshareResult},
  utils::validation::description_length_check,
};

#[tracing::instrument(skip(context))]
pub async fn edit_community(
  data: Json<EditCommunity>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<CommunityResponse>> {
  description_length_check(&data.description)?;

  let community_id = data.community_id;
  let community = blocking(context.pool(), move |conn| Community::read(conn, community_id))
    .await?
    .not_found_as(DevshareErrorType::CouldntFindCommunity)?;
  let person_id = local_user_view.person.id;
  check_community_owner(person_id, &community)?;

  let form = CommunityUpdateForm {
    description: Some(data.description.clone()),
    updated: Some(Some(naive_now())),
  };
  blocking(context.pool(), move |conn| {
    Community::update(conn, community_id, &form)
  })
  .await?
  .with_devshare_type(DevshareErrorType::CouldntUpdateCommunity)?;

  let community_view = blocking(context.pool(), move |conn| {
    CommunityView::read(conn, community_id, Some(person_id))
  })
  .await??;
  Ok(Json(CommunityResponse { community_view }))
}
