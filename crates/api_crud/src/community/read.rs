use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  community::{CommunityResponse, GetCommunity},
  context::DevshareContext,
  utils::blocking,
};
use devshare_db_views::structs::{CommunityView, LocalUserView};
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

#[tracing::instrument(skip(context))]
pub async fn get_community(
  data: Query<GetCommunity>,
  context: Data<DevshareContext>,
  local_user_view: Option<LocalUserView>,
) -> DevshareResult<Json<CommunityResponse>> {
  let my_person_id = local_user_view.map(|l| l.person.id);
  let name = data.name.clone();
  let community_view = blocking(context.pool(), move |conn| {
    CommunityView::read_from_name(conn, &name, my_person_id)
  })
  .await?
  .not_found_as(DevshareErrorType::CouldntFindCommunity)?;

  Ok(Json(CommunityResponse { community_view }))
}
