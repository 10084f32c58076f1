use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  community::{ListCommunityMembers, ListCommunityMembersResponse},
  context::DevshareContext,
  utils::blocking,
};
use devshare_db_schema::source::community::Community;
use devshare_db_views::structs::CommunityView;
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

#[tracing::instrument(skip(context))]
pub async fn list_community_members(
  data: Query<ListCommunityMembers>,
  context: Data<DevshareContext>,
) -> DevshareResult<Json<ListCommunityMembersResponse>> {
  let name = data.name.clone();
  let community = blocking(context.pool(), move |conn| {
    Community::read_from_name(conn, &name)
  })
  .await?
  .not_found_as(DevshareErrorType::CouldntFindCommunity)?;

  let (page, limit) = (data.page, data.limit);
  let members = blocking(context.pool(), move |conn| {
    CommunityView::members(conn, community.id, page, limit)
  })
  .await??;
  Ok(Json(ListCommunityMembersResponse { members }))
}
