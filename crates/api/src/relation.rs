use crate::change_relation;
use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  relation::{RelationResponse, ToggleRelation},
};
use devshare_db_views::structs::LocalUserView;
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn toggle_relation(
  data: Json<ToggleRelation>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<RelationResponse>> {
  let res = change_relation(
    &context,
    local_user_view.person.id,
    data.target,
    data.relation,
    None,
  )
  .await?;
  Ok(Json(res))
}
