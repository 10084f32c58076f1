use crate::change_relation;
use actix_web::web::{Data, Json};
use devshare_api_common::{context::DevshareContext, post::SavePost, relation::RelationResponse};
use devshare_db_schema::relation::{Relation, RelationTarget};
use devshare_db_views::structs::LocalUserView;
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn save_post(
  data: Json<SavePost>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<RelationResponse>> {
  let target = RelationTarget::Post(data.post_id);
  let res = change_relation(
    &context,
    local_user_view.person.id,
    target,
    Relation::Save,
    None,
  )
  .await?;
  Ok(Json(res))
}
