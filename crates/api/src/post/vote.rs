use crate::change_relation;
use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  post::{DownvotePost, UpvotePost},
  relation::RelationResponse,
};
use devshare_db_schema::relation::{Relation, RelationTarget};
use devshare_db_views::structs::LocalUserView;
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn upvote_post(
  data: Json<UpvotePost>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<RelationResponse>> {
  let target = RelationTarget::Post(data.post_id);
  let res = change_relation(
    &context,
    local_user_view.person.id,
    target,
    Relation::Upvote,
    None,
  )
  .await?;
  Ok(Json(res))
}

#[tracing::instrument(skip(context))]
pub async fn downvote_post(
  data: Json<DownvotePost>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<RelationResponse>> {
  let target = RelationTarget::Post(data.post_id);
  let res = change_relation(
    &context,
    local_user_view.person.id,
    target,
    Relation::Downvote,
    None,
  )
  .await?;
  Ok(Json(res))
}
