use actix_web::web::{Data, Json, Path};
use devshare_api_common::{
  comment::ListCommentsResponse,
  context::DevshareContext,
  utils::blocking,
};
use devshare_db_schema::{newtypes::PostId, source::post::Post, traits::Crud};
use devshare_db_views::structs::CommentView;
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

#[tracing::instrument(skip(context))]
pub async fn list_comments(
  path: Path<PostId>,
  context: Data<DevshareContext>,
) -> DevshareResult<Json<ListCommentsResponse>> {
  let post_id = path.into_inner();
  blocking(context.pool(), move |conn| Post::read(conn, post_id))
    .await?
    .not_found_as(DevshareErrorType::CouldntFindPost)?;

  let comments = blocking(context.pool(), move |conn| {
    CommentView::for_post(conn, post_id)
  })
  .await??;
  Ok(Json(ListCommentsResponse { post_id, comments }))
}
