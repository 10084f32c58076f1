use actix_web::web::{Data, Json};
use devshare_api_common::{
  comment::{DeleteComment, DeleteCommentResponse},
  context::DevshareContext,
  utils::{blocking, check_comment_creator},
};
use devshare_db_schema::{source::comment::Comment, traits::Crud};
use devshare_db_views::structs::LocalUserView;
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

#[tracing::instrument(skip(context))]
pub async fn delete_comment(
  data: Json<DeleteComment>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<DeleteCommentResponse>> {
  let comment_id = data.comment_id;
  let orig_comment = blocking(context.pool(), move |conn| Comment::read(conn, comment_id))
    .await?
    .not_found_as(DevshareErrorType::CouldntFindComment)?;
  check_comment_creator(local_user_view.person.id, &orig_comment)?;

  blocking(context.pool(), move |conn| Comment::delete(conn, comment_id))
    .await?
    .with_devshare_type(DevshareErrorType::CouldntUpdateComment)?;

  Ok(Json(DeleteCommentResponse {
    comment_id,
    deleted: true,
  }))
}
