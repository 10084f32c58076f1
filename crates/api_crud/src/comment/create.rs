use actix_web::web::{Data, Json, Path};
use devshare_api_common::{
  comment::{CommentResponse, CreateComment},
  context::DevshareContext,
  notify::send_comment_notification,
  utils::blocking,
};
use devshare_db_schema::{
  newtypes::PostId,
  source::{
    comment::{Comment, CommentInsertForm},
    post::Post,
  },
  traits::Crud,
};
use devshare_db_views::structs::{CommentView, LocalUserView};
use devshare_utils::{
  error::{DevshareErrorExt, DevshareErrorType, DevshareResult},
  utils::validation::is_valid_body_field,
};
use tracing::warn;

#[tracing::instrument(skip(context))]
pub async fn create_comment(
  path: Path<PostId>,
  data: Json<CreateComment>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<CommentResponse>> {
  let post_id = path.into_inner();
  let data = data.into_inner();
  is_valid_body_field(&data.content, false)?;

  blocking(context.pool(), move |conn| Post::read(conn, post_id))
    .await?
    .not_found_as(DevshareErrorType::CouldntFindPost)?;

  if let Some(parent_id) = data.parent_id {
    let parent = blocking(context.pool(), move |conn| Comment::read(conn, parent_id))
      .await?
      .not_found_as(DevshareErrorType::CouldntFindComment)?;
    if parent.post_id != post_id {
      Err(DevshareErrorType::ParentCommentNotOnPost)?
    }
  }

  let form = CommentInsertForm {
    creator_id: local_user_view.person.id,
    post_id,
    parent_id: data.parent_id,
    content: data.content,
  };
  let comment = blocking(context.pool(), move |conn| Comment::create(conn, &form))
    .await?
    .with_devshare_type(DevshareErrorType::CouldntCreateComment)?;

  // The comment stays, even when the post author can't be notified
  let inserted = comment.clone();
  let sent = blocking(context.pool(), move |conn| {
    send_comment_notification(conn, &inserted)
  })
  .await
  .and_then(|res| res);
  if let Err(e) = sent {
    warn!("Couldn't send notification for comment {}: {e}", comment.id.0);
  }

  let comment_id = comment.id;
  let comment_view = blocking(context.pool(), move |conn| {
    CommentView::read(conn, comment_id)
  })
  .await??;
  Ok(Json(CommentResponse { comment_view }))
}
