use actix_web::web::{Data, Json};
use devshare_api_common::{
  comment::{CommentResponse, EditComment},
  context::DevshareContext,
  utils::{blocking, check_comment_creator},
};
use devshare_db_schema::{
  source::comment::{Comment, CommentUpdateForm},
  traits::Crud,
  utils::naive_now,
};
use devshare_db_views::structs::{CommentView, LocalUserView};
use devshare_utils::{
  error::{DevshareErrorExt, DevshareErrorType, DevshareResult},
  utils::validation::is_valid_body_field,
};

/// Edits never notify anyone.
#[tracing::instrument(skip(context))]
pub async fn edit_comment(
  data: Json<EditComment>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<CommentResponse>> {
  is_valid_body_field(&data.content, false)?;

  let comment_id = data.comment_id;
  let orig_comment = blocking(context.pool(), move |conn| Comment::read(conn, comment_id))
    .await?
    .not_found_as(DevshareErrorType::CouldntFindComment)?;
  check_comment_creator(local_user_view.person.id, &orig_comment)?;

  let form = CommentUpdateForm {
    content: Some(data.content.clone()),
    updated: Some(Some(naive_now())),
  };
  blocking(context.pool(), move |conn| {
    Comment::update(conn, comment_id, &form)
  })
  .await?
  .with_devshare_type(DevshareErrorType::CouldntUpdateComment)?;

  let comment_view = blocking(context.pool(), move |conn| {
    CommentView::read(conn, comment_id)
  })
  .await??;
  Ok(Json(CommentResponse { comment_view }))
}
