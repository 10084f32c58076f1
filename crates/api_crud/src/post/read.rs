use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  context::DevshareContext,
  post::{GetPost, GetPostResponse},
  utils::blocking,
};
use devshare_db_views::structs::{CommentView, LocalUserView, PostView};
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

#[tracing::instrument(skip(context))]
pub async fn get_post(
  data: Query<GetPost>,
  context: Data<DevshareContext>,
  local_user_view: Option<LocalUserView>,
) -> DevshareResult<Json<GetPostResponse>> {
  let my_person_id = local_user_view.map(|l| l.person.id);
  let post_id = data.id;
  let post_view = blocking(context.pool(), move |conn| {
    PostView::read(conn, post_id, my_person_id)
  })
  .await?
  .not_found_as(DevshareErrorType::CouldntFindPost)?;

  let comments = blocking(context.pool(), move |conn| {
    CommentView::for_post(conn, post_id)
  })
  .await??;

  Ok(Json(GetPostResponse {
    post_view,
    comments,
  }))
}
