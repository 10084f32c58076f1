use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  context::DevshareContext,
  post::{GetPostsResponse, ListSavedPosts},
  utils::blocking,
};
use devshare_db_views::{post_view::PostQuery, structs::LocalUserView};
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn list_saved_posts(
  data: Query<ListSavedPosts>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<GetPostsResponse>> {
  let person_id = local_user_view.person.id;
  let query = PostQuery {
    saved_by: Some(person_id),
    my_person_id: Some(person_id),
    page: data.page,
    limit: data.limit,
    ..Default::default()
  };
  let posts = blocking(context.pool(), move |conn| query.list(conn)).await??;
  Ok(Json(GetPostsResponse { posts }))
}
