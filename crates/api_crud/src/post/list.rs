use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  context::DevshareContext,
  post::{GetPosts, GetPostsResponse},
  utils::blocking,
};
use devshare_db_views::{post_view::PostQuery, structs::LocalUserView};
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn list_posts(
  data: Query<GetPosts>,
  context: Data<DevshareContext>,
  local_user_view: Option<LocalUserView>,
) -> DevshareResult<Json<GetPostsResponse>> {
  let data = data.into_inner();
  let query = PostQuery {
    community_name: data.community_name,
    creator_name: data.creator_name,
    search: data.search,
    my_person_id: local_user_view.map(|l| l.person.id),
    page: data.page,
    limit: data.limit,
    ..Default::default()
  };
  let posts = blocking(context.pool(), move |conn| query.list(conn)).await??;
  Ok(Json(GetPostsResponse { posts }))
}
