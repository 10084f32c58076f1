use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  context::DevshareContext,
  site::{GetHomeFeed, GetHomeFeedResponse},
  utils::blocking,
};
use devshare_db_views::{post_view::home_feed, structs::LocalUserView};
use devshare_utils::error::DevshareResult;

/// Logged in users see their joined communities, everyone else the best rated posts.
#[tracing::instrument(skip(context))]
pub async fn get_home_feed(
  data: Query<GetHomeFeed>,
  context: Data<DevshareContext>,
  local_user_view: Option<LocalUserView>,
) -> DevshareResult<Json<GetHomeFeedResponse>> {
  let person_id = local_user_view.map(|l| l.person.id);
  let (page, limit) = (data.page, data.limit);
  let posts = blocking(context.pool(), move |conn| {
    home_feed(conn, person_id, page, limit)
  })
  .await??;

  Ok(Json(GetHomeFeedResponse { posts }))
}
