use actix_web::web::{Data, Json};
use devshare_api_common::{context::DevshareContext, post::ListTagsResponse, utils::blocking};
use devshare_db_schema::source::tag::Tag;
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn list_tags(context: Data<DevshareContext>) -> DevshareResult<Json<ListTagsResponse>> {
  let tags = blocking(context.pool(), Tag::list).await??;
  Ok(Json(ListTagsResponse { tags }))
}
