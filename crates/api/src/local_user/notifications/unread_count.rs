use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  notification::GetUnreadCountResponse,
  utils::blocking,
};
use devshare_db_views::structs::{LocalUserView, NotificationView};
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn unread_count(
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<GetUnreadCountResponse>> {
  let person_id = local_user_view.person.id;
  let unread = blocking(context.pool(), move |conn| {
    NotificationView::unread_count(conn, person_id)
  })
  .await??;

  Ok(Json(GetUnreadCountResponse { unread }))
}
