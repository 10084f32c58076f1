use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  context::DevshareContext,
  notification::{ListNotifications, ListNotificationsResponse},
  utils::blocking,
};
use devshare_db_views::{notification_view::NotificationQuery, structs::LocalUserView};
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn list_notifications(
  data: Query<ListNotifications>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<ListNotificationsResponse>> {
  let query = NotificationQuery {
    recipient_id: local_user_view.person.id,
    unread_only: data.unread_only.unwrap_or_default(),
    page: data.page,
    limit: data.limit,
  };
  let notifications = blocking(context.pool(), move |conn| query.list(conn)).await??;
  Ok(Json(ListNotificationsResponse { notifications }))
}
