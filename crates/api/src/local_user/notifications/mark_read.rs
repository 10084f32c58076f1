use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  notification::{MarkNotificationAsRead, NotificationResponse},
  utils::blocking,
};
use devshare_db_schema::source::notification::Notification;
use devshare_db_views::structs::{LocalUserView, NotificationView};
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

#[tracing::instrument(skip(context))]
pub async fn mark_notification_as_read(
  data: Json<MarkNotificationAsRead>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<NotificationResponse>> {
  let notification_id = data.notification_id;
  let notification = blocking(context.pool(), move |conn| {
    Notification::read(conn, notification_id)
  })
  .await?
  .not_found_as(DevshareErrorType::CouldntFindNotification)?;

  let person_id = local_user_view.person.id;
  if notification.recipient_id != person_id {
    Err(DevshareErrorType::NotYourNotification)?
  }

  let read = data.read;
  blocking(context.pool(), move |conn| {
    Notification::update_read(conn, notification_id, read)
  })
  .await?
  .with_devshare_type(DevshareErrorType::CouldntMarkNotificationsRead)?;

  let notification_view = blocking(context.pool(), move |conn| {
    NotificationView::read(conn, notification_id)
  })
  .await??;
  Ok(Json(NotificationResponse { notification_view }))
}
