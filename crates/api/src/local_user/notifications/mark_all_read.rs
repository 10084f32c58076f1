use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  notification::MarkAllAsReadResponse,
  utils::blocking,
};
use devshare_db_schema::source::notification::Notification;
use devshare_db_views::structs::LocalUserView;
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

#[tracing::instrument(skip(context))]
pub async fn mark_all_notifications_read(
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<MarkAllAsReadResponse>> {
  let person_id = local_user_view.person.id;
  let marked = blocking(context.pool(), move |conn| {
    Notification::mark_all_as_read(conn, person_id)
  })
  .await?
  .with_devshare_type(DevshareErrorType::CouldntMarkNotificationsRead)?;

  Ok(Json(MarkAllAsReadResponse { marked }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{local_user::notifications::mark_read::mark_notification_as_read, test_data};
  use actix_web::ResponseError;
  use devshare_api_common::notification::MarkNotificationAsRead;
  use devshare_db_schema::newtypes::NotificationId;
  use devshare_utils::error::ErrorKind;
  use diesel::connection::SimpleConnection;
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_storage_failure_is_not_a_client_error() -> DevshareResult<()> {
    let context = test_data::context()?;
    let alice = test_data::user(&context, "alice").await?;
    blocking(context.pool(), |conn| {
      conn.batch_execute("DROP TABLE notification")
    })
    .await??;

    let err = mark_all_notifications_read(context.clone(), alice.clone())
      .await
      .err();
    assert_eq!(
      Some(DevshareErrorType::CouldntMarkNotificationsRead),
      err.as_ref().map(|e| e.error_type.clone())
    );
    assert_eq!(Some(503), err.map(|e| e.status_code().as_u16()));

    // A lookup that fails for any reason but a missing row is no 404
    let data = Json(MarkNotificationAsRead {
      notification_id: NotificationId(1),
      read: true,
    });
    let err = mark_notification_as_read(data, context, alice).await.err();
    assert_eq!(Some(ErrorKind::UpstreamFailure), err.map(|e| e.kind()));
    Ok(())
  }
}
