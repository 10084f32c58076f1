use devshare_db_schema::newtypes::NotificationId;
use devshare_db_views::structs::NotificationView;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Your notifications, newest first.
pub struct ListNotifications {
  pub unread_only: Option<bool>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListNotificationsResponse {
  pub notifications: Vec<NotificationView>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Mark one of your notifications as read or unread.
pub struct MarkNotificationAsRead {
  pub notification_id: NotificationId,
  pub read: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NotificationResponse {
  pub notification_view: NotificationView,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarkAllAsReadResponse {
  /// How many notifications changed from unread to read.
  pub marked: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetUnreadCountResponse {
  pub unread: i64,
}
