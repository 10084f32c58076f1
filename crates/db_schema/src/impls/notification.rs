use crate::{
  newtypes::{NotificationId, PersonId},
  schema::notification,
  source::notification::{Notification, NotificationInsertForm},
};
use diesel::{
  dsl::insert_into,
  result::Error,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

impl Notification {
  pub fn create(conn: &mut SqliteConnection, form: &NotificationInsertForm) -> Result<Self, Error> {
    insert_into(notification::table)
      .values(form)
      .get_result::<Self>(conn)
  }

  pub fn read(conn: &mut SqliteConnection, notification_id: NotificationId) -> Result<Self, Error> {
    notification::table
      .find(notification_id)
      .first::<Self>(conn)
  }

  pub fn update_read(
    conn: &mut SqliteConnection,
    notification_id: NotificationId,
    new_read: bool,
  ) -> Result<Self, Error> {
    diesel::update(notification::table.find(notification_id))
      .set(notification::read.eq(new_read))
      .get_result::<Self>(conn)
  }

  /// Flips every unread notification of the recipient in one statement.
  pub fn mark_all_as_read(
    conn: &mut SqliteConnection,
    for_recipient_id: PersonId,
  ) -> Result<usize, Error> {
    diesel::update(
      notification::table
        .filter(notification::recipient_id.eq(for_recipient_id))
        .filter(notification::read.eq(false)),
    )
    .set(notification::read.eq(true))
    .execute(conn)
  }
}
