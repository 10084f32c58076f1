use crate::structs::NotificationView;
use devshare_db_schema::{
  newtypes::{NotificationId, PersonId},
  schema::{notification, person},
  source::{notification::Notification, person::Person},
  utils::limit_and_offset,
};
use devshare_utils::error::DevshareResult;
use diesel::{
  dsl::count_star,
  result::Error,
  ExpressionMethods,
  JoinOnDsl,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

type NotificationViewTuple = (Notification, Person);

#[derive(Debug, Clone, Default)]
pub struct NotificationQuery {
  pub recipient_id: PersonId,
  pub unread_only: bool,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

impl NotificationQuery {
  /// Notifications of the recipient, newest first.
  pub fn list(self, conn: &mut SqliteConnection) -> DevshareResult<Vec<NotificationView>> {
    let (limit, offset) = limit_and_offset(self.page, self.limit)?;

    let mut query = notification::table
      .inner_join(person::table.on(person::id.eq(notification::actor_id)))
      .filter(notification::recipient_id.eq(self.recipient_id))
      .select((notification::all_columns, person::all_columns))
      .into_boxed();
    if self.unread_only {
      query = query.filter(notification::read.eq(false));
    }

    let rows = query
      .order_by((notification::published.desc(), notification::id.desc()))
      .limit(limit)
      .offset(offset)
      .load::<NotificationViewTuple>(conn)?;
    Ok(
      rows
        .into_iter()
        .map(|(notification, actor)| NotificationView {
          notification,
          actor,
        })
        .collect(),
    )
  }
}

impl NotificationView {
  pub fn read(conn: &mut SqliteConnection, notification_id: NotificationId) -> Result<Self, Error> {
    let (notification, actor) = notification::table
      .find(notification_id)
      .inner_join(person::table.on(person::id.eq(notification::actor_id)))
      .select((notification::all_columns, person::all_columns))
      .first::<NotificationViewTuple>(conn)?;
    Ok(Self {
      notification,
      actor,
    })
  }

  pub fn unread_count(conn: &mut SqliteConnection, recipient_id: PersonId) -> DevshareResult<i64> {
    Ok(
      notification::table
        .filter(notification::recipient_id.eq(recipient_id))
        .filter(notification::read.eq(false))
        .select(count_star())
        .first::<i64>(conn)?,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_data;
  use devshare_db_schema::{
    source::notification::NotificationInsertForm,
    utils::{build_db_pool_for_tests, get_conn},
  };
  use pretty_assertions::assert_eq;

  #[test]
  fn test_list_and_unread_count() -> DevshareResult<()> {
    let pool = build_db_pool_for_tests()?;
    let conn = &mut get_conn(&pool)?;

    let recipient = test_data::person(conn, "recipient")?;
    let actor = test_data::person(conn, "actor")?;
    let mut created = Vec::new();
    for verb in ["one", "two", "three"] {
      created.push(Notification::create(conn, &NotificationInsertForm {
        recipient_id: recipient.id,
        actor_id: actor.id,
        verb: verb.into(),
        target_id: None,
      })?);
    }
    // Someone else's notification
    Notification::create(conn, &NotificationInsertForm {
      recipient_id: actor.id,
      actor_id: recipient.id,
      verb: "other".into(),
      target_id: None,
    })?;
    Notification::update_read(conn, created[1].id, true)?;

    let all = NotificationQuery {
      recipient_id: recipient.id,
      ..Default::default()
    }
    .list(conn)?;
    assert_eq!(
      vec!["three", "two", "one"],
      all.iter().map(|n| n.notification.verb.as_str()).collect::<Vec<_>>()
    );
    assert_eq!(actor, all[0].actor);
    assert_eq!(all[1], NotificationView::read(conn, created[1].id)?);

    let unread = NotificationQuery {
      recipient_id: recipient.id,
      unread_only: true,
      ..Default::default()
    }
    .list(conn)?;
    assert_eq!(2, unread.len());
    assert_eq!(2, NotificationView::unread_count(conn, recipient.id)?);

    Notification::mark_all_as_read(conn, recipient.id)?;
    assert_eq!(0, NotificationView::unread_count(conn, recipient.id)?);
    assert_eq!(1, NotificationView::unread_count(conn, actor.id)?);
    Ok(())
  }
}
