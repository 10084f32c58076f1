use devshare_db_schema::{
  relation::{Relation, RelationTarget},
  source::{
    comment::Comment,
    notification::{Notification, NotificationInsertForm},
    post::Post,
  },
  traits::Crud,
};
use devshare_utils::error::DevshareResult;
use diesel::SqliteConnection;

/// Post titles are cut to this many characters inside a notification verb.
const VERB_TITLE_LENGTH: usize = 30;

pub fn comment_verb(post_title: &str) -> String {
  let title: String = post_title.chars().take(VERB_TITLE_LENGTH).collect();
  format!("commented on your post: \"{title}...\"")
}

/// Tells the post author about a new comment. Nothing is sent for comments on your own post, or
/// when the author muted the community of the post.
pub fn send_comment_notification(
  conn: &mut SqliteConnection,
  comment: &Comment,
) -> DevshareResult<Option<Notification>> {
  let post = Post::read(conn, comment.post_id)?;
  let recipient_id = post.creator_id;
  if comment.creator_id == recipient_id {
    return Ok(None);
  }
  let muted = Relation::Mute.holds(
    conn,
    recipient_id,
    RelationTarget::Community(post.community_id),
  )?;
  if muted {
    return Ok(None);
  }

  let form = NotificationInsertForm {
    recipient_id,
    actor_id: comment.creator_id,
    verb: comment_verb(&post.title),
    target_id: Some(post.id.0),
  };
  Ok(Some(Notification::create(conn, &form)?))
}

#[cfg(test)]
mod tests {
  use super::*;
  use devshare_db_schema::{
    newtypes::PersonId,
    relation::toggle,
    source::{
      comment::CommentInsertForm,
      community::{Community, CommunityInsertForm},
      person::{Person, PersonInsertForm},
      post::PostInsertForm,
    },
    utils::{build_db_pool_for_tests, get_conn},
  };
  use devshare_db_views::{notification_view::NotificationQuery, structs::NotificationView};
  use pretty_assertions::assert_eq;

  fn person(conn: &mut SqliteConnection, name: &str) -> DevshareResult<Person> {
    Ok(Person::create(conn, &PersonInsertForm {
      name: name.into(),
      ..Default::default()
    })?)
  }

  fn comment(
    conn: &mut SqliteConnection,
    creator_id: PersonId,
    post: &Post,
  ) -> DevshareResult<Comment> {
    Ok(Comment::create(conn, &CommentInsertForm {
      creator_id,
      post_id: post.id,
      parent_id: None,
      content: "nice post".into(),
    })?)
  }

  #[test]
  fn test_verb() {
    assert_eq!(
      "commented on your post: \"Short...\"",
      comment_verb("Short")
    );
    assert_eq!(
      "commented on your post: \"A title which is way longer th...\"",
      comment_verb("A title which is way longer than thirty characters")
    );
  }

  #[test]
  fn test_send_comment_notification() -> DevshareResult<()> {
    let pool = build_db_pool_for_tests()?;
    let conn = &mut get_conn(&pool)?;

    let author = person(conn, "author")?;
    let commenter = person(conn, "commenter")?;
    let bystander = person(conn, "bystander")?;
    let community = Community::create_with_owner(conn, &CommunityInsertForm {
      name: "notified".into(),
      description: String::new(),
      owner_id: author.id,
    })?;
    let post = Post::create(conn, &PostInsertForm {
      title: "Why sqlite is enough for most side projects".into(),
      content: String::new(),
      image_url: None,
      creator_id: author.id,
      community_id: community.id,
    })?;

    let c = comment(conn, commenter.id, &post)?;
    let sent = send_comment_notification(conn, &c)?;
    let notification = sent.ok_or(diesel::NotFound)?;
    assert_eq!(author.id, notification.recipient_id);
    assert_eq!(commenter.id, notification.actor_id);
    assert_eq!(Some(post.id.0), notification.target_id);
    assert_eq!(
      "commented on your post: \"Why sqlite is enough for most ...\"",
      notification.verb
    );
    assert!(!notification.read);

    // Commenting on your own post
    let own = comment(conn, author.id, &post)?;
    assert_eq!(None, send_comment_notification(conn, &own)?);

    // The author muted the community
    toggle(
      conn,
      author.id,
      RelationTarget::Community(community.id),
      Relation::Mute,
    )?;
    let muted = comment(conn, commenter.id, &post)?;
    assert_eq!(None, send_comment_notification(conn, &muted)?);

    let all = NotificationQuery {
      recipient_id: author.id,
      ..Default::default()
    }
    .list(conn)?;
    assert_eq!(1, all.len());
    assert_eq!(1, NotificationView::unread_count(conn, author.id)?);
    assert_eq!(0, NotificationView::unread_count(conn, bystander.id)?);
    Ok(())
  }

  #[test]
  fn test_mark_all_as_read_only_touches_the_recipient() -> DevshareResult<()> {
    let pool = build_db_pool_for_tests()?;
    let conn = &mut get_conn(&pool)?;

    let first = person(conn, "first")?;
    let second = person(conn, "second")?;
    let community = Community::create_with_owner(conn, &CommunityInsertForm {
      name: "shared".into(),
      description: String::new(),
      owner_id: first.id,
    })?;
    let first_post = Post::create(conn, &PostInsertForm {
      title: "first post".into(),
      content: String::new(),
      image_url: None,
      creator_id: first.id,
      community_id: community.id,
    })?;
    let second_post = Post::create(conn, &PostInsertForm {
      title: "second post".into(),
      content: String::new(),
      image_url: None,
      creator_id: second.id,
      community_id: community.id,
    })?;
    let c = comment(conn, second.id, &first_post)?;
    send_comment_notification(conn, &c)?;
    let c = comment(conn, second.id, &first_post)?;
    send_comment_notification(conn, &c)?;
    let c = comment(conn, first.id, &second_post)?;
    send_comment_notification(conn, &c)?;

    assert_eq!(2, Notification::mark_all_as_read(conn, first.id)?);
    assert_eq!(0, NotificationView::unread_count(conn, first.id)?);
    assert_eq!(1, NotificationView::unread_count(conn, second.id)?);
    Ok(())
  }
}
