use crate::structs::CommentView;
use devshare_db_schema::{
  newtypes::{CommentId, PostId},
  schema::{comment, person},
  source::{comment::Comment, person::Person},
};
use diesel::{result::Error, ExpressionMethods, QueryDsl, RunQueryDsl, SqliteConnection};

type CommentViewTuple = (Comment, Person);

impl CommentView {
  pub fn read(conn: &mut SqliteConnection, comment_id: CommentId) -> Result<Self, Error> {
    let (comment, creator) = comment::table
      .find(comment_id)
      .inner_join(person::table)
      .select((comment::all_columns, person::all_columns))
      .first::<CommentViewTuple>(conn)?;
    Ok(Self { comment, creator })
  }

  /// Every comment of the post, oldest first. Replies reference their parent through
  /// `comment.parent_id`, clients build the tree.
  pub fn for_post(conn: &mut SqliteConnection, post_id: PostId) -> Result<Vec<Self>, Error> {
    let rows = comment::table
      .inner_join(person::table)
      .filter(comment::post_id.eq(post_id))
      .order_by((comment::published.asc(), comment::id.asc()))
      .select((comment::all_columns, person::all_columns))
      .load::<CommentViewTuple>(conn)?;
    Ok(
      rows
        .into_iter()
        .map(|(comment, creator)| Self { comment, creator })
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use crate::{structs::CommentView, test_data};
  use devshare_db_schema::{
    source::comment::{Comment, CommentInsertForm},
    traits::Crud,
    utils::{build_db_pool_for_tests, get_conn},
  };
  use devshare_utils::error::DevshareResult;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_for_post() -> DevshareResult<()> {
    let pool = build_db_pool_for_tests()?;
    let conn = &mut get_conn(&pool)?;

    let author = test_data::person(conn, "author")?;
    let replier = test_data::person(conn, "replier")?;
    let community = test_data::community(conn, "talk", &author)?;
    let post = test_data::post(conn, "discuss", &author, &community)?;
    let other_post = test_data::post(conn, "quiet", &author, &community)?;

    let first = Comment::create(conn, &CommentInsertForm {
      creator_id: replier.id,
      post_id: post.id,
      parent_id: None,
      content: "first".into(),
    })?;
    let reply = Comment::create(conn, &CommentInsertForm {
      creator_id: author.id,
      post_id: post.id,
      parent_id: Some(first.id),
      content: "thanks".into(),
    })?;

    let views = CommentView::for_post(conn, post.id)?;
    assert_eq!(2, views.len());
    assert_eq!(first, views[0].comment);
    assert_eq!(replier, views[0].creator);
    assert_eq!(reply, views[1].comment);
    assert_eq!(author, views[1].creator);

    assert_eq!(views[1], CommentView::read(conn, reply.id)?);
    assert!(CommentView::for_post(conn, other_post.id)?.is_empty());
    Ok(())
  }
}
