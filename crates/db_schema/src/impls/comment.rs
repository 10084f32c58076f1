use crate::{
  newtypes::{CommentId, PostId},
  schema::comment,
  source::comment::{Comment, CommentInsertForm, CommentUpdateForm},
  traits::Crud,
};
use diesel::{
  dsl::insert_into,
  result::Error,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

impl Crud for Comment {
  type InsertForm = CommentInsertForm;
  type UpdateForm = CommentUpdateForm;
  type IdType = CommentId;

  fn create(conn: &mut SqliteConnection, form: &CommentInsertForm) -> Result<Self, Error> {
    insert_into(comment::table)
      .values(form)
      .get_result::<Self>(conn)
  }

  fn read(conn: &mut SqliteConnection, comment_id: CommentId) -> Result<Self, Error> {
    comment::table.find(comment_id).first::<Self>(conn)
  }

  fn update(
    conn: &mut SqliteConnection,
    comment_id: CommentId,
    form: &CommentUpdateForm,
  ) -> Result<Self, Error> {
    diesel::update(comment::table.find(comment_id))
      .set(form)
      .get_result::<Self>(conn)
  }
}

impl Comment {
  /// Replies go with their parent.
  pub fn delete(conn: &mut SqliteConnection, comment_id: CommentId) -> Result<usize, Error> {
    diesel::delete(comment::table.find(comment_id)).execute(conn)
  }

  /// All comments of a post, oldest first.
  pub fn read_for_post(
    conn: &mut SqliteConnection,
    for_post_id: PostId,
  ) -> Result<Vec<Self>, Error> {
    comment::table
      .filter(comment::post_id.eq(for_post_id))
      .order_by((comment::published.asc(), comment::id.asc()))
      .load::<Self>(conn)
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    source::{
      comment::{Comment, CommentInsertForm},
      community::{Community, CommunityInsertForm},
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
    },
    traits::Crud,
    utils::{build_db_pool_for_tests, get_conn},
  };
  use devshare_utils::error::DevshareResult;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_replies_are_removed_with_their_parent() -> DevshareResult<()> {
    let pool = build_db_pool_for_tests()?;
    let conn = &mut get_conn(&pool)?;

    let person = Person::create(conn, &PersonInsertForm {
      name: "terry".into(),
      ..Default::default()
    })?;
    let community = Community::create(conn, &CommunityInsertForm {
      name: "test_community_2".into(),
      description: String::new(),
      owner_id: person.id,
    })?;
    let post = Post::create(conn, &PostInsertForm {
      title: "A test post".into(),
      content: String::new(),
      image_url: None,
      creator_id: person.id,
      community_id: community.id,
    })?;

    let parent = Comment::create(conn, &CommentInsertForm {
      creator_id: person.id,
      post_id: post.id,
      parent_id: None,
      content: "A test comment".into(),
    })?;
    let child = Comment::create(conn, &CommentInsertForm {
      creator_id: person.id,
      post_id: post.id,
      parent_id: Some(parent.id),
      content: "A child comment".into(),
    })?;
    assert_eq!(Some(parent.id), child.parent_id);

    let comments = Comment::read_for_post(conn, post.id)?;
    assert_eq!(vec![parent.clone(), child], comments);

    Comment::delete(conn, parent.id)?;
    assert!(Comment::read_for_post(conn, post.id)?.is_empty());
    Ok(())
  }
}
