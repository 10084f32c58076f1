use crate::{
  newtypes::{PersonId, PostId},
  schema::{post, post_like, post_saved},
  source::post::{
    Post,
    PostInsertForm,
    PostLike,
    PostLikeForm,
    PostSaved,
    PostSavedForm,
    PostUpdateForm,
  },
  traits::{Crud, Likeable, Saveable},
};
use diesel::{
  dsl::insert_into,
  result::Error,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostUpdateForm;
  type IdType = PostId;

  fn create(conn: &mut SqliteConnection, form: &PostInsertForm) -> Result<Self, Error> {
    insert_into(post::table)
      .values(form)
      .get_result::<Self>(conn)
  }

  fn read(conn: &mut SqliteConnection, post_id: PostId) -> Result<Self, Error> {
    post::table.find(post_id).first::<Self>(conn)
  }

  fn update(
    conn: &mut SqliteConnection,
    post_id: PostId,
    form: &PostUpdateForm,
  ) -> Result<Self, Error> {
    diesel::update(post::table.find(post_id))
      .set(form)
      .get_result::<Self>(conn)
  }
}

impl Post {
  /// Foreign keys cascade to comments, votes, saves and tag links.
  pub fn delete(conn: &mut SqliteConnection, post_id: PostId) -> Result<usize, Error> {
    diesel::delete(post::table.find(post_id)).execute(conn)
  }

  pub fn is_post_creator(person_id: PersonId, post_creator_id: PersonId) -> bool {
    person_id == post_creator_id
  }
}

impl Likeable for PostLike {
  type Form = PostLikeForm;

  /// A person has at most one vote per post, so a new vote replaces the old one.
  fn like(conn: &mut SqliteConnection, form: &PostLikeForm) -> Result<Self, Error> {
    insert_into(post_like::table)
      .values(form)
      .on_conflict((post_like::post_id, post_like::person_id))
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
  }

  /// Only removes the vote when it still has the given score.
  fn remove(conn: &mut SqliteConnection, form: &PostLikeForm) -> Result<usize, Error> {
    diesel::delete(
      post_like::table
        .filter(post_like::post_id.eq(form.post_id))
        .filter(post_like::person_id.eq(form.person_id))
        .filter(post_like::score.eq(form.score)),
    )
    .execute(conn)
  }
}

impl PostLike {
  /// Sum of all votes on the post.
  pub fn score(conn: &mut SqliteConnection, post_id: PostId) -> Result<i64, Error> {
    let scores = post_like::table
      .filter(post_like::post_id.eq(post_id))
      .select(post_like::score)
      .load::<i16>(conn)?;
    Ok(scores.into_iter().map(i64::from).sum())
  }
}

impl Saveable for PostSaved {
  type Form = PostSavedForm;

  fn save(conn: &mut SqliteConnection, form: &PostSavedForm) -> Result<Self, Error> {
    insert_into(post_saved::table)
      .values(form)
      .on_conflict((post_saved::post_id, post_saved::person_id))
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
  }

  fn unsave(conn: &mut SqliteConnection, form: &PostSavedForm) -> Result<usize, Error> {
    diesel::delete(
      post_saved::table
        .filter(post_saved::post_id.eq(form.post_id))
        .filter(post_saved::person_id.eq(form.person_id)),
    )
    .execute(conn)
  }
}
