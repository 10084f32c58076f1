use crate::{
  newtypes::PostId,
  schema::{post_tag, tag},
  source::tag::{PostTag, PostTagForm, Tag, TagInsertForm},
};
use diesel::{
  dsl::insert_into,
  result::Error,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

impl Tag {
  /// Returns the tag with that name, creating it first when it doesn't exist yet.
  pub fn get_or_create(conn: &mut SqliteConnection, tag_name: &str) -> Result<Self, Error> {
    insert_into(tag::table)
      .values(TagInsertForm {
        name: tag_name.to_string(),
      })
      .on_conflict(tag::name)
      .do_nothing()
      .execute(conn)?;
    tag::table.filter(tag::name.eq(tag_name)).first::<Self>(conn)
  }

  pub fn list(conn: &mut SqliteConnection) -> Result<Vec<Self>, Error> {
    tag::table.order_by(tag::name.asc()).load::<Self>(conn)
  }
}

impl PostTag {
  /// Links the post with every named tag.
  pub fn attach(
    conn: &mut SqliteConnection,
    post_id: PostId,
    tag_names: &[String],
  ) -> Result<Vec<Tag>, Error> {
    let mut tags = Vec::with_capacity(tag_names.len());
    for tag_name in tag_names {
      let tag = Tag::get_or_create(conn, tag_name)?;
      insert_into(post_tag::table)
        .values(PostTagForm {
          post_id,
          tag_id: tag.id,
        })
        .on_conflict((post_tag::post_id, post_tag::tag_id))
        .do_nothing()
        .execute(conn)?;
      tags.push(tag);
    }
    Ok(tags)
  }
}
