use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  post::{DeletePost, DeletePostResponse},
  utils::{blocking, check_post_creator},
};
use devshare_db_schema::{source::post::Post, traits::Crud};
use devshare_db_views::structs::LocalUserView;
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

/// Comments, votes, saves and tag links of the post go with it.
#[tracing::instrument(skip(context))]
pub async fn delete_post(
  data: Json<DeletePost>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<DeletePostResponse>> {
  let post_id = data.post_id;
  let orig_post = blocking(context.pool(), move |conn| Post::read(conn, post_id))
    .await?
    .not_found_as(DevshareErrorType::CouldntFindPost)?;
  check_post_creator(local_user_view.person.id, &orig_post)?;

  blocking(context.pool(), move |conn| Post::delete(conn, post_id))
    .await?
    .with_devshare_type(DevshareErrorType::CouldntUpdatePost)?;

  Ok(Json(DeletePostResponse {
    post_id,
    deleted: true,
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    community::create::create_community,
    post::{
      create::create_post,
      list::list_posts,
      read::get_post,
      saved::list_saved_posts,
      tags::list_tags,
      update::edit_post,
    },
    test_data,
  };
  use actix_web::web::Query;
  use devshare_api_common::{
    community::CreateCommunity,
    post::{CreatePost, EditPost, GetPost, GetPosts, ListSavedPosts},
  };
  use devshare_db_schema::relation::{toggle, Relation, RelationTarget};
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_post_lifecycle() -> DevshareResult<()> {
    let context = test_data::context()?;
    let author = test_data::user(&context, "Author", false).await?;
    let other = test_data::user(&context, "other", false).await?;
    let community_id = create_community(
      Json(CreateCommunity {
        name: "Python".into(),
        description: None,
      }),
      context.clone(),
      author.clone(),
    )
    .await?
    .community_view
    .community
    .id;

    let post_id = create_post(
      Json(CreatePost {
        title: "Django tips for Python".into(),
        content: "Use the ORM".into(),
        community_id: Some(community_id),
        image_url: None,
      }),
      context.clone(),
      author.clone(),
    )
    .await?
    .post_view
    .post
    .id;

    // Case-insensitive filters
    let listed = list_posts(
      Query(GetPosts {
        community_name: Some("python".into()),
        creator_name: Some("AUTHOR".into()),
        ..Default::default()
      }),
      context.clone(),
      None,
    )
    .await?;
    assert_eq!(1, listed.posts.len());

    let search = |q: &str| {
      Query(GetPosts {
        search: Some(q.into()),
        ..Default::default()
      })
    };
    let by_tag = list_posts(search("DJANGO"), context.clone(), None).await?;
    assert_eq!(1, by_tag.posts.len());
    let by_content = list_posts(search("the orm"), context.clone(), None).await?;
    assert_eq!(1, by_content.posts.len());
    assert!(list_posts(search("flask"), context.clone(), None).await?.posts.is_empty());

    let tags = list_tags(context.clone()).await?;
    assert_eq!(
      vec!["django", "python"],
      tags.tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
    );

    let other_id = other.person.id;
    blocking(context.pool(), move |conn| {
      toggle(conn, other_id, RelationTarget::Post(post_id), Relation::Save)
    })
    .await??;
    let saved = list_saved_posts(
      Query(ListSavedPosts::default()),
      context.clone(),
      other.clone(),
    )
    .await?;
    assert_eq!(1, saved.posts.len());
    assert!(saved.posts[0].saved);

    let edit = |title: &str| {
      Json(EditPost {
        post_id,
        title: Some(title.into()),
        ..Default::default()
      })
    };
    let forbidden = edit_post(edit("Hijacked"), context.clone(), other.clone())
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::NoPostEditAllowed), forbidden);
    let edited = edit_post(edit("Typescript tips"), context.clone(), author.clone()).await?;
    assert_eq!("Typescript tips", edited.post_view.post.title);
    // Tags are not extracted again on edit
    assert_eq!(2, edited.post_view.tags.len());

    let detail = get_post(Query(GetPost { id: post_id }), context.clone(), None).await?;
    assert!(detail.comments.is_empty());

    let delete = || Json(DeletePost { post_id });
    let forbidden = delete_post(delete(), context.clone(), other)
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::NoPostEditAllowed), forbidden);
    delete_post(delete(), context.clone(), author).await?;

    let gone = get_post(Query(GetPost { id: post_id }), context, None)
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::CouldntFindPost), gone);
    Ok(())
  }
}
