use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  post::{CreatePost, PostResponse},
  utils::blocking,
};
use devshare_db_schema::{
  source::{
    community::Community,
    post::{Post, PostInsertForm},
    tag::PostTag,
  },
  traits::Crud,
};
use devshare_db_views::structs::{LocalUserView, PostView};
use devshare_utils::{
  error::{DevshareError, DevshareErrorExt, DevshareErrorExt2, DevshareErrorType, DevshareResult},
  utils::{
    markdown::first_image_url,
    tags::extract_tags,
    validation::{is_valid_body_field, is_valid_post_title, is_valid_url},
  },
};

#[tracing::instrument(skip(context))]
pub async fn create_post(
  data: Json<CreatePost>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<PostResponse>> {
  let data = data.into_inner();
  let community_id = data.community_id.ok_or(DevshareErrorType::CommunityRequired)?;
  is_valid_post_title(&data.title)?;
  is_valid_body_field(&data.content, true)?;
  let explicit_image = data.image_url.filter(|u| !u.trim().is_empty());
  if let Some(url) = &explicit_image {
    is_valid_url(url)?;
  }

  blocking(context.pool(), move |conn| Community::read(conn, community_id))
    .await?
    .not_found_as(DevshareErrorType::CouldntFindCommunity)?;

  // An image embedded in the content wins over the given one
  let image_url = first_image_url(&data.content).or(explicit_image);
  let tag_names = extract_tags(&data.title, &data.content);
  let person_id = local_user_view.person.id;
  let form = PostInsertForm {
    title: data.title.trim().to_string(),
    content: data.content,
    image_url,
    creator_id: person_id,
    community_id,
  };

  let post = blocking(context.pool(), move |conn| {
    conn.immediate_transaction(|conn| {
      let post = Post::create(conn, &form)?;
      PostTag::attach(conn, post.id, &tag_names)?;
      Ok(post) as Result<Post, DevshareError>
    })
  })
  .await?
  .with_devshare_type(DevshareErrorType::CouldntCreatePost)?;

  let post_id = post.id;
  let post_view = blocking(context.pool(), move |conn| {
    PostView::read(conn, post_id, Some(person_id))
  })
  .await??;
  Ok(Json(PostResponse { post_view }))
}
