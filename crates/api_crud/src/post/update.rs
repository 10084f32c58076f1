use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  post::{EditPost, PostResponse},
  utils::{blocking, check_post_creator},
};
use devshare_db_schema::{
  source::post::{Post, PostUpdateForm},
  traits::Crud,
  utils::{diesel_option_overwrite, naive_now},
};
use devshare_db_views::structs::{LocalUserView, PostView};
use devshare_utils::{
  error::{DevshareErrorExt, DevshareErrorType, DevshareResult},
  utils::validation::{is_valid_body_field, is_valid_post_title, is_valid_url},
};

/// Tags stay as they were extracted when the post was created.
#[tracing::instrument(skip(context))]
pub async fn edit_post(
  data: Json<EditPost>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<PostResponse>> {
  let data = data.into_inner();
  if let Some(title) = &data.title {
    is_valid_post_title(title)?;
  }
  if let Some(content) = &data.content {
    is_valid_body_field(content, true)?;
  }
  let image_url = diesel_option_overwrite(data.image_url);
  if let Some(Some(url)) = &image_url {
    is_valid_url(url)?;
  }

  let post_id = data.post_id;
  let orig_post = blocking(context.pool(), move |conn| Post::read(conn, post_id))
    .await?
    .not_found_as(DevshareErrorType::CouldntFindPost)?;
  let person_id = local_user_view.person.id;
  check_post_creator(person_id, &orig_post)?;

  let form = PostUpdateForm {
    title: data.title.map(|t| t.trim().to_string()),
    content: data.content,
    image_url,
    updated: Some(Some(naive_now())),
  };
  blocking(context.pool(), move |conn| Post::update(conn, post_id, &form))
    .await?
    .with_devshare_type(DevshareErrorType::CouldntUpdatePost)?;

  let post_view = blocking(context.pool(), move |conn| {
    PostView::read(conn, post_id, Some(person_id))
  })
  .await??;
  Ok(Json(PostResponse { post_view }))
}
