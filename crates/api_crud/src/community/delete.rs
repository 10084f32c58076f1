use actix_web::web::{Data, Json};
use devshare_api_common::{
  community::{DeleteCommunity, DeleteCommunityResponse},
  context::DevshareContext,
  utils::{blocking, is_admin},
};
use devshare_db_schema::source::community::Community;
use devshare_db_views::structs::LocalUserView;
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

/// Removes the community together with its posts, comments and every relation to it.
#[tracing::instrument(skip(context))]
pub async fn delete_community(
  data: Json<DeleteCommunity>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<DeleteCommunityResponse>> {
  is_admin(&local_user_view)?;

  let community_id = data.community_id;
  let deleted = blocking(context.pool(), move |conn| {
    Community::delete(conn, community_id)
  })
  .await?
  .with_devshare_type(DevshareErrorType::CouldntUpdateCommunity)?;
  if deleted == 0 {
    Err(DevshareErrorType::CouldntFindCommunity)?
  }
  tracing::info!(
    "{} deleted community {community_id}",
    local_user_view.person.name
  );

  Ok(Json(DeleteCommunityResponse {
    community_id,
    deleted: true,
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    community::{create::create_community, update::edit_community},
    test_data,
  };
  use devshare_api_common::community::{CreateCommunity, EditCommunity};
  use devshare_db_schema::{
    source::post::{Post, PostInsertForm},
    traits::Crud,
  };
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_edit_and_delete_permissions() -> DevshareResult<()> {
    let context = test_data::context()?;
    let owner = test_data::user(&context, "owner", false).await?;
    let stranger = test_data::user(&context, "stranger", false).await?;
    let admin = test_data::user(&context, "admin", true).await?;

    let created = create_community(
      Json(CreateCommunity {
        name: "doomed".into(),
        description: Some("before".into()),
      }),
      context.clone(),
      owner.clone(),
    )
    .await?;
    let community_id = created.community_view.community.id;
    let owner_id = owner.person.id;
    let post = blocking(context.pool(), move |conn| {
      Post::create(conn, &PostInsertForm {
        title: "inside".into(),
        content: String::new(),
        image_url: None,
        creator_id: owner_id,
        community_id,
      })
    })
    .await??;

    let edit = |description: &str| {
      Json(EditCommunity {
        community_id,
        description: description.into(),
      })
    };
    let not_owner = edit_community(edit("hijacked"), context.clone(), stranger)
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::NotCommunityOwner), not_owner);
    let edited = edit_community(edit("after"), context.clone(), owner.clone()).await?;
    assert_eq!("after", edited.community_view.community.description);

    let delete = || Json(DeleteCommunity { community_id });
    let not_admin = delete_community(delete(), context.clone(), owner)
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::NotAnAdmin), not_admin);

    let res = delete_community(delete(), context.clone(), admin.clone()).await?;
    assert!(res.deleted);
    let post_id = post.id;
    let post_gone = blocking(context.pool(), move |conn| Post::read(conn, post_id)).await?;
    assert!(post_gone.is_err());

    let again = delete_community(delete(), context, admin)
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::CouldntFindCommunity), again);
    Ok(())
  }
}
