use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  community::{ListCommunities, ListCommunitiesResponse},
  context::DevshareContext,
  utils::blocking,
};
use devshare_db_views::{community_view::CommunityQuery, structs::LocalUserView};
use devshare_utils::error::{DevshareErrorType, DevshareResult};

#[tracing::instrument(skip(context))]
pub async fn list_communities(
  data: Query<ListCommunities>,
  context: Data<DevshareContext>,
  local_user_view: Option<LocalUserView>,
) -> DevshareResult<Json<ListCommunitiesResponse>> {
  let data = data.into_inner();
  let my_person_id = local_user_view.map(|l| l.person.id);
  let joined_by = if data.joined.unwrap_or_default() {
    Some(my_person_id.ok_or(DevshareErrorType::NotLoggedIn)?)
  } else {
    None
  };

  let query = CommunityQuery {
    joined_by,
    search: data.search,
    my_person_id,
    page: data.page,
    limit: data.limit,
  };
  let communities = blocking(context.pool(), move |conn| query.list(conn)).await??;
  Ok(Json(ListCommunitiesResponse { communities }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{community::create::create_community, test_data};
  use devshare_api_common::community::CreateCommunity;
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_joined_requires_login() -> DevshareResult<()> {
    let context = test_data::context()?;
    let owner = test_data::user(&context, "owner", false).await?;
    for name in ["beta", "alpha"] {
      create_community(
        Json(CreateCommunity {
          name: name.into(),
          description: None,
        }),
        context.clone(),
        owner.clone(),
      )
      .await?;
    }
    let other = test_data::user(&context, "other", false).await?;

    let joined = |joined| {
      Query(ListCommunities {
        joined: Some(joined),
        ..Default::default()
      })
    };
    let all = list_communities(joined(false), context.clone(), None).await?;
    assert_eq!(
      vec!["alpha", "beta"],
      all
        .communities
        .iter()
        .map(|c| c.community.name.as_str())
        .collect::<Vec<_>>()
    );
    let owned = list_communities(joined(true), context.clone(), Some(owner)).await?;
    assert_eq!(2, owned.communities.len());
    let none = list_communities(joined(true), context.clone(), Some(other)).await?;
    assert!(none.communities.is_empty());

    let searched = list_communities(
      Query(ListCommunities {
        search: Some("ALP".into()),
        ..Default::default()
      }),
      context.clone(),
      None,
    )
    .await?;
    assert_eq!(1, searched.communities.len());
    assert_eq!("alpha", searched.communities[0].community.name);

    let anonymous = list_communities(joined(true), context, None)
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::NotLoggedIn), anonymous);
    Ok(())
  }
}
