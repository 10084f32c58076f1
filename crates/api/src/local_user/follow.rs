use crate::change_relation;
use actix_web::web::{Data, Json};
use devshare_api_common::{
  context::DevshareContext,
  person::FollowPerson,
  relation::RelationResponse,
};
use devshare_db_schema::relation::{Relation, RelationTarget};
use devshare_db_views::structs::LocalUserView;
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn follow_person(
  data: Json<FollowPerson>,
  context: Data<DevshareContext>,
  local_user_view: LocalUserView,
) -> DevshareResult<Json<RelationResponse>> {
  let target = RelationTarget::Person(data.person_id);
  let res = change_relation(
    &context,
    local_user_view.person.id,
    target,
    Relation::Follow,
    Some(data.follow),
  )
  .await?;
  Ok(Json(res))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_data;
  use devshare_api_common::utils::blocking;
  use devshare_db_schema::relation::ToggleState;
  use devshare_db_views::structs::FollowView;
  use devshare_utils::error::DevshareErrorType;
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_follow_and_unfollow() -> DevshareResult<()> {
    let context = test_data::context()?;
    let fan = test_data::user(&context, "fan").await?;
    let star = test_data::user(&context, "star").await?;
    let star_id = star.person.id;

    let followed = follow_person(
      Json(FollowPerson {
        person_id: star_id,
        follow: true,
      }),
      context.clone(),
      fan.clone(),
    )
    .await?;
    assert_eq!(ToggleState::On, followed.state);

    let followers = blocking(context.pool(), move |conn| {
      FollowView::followers(conn, star_id, None, None)
    })
    .await??;
    assert_eq!(
      vec![fan.person.clone()],
      followers.into_iter().map(|f| f.person).collect::<Vec<_>>()
    );

    let unfollowed = follow_person(
      Json(FollowPerson {
        person_id: star_id,
        follow: false,
      }),
      context.clone(),
      fan,
    )
    .await?;
    assert_eq!(ToggleState::Off, unfollowed.state);

    let myself = follow_person(
      Json(FollowPerson {
        person_id: star_id,
        follow: true,
      }),
      context.clone(),
      star,
    )
    .await
    .err()
    .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::CantFollowYourself), myself);

    let followers = blocking(context.pool(), move |conn| {
      FollowView::followers(conn, star_id, None, None)
    })
    .await??;
    assert!(followers.is_empty());
    Ok(())
  }
}
