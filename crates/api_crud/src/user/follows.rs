use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  context::DevshareContext,
  person::{ListFollows, ListFollowsResponse},
  utils::blocking,
};
use devshare_db_schema::{newtypes::PersonId, source::person::Person};
use devshare_db_views::structs::FollowView;
use devshare_utils::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};

async fn person_id_from_name(context: &DevshareContext, name: &str) -> DevshareResult<PersonId> {
  let name = name.to_string();
  let person = blocking(context.pool(), move |conn| Person::read_from_name(conn, &name))
    .await?
    .not_found_as(DevshareErrorType::CouldntFindPerson)?;
  Ok(person.id)
}

/// People who follow the given person, most recent first.
#[tracing::instrument(skip(context))]
pub async fn list_followers(
  data: Query<ListFollows>,
  context: Data<DevshareContext>,
) -> DevshareResult<Json<ListFollowsResponse>> {
  let person_id = person_id_from_name(&context, &data.name).await?;
  let (page, limit) = (data.page, data.limit);
  let follows = blocking(context.pool(), move |conn| {
    FollowView::followers(conn, person_id, page, limit)
  })
  .await??;
  Ok(Json(ListFollowsResponse { follows }))
}

/// People the given person follows, most recent first.
#[tracing::instrument(skip(context))]
pub async fn list_following(
  data: Query<ListFollows>,
  context: Data<DevshareContext>,
) -> DevshareResult<Json<ListFollowsResponse>> {
  let person_id = person_id_from_name(&context, &data.name).await?;
  let (page, limit) = (data.page, data.limit);
  let follows = blocking(context.pool(), move |conn| {
    FollowView::following(conn, person_id, page, limit)
  })
  .await??;
  Ok(Json(ListFollowsResponse { follows }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{test_data, user::read::get_person};
  use devshare_api_common::person::GetPerson;
  use devshare_db_schema::relation::{toggle, Relation, RelationTarget};
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_follow_lists() -> DevshareResult<()> {
    let context = test_data::context()?;
    let fan = test_data::user(&context, "fan", false).await?;
    let star = test_data::user(&context, "star", false).await?;
    let (fan_id, star_id) = (fan.person.id, star.person.id);
    blocking(context.pool(), move |conn| {
      toggle(conn, fan_id, RelationTarget::Person(star_id), Relation::Follow)
    })
    .await??;

    let query = |name: &str| {
      Query(ListFollows {
        name: name.into(),
        ..Default::default()
      })
    };
    let followers = list_followers(query("star"), context.clone()).await?;
    assert_eq!(1, followers.follows.len());
    assert_eq!(fan.person, followers.follows[0].person);
    assert!(list_following(query("star"), context.clone()).await?.follows.is_empty());
    assert_eq!(1, list_following(query("fan"), context.clone()).await?.follows.len());

    let missing = list_followers(query("ghost"), context.clone())
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::CouldntFindPerson), missing);

    let star_view = get_person(
      Query(GetPerson {
        name: "star".into(),
      }),
      context,
      Some(fan),
    )
    .await?;
    assert!(star_view.person_view.is_following);
    assert_eq!(1, star_view.person_view.counts.followers);
    Ok(())
  }
}
