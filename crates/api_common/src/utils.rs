use devshare_db_schema::{
  newtypes::PersonId,
  source::{comment::Comment, community::Community, post::Post},
  utils::{get_conn, DbPool},
};
use devshare_db_views::structs::LocalUserView;
use devshare_utils::error::{DevshareError, DevshareErrorType, DevshareResult};
use diesel::SqliteConnection;

/// Runs `f` with a pooled connection on the actix blocking thread pool.
pub async fn blocking<F, T>(pool: &DbPool, f: F) -> DevshareResult<T>
where
  F: FnOnce(&mut SqliteConnection) -> T + Send + 'static,
  T: Send + 'static,
{
  let pool = pool.clone();
  let blocking_span = tracing::info_span!("blocking operation");
  let res = actix_web::web::block(move || {
    let entered = blocking_span.enter();
    let mut conn = get_conn(&pool)?;
    let res = (f)(&mut conn);
    drop(entered);
    Ok(res) as Result<T, DevshareError>
  })
  .await?;

  res
}

pub fn is_admin(local_user_view: &LocalUserView) -> DevshareResult<()> {
  if !local_user_view.person.admin {
    Err(DevshareErrorType::NotAnAdmin)?
  }
  Ok(())
}

pub fn check_community_owner(person_id: PersonId, community: &Community) -> DevshareResult<()> {
  if community.owner_id != person_id {
    Err(DevshareErrorType::NotCommunityOwner)?
  }
  Ok(())
}

pub fn check_post_creator(person_id: PersonId, post: &Post) -> DevshareResult<()> {
  if !Post::is_post_creator(person_id, post.creator_id) {
    Err(DevshareErrorType::NoPostEditAllowed)?
  }
  Ok(())
}

pub fn check_comment_creator(person_id: PersonId, comment: &Comment) -> DevshareResult<()> {
  if comment.creator_id != person_id {
    Err(DevshareErrorType::NoCommentEditAllowed)?
  }
  Ok(())
}
