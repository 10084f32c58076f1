use devshare_api_common::{context::DevshareContext, relation::RelationResponse, utils::blocking};
use devshare_db_schema::{
  newtypes::PersonId,
  relation::{set, toggle, Relation, RelationTarget},
  source::post::PostLike,
};
use devshare_utils::error::{DevshareErrorExt2, DevshareErrorType, DevshareResult};

pub mod community;
pub mod local_user;
pub mod post;
pub mod relation;
pub mod site;

/// Flips the relation, or forces it into `on` when given, and reports the new state. Votes also
/// report the new score of the post.
pub(crate) async fn change_relation(
  context: &DevshareContext,
  subject: PersonId,
  target: RelationTarget,
  relation: Relation,
  on: Option<bool>,
) -> DevshareResult<RelationResponse> {
  let (state, score) = relation_error(
    blocking(context.pool(), move |conn| {
      let state = match on {
        Some(on) => set(conn, subject, target, relation, on),
        None => toggle(conn, subject, target, relation),
      }?;
      let score = match target {
        RelationTarget::Post(post_id) if relation.is_vote() => {
          Some(PostLike::score(conn, post_id)?)
        }
        _ => None,
      };
      Ok((state, score)) as DevshareResult<_>
    })
    .await?,
  )?;

  tracing::debug!("{relation} towards {target:?} is now {state}");
  Ok(RelationResponse {
    relation,
    state,
    score,
  })
}

/// Keeps the error of a failed relation change when it carries a reason, and hides database
/// failures behind a generic one.
fn relation_error<T>(res: DevshareResult<T>) -> DevshareResult<T> {
  match res {
    Err(e) if matches!(e.error_type, DevshareErrorType::Unknown(_)) => {
      Err(e).with_devshare_type(DevshareErrorType::CouldntUpdateRelation)
    }
    res => res,
  }
}
