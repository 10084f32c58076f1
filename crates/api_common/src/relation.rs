use devshare_db_schema::relation::{Relation, RelationTarget, ToggleState};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Flip any relation between you and a person, post or community.
pub struct ToggleRelation {
  pub relation: Relation,
  pub target: RelationTarget,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// The state of a relation after a change.
pub struct RelationResponse {
  pub relation: Relation,
  pub state: ToggleState,
  /// The new score of the post, for votes only.
  pub score: Option<i64>,
}
