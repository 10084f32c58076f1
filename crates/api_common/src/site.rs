use devshare_db_views::structs::PostView;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Autocomplete for the search box.
pub struct SearchSuggestionsQuery {
  pub q: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// The front page.
pub struct GetHomeFeed {
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetHomeFeedResponse {
  pub posts: Vec<PostView>,
}
