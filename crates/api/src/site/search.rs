use actix_web::web::{Data, Json, Query};
use devshare_api_common::{context::DevshareContext, site::SearchSuggestionsQuery, utils::blocking};
use devshare_db_views::structs::SearchSuggestions;
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn search_suggestions(
  data: Query<SearchSuggestionsQuery>,
  context: Data<DevshareContext>,
) -> DevshareResult<Json<SearchSuggestions>> {
  let q = data.q.clone().unwrap_or_default();
  let suggestions = blocking(context.pool(), move |conn| {
    SearchSuggestions::read(conn, &q)
  })
  .await??;

  Ok(Json(suggestions))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_data;
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_short_queries_are_empty() -> DevshareResult<()> {
    let context = test_data::context()?;
    let owner = test_data::user(&context, "fred").await?;
    test_data::community_with_post(&context, &owner, "fred_fans").await?;

    for q in [None, Some("f".to_string())] {
      let res = search_suggestions(Query(SearchSuggestionsQuery { q }), context.clone()).await?;
      assert_eq!(SearchSuggestions::default(), res.0);
    }

    let res = search_suggestions(
      Query(SearchSuggestionsQuery {
        q: Some("FRED".into()),
      }),
      context,
    )
    .await?;
    assert_eq!(1, res.communities.len());
    assert_eq!(1, res.users.len());
    assert!(res.posts.is_empty());
    Ok(())
  }
}
