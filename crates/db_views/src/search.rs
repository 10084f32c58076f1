use crate::structs::{CommunitySuggestion, PersonSuggestion, PostSuggestion, SearchSuggestions};
use devshare_db_schema::{
  newtypes::{CommunityId, PersonId, PostId},
  schema::{community, person, post},
  utils::contains_pattern,
};
use devshare_utils::{error::DevshareResult, SUGGESTION_LIMIT};
use diesel::{EscapeExpressionMethods, ExpressionMethods, QueryDsl, RunQueryDsl, SqliteConnection, TextExpressionMethods};

/// Queries shorter than this get no suggestions.
const MIN_QUERY_LENGTH: usize = 2;

impl SearchSuggestions {
  /// Case-insensitive substring matches on post titles, community names and person names. The
  /// query is used as given, surrounding whitespace included.
  pub fn read(conn: &mut SqliteConnection, q: &str) -> DevshareResult<Self> {
    if q.chars().count() < MIN_QUERY_LENGTH {
      return Ok(Self::default());
    }
    let pattern = contains_pattern(q);

    let posts = post::table
      .inner_join(community::table)
      .filter(post::title.like(&pattern).escape('\\'))
      .order_by(post::id.asc())
      .select((post::id, post::title, community::name))
      .limit(SUGGESTION_LIMIT)
      .load::<(PostId, String, String)>(conn)?
      .into_iter()
      .map(|(id, title, community_name)| PostSuggestion {
        id,
        title,
        community_name,
      })
      .collect();

    let communities = community::table
      .filter(community::name.like(&pattern).escape('\\'))
      .order_by(community::id.asc())
      .select((community::id, community::name))
      .limit(SUGGESTION_LIMIT)
      .load::<(CommunityId, String)>(conn)?
      .into_iter()
      .map(|(id, name)| CommunitySuggestion { id, name })
      .collect();

    let users = person::table
      .filter(person::name.like(&pattern).escape('\\'))
      .order_by(person::id.asc())
      .select((person::id, person::name, person::avatar))
      .limit(SUGGESTION_LIMIT)
      .load::<(PersonId, String, Option<String>)>(conn)?
      .into_iter()
      .map(|(id, name, avatar)| PersonSuggestion { id, name, avatar })
      .collect();

    Ok(Self {
      posts,
      communities,
      users,
    })
  }
}
