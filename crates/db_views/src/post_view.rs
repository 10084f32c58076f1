use crate::structs::{PostCounts, PostView};
use devshare_db_schema::{
  newtypes::{PersonId, PostId},
  schema::{
    comment,
    community,
    community_member,
    person,
    post,
    post_like,
    post_saved,
    post_tag,
    tag,
  },
  source::{community::Community, person::Person, post::Post, tag::Tag},
  utils::{contains_pattern, functions::lower, limit_and_offset},
};
use devshare_utils::error::DevshareResult;
use diesel::{
  dsl::{count_star, sql},
  result::Error,
  sql_types::BigInt,
  BoolExpressionMethods,
  EscapeExpressionMethods,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
  TextExpressionMethods,
};
use std::collections::{HashMap, HashSet};

type PostViewTuple = (Post, Person, Community);

/// Sum of the votes of the post in the current row.
const SCORE_SQL: &str =
  "(SELECT COALESCE(SUM(post_like.score), 0) FROM post_like WHERE post_like.post_id = post.id)";

impl PostView {
  pub fn read(
    conn: &mut SqliteConnection,
    post_id: PostId,
    my_person_id: Option<PersonId>,
  ) -> Result<Self, Error> {
    let row = post::table
      .find(post_id)
      .inner_join(person::table)
      .inner_join(community::table)
      .select((post::all_columns, person::all_columns, community::all_columns))
      .first::<PostViewTuple>(conn)?;
    let mut views = Self::from_rows(conn, vec![row], my_person_id)?;
    views.pop().ok_or(Error::NotFound)
  }

  /// Loads tags, counts and the viewer state of all rows with a fixed number of queries.
  fn from_rows(
    conn: &mut SqliteConnection,
    rows: Vec<PostViewTuple>,
    my_person_id: Option<PersonId>,
  ) -> Result<Vec<Self>, Error> {
    let ids: Vec<PostId> = rows.iter().map(|(p, _, _)| p.id).collect();

    let mut tags: HashMap<PostId, Vec<Tag>> = HashMap::new();
    let tag_rows = post_tag::table
      .inner_join(tag::table)
      .filter(post_tag::post_id.eq_any(ids.clone()))
      .order_by(tag::name.asc())
      .select((post_tag::post_id, tag::all_columns))
      .load::<(PostId, Tag)>(conn)?;
    for (post_id, t) in tag_rows {
      tags.entry(post_id).or_default().push(t);
    }

    let mut counts: HashMap<PostId, PostCounts> = HashMap::new();
    let vote_rows = post_like::table
      .filter(post_like::post_id.eq_any(ids.clone()))
      .group_by((post_like::post_id, post_like::score))
      .select((post_like::post_id, post_like::score, count_star()))
      .load::<(PostId, i16, i64)>(conn)?;
    for (post_id, score, count) in vote_rows {
      let c = counts.entry(post_id).or_default();
      if score > 0 {
        c.upvotes += count;
      } else {
        c.downvotes += count;
      }
      c.score = c.upvotes - c.downvotes;
    }
    let comment_rows = comment::table
      .filter(comment::post_id.eq_any(ids.clone()))
      .group_by(comment::post_id)
      .select((comment::post_id, count_star()))
      .load::<(PostId, i64)>(conn)?;
    for (post_id, count) in comment_rows {
      counts.entry(post_id).or_default().comments = count;
    }

    let (saved, my_votes) = match my_person_id {
      Some(person_id) => {
        let saved = post_saved::table
          .filter(post_saved::person_id.eq(person_id))
          .filter(post_saved::post_id.eq_any(ids.clone()))
          .select(post_saved::post_id)
          .load::<PostId>(conn)?
          .into_iter()
          .collect::<HashSet<_>>();
        let my_votes = post_like::table
          .filter(post_like::person_id.eq(person_id))
          .filter(post_like::post_id.eq_any(ids.clone()))
          .select((post_like::post_id, post_like::score))
          .load::<(PostId, i16)>(conn)?
          .into_iter()
          .collect::<HashMap<_, _>>();
        (saved, my_votes)
      }
      None => (HashSet::new(), HashMap::new()),
    };

    Ok(
      rows
        .into_iter()
        .map(|(post, creator, community)| PostView {
          tags: tags.remove(&post.id).unwrap_or_default(),
          counts: counts.get(&post.id).copied().unwrap_or_default(),
          saved: saved.contains(&post.id),
          my_vote: my_votes.get(&post.id).copied(),
          post,
          creator,
          community,
        })
        .collect(),
    )
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostSortType {
  /// Newest first.
  #[default]
  New,
  /// Highest score first, newest first among equal scores.
  Top,
}

#[derive(Debug, Clone, Default)]
pub struct PostQuery {
  /// Case-insensitive exact community name.
  pub community_name: Option<String>,
  /// Case-insensitive exact creator name.
  pub creator_name: Option<String>,
  /// Only posts of communities this person joined.
  pub joined_by: Option<PersonId>,
  /// Only posts this person saved.
  pub saved_by: Option<PersonId>,
  /// Case-insensitive substring of the title, the content or one of the tag names.
  pub search: Option<String>,
  pub sort: PostSortType,
  /// The viewer, for the `saved` and `my_vote` fields.
  pub my_person_id: Option<PersonId>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

impl PostQuery {
  pub fn list(self, conn: &mut SqliteConnection) -> DevshareResult<Vec<PostView>> {
    let (limit, offset) = limit_and_offset(self.page, self.limit)?;

    let mut query = post::table
      .inner_join(person::table)
      .inner_join(community::table)
      .select((post::all_columns, person::all_columns, community::all_columns))
      .into_boxed();

    if let Some(community_name) = self.community_name {
      query = query.filter(lower(community::name).eq(community_name.to_lowercase()));
    }
    if let Some(creator_name) = self.creator_name {
      query = query.filter(lower(person::name).eq(creator_name.to_lowercase()));
    }
    if let Some(person_id) = self.joined_by {
      query = query.filter(
        post::community_id.eq_any(
          community_member::table
            .filter(community_member::person_id.eq(person_id))
            .select(community_member::community_id),
        ),
      );
    }
    if let Some(person_id) = self.saved_by {
      query = query.filter(
        post::id.eq_any(
          post_saved::table
            .filter(post_saved::person_id.eq(person_id))
            .select(post_saved::post_id),
        ),
      );
    }
    if let Some(search) = self.search {
      let pattern = contains_pattern(&search);
      query = query.filter(
        post::title
          .like(pattern.clone())
          .escape('\\')
          .or(post::content.like(pattern.clone()).escape('\\'))
          .or(
            post::id.eq_any(
              post_tag::table
                .inner_join(tag::table)
                .filter(tag::name.like(pattern).escape('\\'))
                .select(post_tag::post_id),
            ),
          ),
      );
    }

    query = match self.sort {
      PostSortType::New => query
        .then_order_by(post::published.desc())
        .then_order_by(post::id.desc()),
      PostSortType::Top => query
        .then_order_by(sql::<BigInt>(SCORE_SQL).desc())
        .then_order_by(post::published.desc())
        .then_order_by(post::id.desc()),
    };

    let rows = query
      .limit(limit)
      .offset(offset)
      .load::<PostViewTuple>(conn)?;
    Ok(PostView::from_rows(conn, rows, self.my_person_id)?)
  }
}

/// The front page. A logged in person sees the newest posts of the communities they joined, and
/// nothing at all before joining one. Anonymous visitors get the best scored posts.
pub fn home_feed(
  conn: &mut SqliteConnection,
  my_person_id: Option<PersonId>,
  page: Option<i64>,
  limit: Option<i64>,
) -> DevshareResult<Vec<PostView>> {
  let query = match my_person_id {
    Some(person_id) => PostQuery {
      joined_by: Some(person_id),
      sort: PostSortType::New,
      my_person_id,
      page,
      limit,
      ..Default::default()
    },
    None => PostQuery {
      sort: PostSortType::Top,
      page,
      limit,
      ..Default::default()
    },
  };
  query.list(conn)
}
