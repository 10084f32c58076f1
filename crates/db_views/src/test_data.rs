use devshare_db_schema::{
  source::{
    community::{Community, CommunityInsertForm},
    person::{Person, PersonInsertForm},
    post::{Post, PostInsertForm},
  },
  traits::Crud,
};
use devshare_utils::error::DevshareResult;
use diesel::SqliteConnection;

pub fn person(conn: &mut SqliteConnection, name: &str) -> DevshareResult<Person> {
  Ok(Person::create(conn, &PersonInsertForm {
    name: name.into(),
    ..Default::default()
  })?)
}

pub fn community(
  conn: &mut SqliteConnection,
  name: &str,
  owner: &Person,
) -> DevshareResult<Community> {
  Ok(Community::create_with_owner(conn, &CommunityInsertForm {
    name: name.into(),
    description: format!("all about {name}"),
    owner_id: owner.id,
  })?)
}

pub fn post(
  conn: &mut SqliteConnection,
  title: &str,
  creator: &Person,
  community: &Community,
) -> DevshareResult<Post> {
  Ok(Post::create(conn, &PostInsertForm {
    title: title.into(),
    content: String::new(),
    image_url: None,
    creator_id: creator.id,
    community_id: community.id,
  })?)
}
