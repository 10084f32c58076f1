use actix_web::web::{Data, Json, Query};
use devshare_api_common::{
  context::DevshareContext,
  person::{ListPersons, ListPersonsResponse},
  utils::blocking,
};
use devshare_db_views::{person_view::PersonQuery, structs::LocalUserView};
use devshare_utils::error::DevshareResult;

#[tracing::instrument(skip(context))]
pub async fn list_persons(
  data: Query<ListPersons>,
  context: Data<DevshareContext>,
  local_user_view: Option<LocalUserView>,
) -> DevshareResult<Json<ListPersonsResponse>> {
  let data = data.into_inner();
  let query = PersonQuery {
    search: data.search,
    my_person_id: local_user_view.map(|l| l.person.id),
    page: data.page,
    limit: data.limit,
  };
  let persons = blocking(context.pool(), move |conn| query.list(conn)).await??;
  Ok(Json(ListPersonsResponse { persons }))
}
