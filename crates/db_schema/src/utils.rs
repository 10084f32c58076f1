use chrono::NaiveDateTime;
use devshare_utils::{
  error::{DevshareErrorExt, DevshareErrorType, DevshareResult},
  settings::SETTINGS,
  FETCH_LIMIT_DEFAULT,
  FETCH_LIMIT_MAX,
};
use diesel::{
  connection::SimpleConnection,
  r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection},
  SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::{env, env::VarError};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Sqlite leaves foreign keys (and with them every cascade) disabled unless each connection turns
/// them on.
#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
  fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
    conn
      .batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
      .map_err(diesel::r2d2::Error::QueryError)
  }
}

pub fn get_database_url_from_env() -> Result<String, VarError> {
  env::var("DEVSHARE_DATABASE_URL")
}

pub fn get_database_url() -> String {
  get_database_url_from_env().unwrap_or_else(|_| SETTINGS.get_database_url())
}

pub fn build_db_pool() -> DevshareResult<DbPool> {
  let db_url = get_database_url();
  let manager = ConnectionManager::<SqliteConnection>::new(&db_url);
  let pool = Pool::builder()
    .max_size(u32::try_from(SETTINGS.database.pool_size)?)
    .connection_customizer(Box::new(ConnectionOptions))
    .build(manager)?;

  run_migrations(&pool)?;
  tracing::info!("Database ready at {db_url}");
  Ok(pool)
}

/// Each test gets its own private in-memory database. A single connection keeps every query of a
/// test on that same database.
pub fn build_db_pool_for_tests() -> DevshareResult<DbPool> {
  let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
  let pool = Pool::builder()
    .max_size(1)
    .idle_timeout(None)
    .max_lifetime(None)
    .connection_customizer(Box::new(ConnectionOptions))
    .build(manager)?;

  run_migrations(&pool)?;
  Ok(pool)
}

fn run_migrations(pool: &DbPool) -> DevshareResult<()> {
  let mut conn = pool.get()?;
  conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| anyhow::anyhow!("Couldn't run DB migrations: {e}"))?;
  Ok(())
}

pub fn get_conn(pool: &DbPool) -> DevshareResult<DbConn> {
  pool
    .get()
    .with_devshare_type(DevshareErrorType::DatabaseError)
}

pub fn naive_now() -> NaiveDateTime {
  chrono::prelude::Utc::now().naive_utc()
}

/// Builds a `LIKE` pattern which matches `q` anywhere in a column. The characters `%`, `_` and `\`
/// are escaped, so the query must be run with `.escape('\\')`.
pub fn contains_pattern(q: &str) -> String {
  let replaced = q
    .replace('\\', "\\\\")
    .replace('%', "\\%")
    .replace('_', "\\_");
  format!("%{replaced}%")
}

pub fn limit_and_offset(page: Option<i64>, limit: Option<i64>) -> DevshareResult<(i64, i64)> {
  let page = match page {
    Some(page) => {
      if page < 1 {
        Err(DevshareErrorType::InvalidPage)?
      }
      page
    }
    None => 1,
  };
  let limit = match limit {
    Some(limit) => {
      if !(1..=FETCH_LIMIT_MAX).contains(&limit) {
        Err(DevshareErrorType::InvalidLimit)?
      }
      limit
    }
    None => FETCH_LIMIT_DEFAULT,
  };
  let offset = limit
    .checked_mul(page - 1)
    .ok_or(DevshareErrorType::InvalidPage)?;
  Ok((limit, offset))
}

/// Takes an API text input, and converts it to an optional diesel DB update.
pub fn diesel_option_overwrite(opt: Option<String>) -> Option<Option<String>> {
  match opt {
    // An empty string is an erase
    Some(unwrapped) => {
      if !unwrapped.eq("") {
        Some(Some(unwrapped))
      } else {
        Some(None)
      }
    }
    None => None,
  }
}

pub mod functions {
  use diesel::sql_types::Text;

  define_sql_function!(fn lower(x: Text) -> Text);
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_contains_pattern() {
    assert_eq!("%rust%", contains_pattern("rust"));
    assert_eq!("%100\\%\\_done\\\\%", contains_pattern("100%_done\\"));
  }

  #[test]
  fn test_limit_and_offset() -> DevshareResult<()> {
    assert_eq!((10, 0), limit_and_offset(None, None)?);
    assert_eq!((20, 40), limit_and_offset(Some(3), Some(20))?);
    assert_eq!(
      Some(DevshareErrorType::InvalidPage),
      limit_and_offset(Some(0), None).err().map(|e| e.error_type)
    );
    assert_eq!(
      Some(DevshareErrorType::InvalidLimit),
      limit_and_offset(None, Some(FETCH_LIMIT_MAX + 1))
        .err()
        .map(|e| e.error_type)
    );
    assert_eq!(
      Some(DevshareErrorType::InvalidPage),
      limit_and_offset(Some(i64::MAX), Some(FETCH_LIMIT_MAX))
        .err()
        .map(|e| e.error_type)
    );
    Ok(())
  }

  #[test]
  fn test_diesel_option_overwrite() {
    assert_eq!(diesel_option_overwrite(None), None);
    assert_eq!(diesel_option_overwrite(Some(String::new())), Some(None));
    assert_eq!(
      diesel_option_overwrite(Some("test".to_string())),
      Some(Some("test".to_string()))
    );
  }

  #[test]
  fn test_foreign_keys_enabled() -> DevshareResult<()> {
    use diesel::{sql_query, sql_types::Integer, QueryableByName, RunQueryDsl};

    #[derive(QueryableByName)]
    struct ForeignKeys {
      #[diesel(sql_type = Integer)]
      foreign_keys: i32,
    }

    let pool = build_db_pool_for_tests()?;
    let conn = &mut get_conn(&pool)?;
    let res = sql_query("PRAGMA foreign_keys").get_result::<ForeignKeys>(conn)?;
    assert_eq!(1, res.foreign_keys);
    Ok(())
  }
}
