use devshare_db_schema::utils::DbPool;
use devshare_utils::settings::{structs::Settings, SETTINGS};

#[derive(Clone)]
pub struct DevshareContext {
  pool: DbPool,
}

impl DevshareContext {
  pub fn create(pool: DbPool) -> DevshareContext {
    DevshareContext { pool }
  }
  pub fn pool(&self) -> &DbPool {
    &self.pool
  }
  pub fn settings(&self) -> &'static Settings {
    &SETTINGS
  }
}
