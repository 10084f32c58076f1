use crate::error::DevshareResult;
use deser_hjson::from_str;
use once_cell::sync::Lazy;
use std::{env, fs, io::ErrorKind};
use structs::Settings;

pub mod structs;

static DEFAULT_CONFIG_FILE: &str = "config/config.hjson";

pub static SETTINGS: Lazy<Settings> = Lazy::new(|| match Settings::init() {
  Ok(settings) => settings,
  Err(e) => {
    tracing::error!("Failed to load settings file, using defaults: {e}");
    Settings::default()
  }
});

impl Settings {
  /// Reads config from configuration file.
  ///
  /// Note: The env var `DEVSHARE_DATABASE_URL` is parsed in
  /// `devshare_db_schema/src/utils.rs::get_database_url_from_env()`
  /// Warning: Only call this once.
  pub(crate) fn init() -> DevshareResult<Self> {
    let config = match fs::read_to_string(Self::get_config_location()) {
      Ok(config) => config,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
      Err(e) => return Err(e.into()),
    };
    Self::parse(&config)
  }

  pub(crate) fn parse(config: &str) -> DevshareResult<Self> {
    if config.trim().is_empty() {
      return Ok(Settings::default());
    }
    Ok(from_str::<Settings>(config)?)
  }

  pub fn get_database_url(&self) -> String {
    self.database.url.clone()
  }

  fn get_config_location() -> String {
    env::var("DEVSHARE_CONFIG_LOCATION").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string())
  }
}
