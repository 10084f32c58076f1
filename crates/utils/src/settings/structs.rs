use serde::{Deserialize, Serialize};
use std::{
  env,
  net::{IpAddr, Ipv4Addr},
};

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault)]
#[serde(default)]
pub struct Settings {
  /// settings related to the sqlite database
  #[default(Default::default())]
  pub database: DatabaseConfig,
  /// the domain name of your instance, used as token issuer
  #[default("localhost")]
  pub hostname: String,
  /// Address where devshare should listen for incoming requests
  #[default(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)))]
  pub bind: IpAddr,
  /// Port where devshare should listen for incoming requests
  #[default(8536)]
  pub port: u16,
  /// Secret used to sign and verify login tokens. Change it in production.
  #[default("changeme")]
  pub jwt_secret: String,
  /// Sets a response Access-Control-Allow-Origin CORS header
  #[default(None)]
  cors_origin: Option<String>,
}

impl Settings {
  pub fn cors_origin(&self) -> Option<String> {
    env::var("DEVSHARE_CORS_ORIGIN")
      .ok()
      .or(self.cors_origin.clone())
  }
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault)]
#[serde(default)]
pub struct DatabaseConfig {
  /// Path of the sqlite database file
  #[default("devshare.sqlite")]
  pub url: String,
  /// Maximum number of active sql connections
  #[default(5)]
  pub pool_size: usize,
}
