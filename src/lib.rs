//! The devshare server crate
#![deny(missing_docs)]

/// The API routes
pub mod api_routes;
/// Resolves the bearer token of a request into the logged in user
pub mod session_middleware;

use crate::session_middleware::SessionMiddleware;
use actix_cors::Cors;
use actix_web::{web::Data, App, HttpServer};
use clap::Parser;
use devshare_api_common::context::DevshareContext;
use devshare_db_schema::utils::build_db_pool;
use devshare_utils::{
  error::DevshareResult,
  settings::{structs::Settings, SETTINGS},
  VERSION,
};
use tracing_actix_web::TracingLogger;

/// Command line arguments of the server
#[derive(Parser, Debug)]
#[command(
  version,
  about = "A community driven content sharing backend",
  long_about = None
)]
pub struct CmdArgs {
  /// Run the pending database migrations, then exit without serving requests.
  #[arg(long, default_value_t = false)]
  migrate_only: bool,
}

/// Sets up the database and serves the API until the process is stopped.
pub async fn start_devshare_server(args: CmdArgs) -> DevshareResult<()> {
  let settings: &'static Settings = &SETTINGS;

  // Migrations run while the pool is built
  let pool = build_db_pool()?;
  if args.migrate_only {
    tracing::info!("Database migrations done, exiting");
    return Ok(());
  }

  let context = DevshareContext::create(pool);

  tracing::info!(
    "Starting devshare {VERSION} on http://{}:{}",
    settings.bind,
    settings.port
  );
  HttpServer::new(move || {
    App::new()
      .wrap(cors_config(settings))
      .wrap(TracingLogger::default())
      .wrap(SessionMiddleware::new(context.clone()))
      .app_data(Data::new(context.clone()))
      .configure(api_routes::config)
  })
  .bind((settings.bind, settings.port))?
  .run()
  .await?;

  Ok(())
}

fn cors_config(settings: &Settings) -> Cors {
  // A default setting for either wildcard, or None
  let cors_default = Cors::default()
    .allow_any_origin()
    .allow_any_method()
    .allow_any_header()
    .expose_any_header()
    .max_age(3600);

  match (settings.cors_origin(), cfg!(debug_assertions)) {
    (Some(origin), false) if origin != "*" => Cors::default()
      .allowed_origin(&origin)
      .allow_any_method()
      .allow_any_header()
      .expose_any_header()
      .max_age(3600),
    _ => cors_default,
  }
}
