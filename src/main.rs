use clap::Parser;
use devshare_server::{start_devshare_server, CmdArgs};
use devshare_utils::error::DevshareResult;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> DevshareResult<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = CmdArgs::parse();

  start_devshare_server(args).await?;
  Ok(())
}
