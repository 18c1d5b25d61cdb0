//! Binary entrypoint for the worth service.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use worth_service::{build_router, AppState, ServiceConfig, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let config = ServiceConfig::from_env()?;

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      EnvFilter::new(format!(
        "worth_service={level},hustle_engine={level},tower_http={level}",
        level = config.rust_log
      ))
    }))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let state = Arc::new(AppState::new(&config, Arc::new(SystemClock)));
  let app = build_router(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
  info!(
    "worth-service v{} listening on http://{} (cache ttl {}s, capacity {})",
    env!("CARGO_PKG_VERSION"),
    addr,
    config.cache_ttl_secs,
    config.cache_capacity
  );

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
