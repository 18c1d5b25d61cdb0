//! Worth Service
//!
//! HTTP front for the hustle engine. Callers post an already-fetched profile
//! snapshot; results are cached per login for lookups.

pub mod cache;
pub mod config;
pub mod error;
mod handlers;
pub mod state;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use config::ServiceConfig;
pub use error::AppError;
pub use handlers::{cache_key, health, lookup, score};
pub use state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/worth", post(score))
    .route("/worth/:username", get(lookup))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
