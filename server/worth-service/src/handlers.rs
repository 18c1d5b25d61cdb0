//! HTTP handlers for the worth service.

use axum::{
  extract::{rejection::JsonRejection, Path, State},
  Json,
};
use hustle_engine::{WorthRequest, WorthResult};
use std::sync::{Arc, MutexGuard};
use tracing::{debug, info};

use crate::cache::TtlCache;
use crate::error::AppError;
use crate::state::AppState;

pub async fn health() -> &'static str {
  "ok"
}

/// Cache key for a login: trimmed and lower-cased.
pub fn cache_key(login: &str) -> String {
  login.trim().to_lowercase()
}

fn cache(state: &AppState) -> Result<MutexGuard<'_, TtlCache<String, WorthResult>>, AppError> {
  state
    .cache
    .lock()
    .map_err(|_| AppError::Internal("cache lock poisoned".into()))
}

/// Score a fetched snapshot. Public-only requests are served from cache while fresh.
/// Private-mode results go back to the caller only and are never cached.
pub async fn score(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<WorthRequest>, JsonRejection>,
) -> Result<Json<WorthResult>, AppError> {
  let Json(request) = payload?;
  let key = cache_key(&request.user.login);

  if request.private_stats.is_none() {
    if let Some(hit) = cache(&state)?.get(&key) {
      debug!(login = %key, "cache hit");
      return Ok(Json(hit));
    }
  }

  let now = state.clock.now();
  let result = hustle_engine::run_with_config(&request, now, &state.engine, &mut rand::rng())?;
  info!(
    login = %key,
    score = result.hustle_score,
    private_mode = result.is_private_mode,
    "scored"
  );

  if !result.is_private_mode {
    cache(&state)?.insert(key, result.clone());
  }
  Ok(Json(result))
}

/// Latest cached result for `username`.
pub async fn lookup(
  State(state): State<Arc<AppState>>,
  Path(username): Path<String>,
) -> Result<Json<WorthResult>, AppError> {
  let key = cache_key(&username);
  cache(&state)?
    .get(&key)
    .map(Json)
    .ok_or_else(|| AppError::NotFound(format!("no recent result for {username}")))
}
