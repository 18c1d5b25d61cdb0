//! Shared application state.

use chrono::Duration;
use hustle_engine::WorthResult;
use std::sync::{Arc, Mutex};

use crate::cache::{Clock, TtlCache};
use crate::config::ServiceConfig;

pub struct AppState {
  pub engine: hustle_engine::Config,
  pub clock: Arc<dyn Clock>,
  /// Keyed by lower-cased login.
  pub cache: Mutex<TtlCache<String, WorthResult>>,
}

impl AppState {
  pub fn new(config: &ServiceConfig, clock: Arc<dyn Clock>) -> Self {
    let cache = TtlCache::new(
      Duration::seconds(config.cache_ttl_secs),
      config.cache_capacity,
      clock.clone(),
    );
    Self {
      engine: hustle_engine::Config::default(),
      clock,
      cache: Mutex::new(cache),
    }
  }
}
