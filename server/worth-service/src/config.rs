//! Service configuration loaded from environment variables.

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct ServiceConfig {
  pub port: u16,
  /// Seconds a scored result stays servable from cache.
  pub cache_ttl_secs: i64,
  /// Max cached usernames before eviction.
  pub cache_capacity: usize,
  pub rust_log: String,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      port: 5005,
      cache_ttl_secs: 300,
      cache_capacity: 1024,
      rust_log: "info".to_string(),
    }
  }
}

impl ServiceConfig {
  pub fn from_env() -> Result<Self> {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing
    let defaults = Self::default();

    Ok(Self {
      port: env_or("PORT", defaults.port)?,
      cache_ttl_secs: env_or("CACHE_TTL_SECS", defaults.cache_ttl_secs)?,
      cache_capacity: env_or("CACHE_CAPACITY", defaults.cache_capacity)?,
      rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
    })
  }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  match std::env::var(key) {
    Ok(raw) => raw
      .parse::<T>()
      .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
    Err(_) => Ok(default),
  }
}
