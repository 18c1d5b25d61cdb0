//! Hustle Score Engine: deterministic, rule-based scoring of a developer profile.
//!
//! Takes a fetched profile snapshot, its repositories, and optional consented
//! private activity counts; emits a capped hustle score with a breakdown, a
//! Naira valuation, an affordability tier, and a motivational message.
//!
//! No DB, no network. Evaluation time and the random source are explicit inputs.

pub mod config;
pub mod error;
pub mod message;
pub mod naira;
pub mod normalize;
pub mod report;
pub mod score;
pub mod types;

use chrono::{DateTime, Utc};
use rand::Rng;

pub use config::Config;
pub use error::EngineError;
pub use types::{ScoreBreakdown, ScoreResult, WorthRequest, WorthResult};

/// Run the engine on a parsed request with default config (no I/O).
pub fn run<R: Rng + ?Sized>(
  request: &WorthRequest,
  now: DateTime<Utc>,
  rng: &mut R,
) -> Result<WorthResult, EngineError> {
  run_with_config(request, now, &Config::default(), rng)
}

pub fn run_with_config<R: Rng + ?Sized>(
  request: &WorthRequest,
  now: DateTime<Utc>,
  config: &Config,
  rng: &mut R,
) -> Result<WorthResult, EngineError> {
  let snapshot = normalize::normalize(request)?;
  Ok(report::build_worth_result(&snapshot, now, config, rng))
}
