//! Binary entrypoint: read one JSON WorthRequest from stdin, write one WorthResult to stdout.
//!
//! On failure an ErrorOutput is written to stdout instead and the process exits 1.
//! Logs go to stderr so stdout stays machine-readable.

use hustle_engine::types::ErrorOutput;
use hustle_engine::{run, EngineError, WorthRequest};
use std::io::{self, Read, Write};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hustle_engine=warn")))
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  if let Err(e) = run_binary() {
    error!(error = %e, "hustle-engine failed");
    let mut err = ErrorOutput::new(e.to_string());
    if let Some(field) = e.field() {
      err = err.with_field(field);
    }
    let mut out = io::stdout().lock();
    let _ = serde_json::to_writer(&mut out, &err);
    let _ = writeln!(out);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), EngineError> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let request: WorthRequest = serde_json::from_str(&raw)?;

  let result = run(&request, chrono::Utc::now(), &mut rand::rng())?;
  info!(login = %result.username, score = result.hustle_score, "evaluated");

  let json = serde_json::to_vec(&result)?;
  io::stdout().write_all(&json)?;
  Ok(())
}
