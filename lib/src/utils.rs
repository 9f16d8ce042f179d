use std::path::Path;

#[cfg(not(debug_assertions))]
use human_panic::setup_panic;
use tracing::subscriber::{DefaultGuard, SetGlobalDefaultError};

#[cfg(debug_assertions)]
extern crate better_panic;

use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

// [NOTE] tracing
//
// Library code logs through `tracing::{debug, info, warn}` and instruments the
// pipeline entry points with `#[tracing::instrument]`. Verbosity comes from
// RUST_LOG and defaults to `info`.

fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn install_logger() -> std::result::Result<(), SetGlobalDefaultError> {
  let subscriber = tracing_subscriber::fmt()
    .compact()
    .with_env_filter(env_filter())
    .finish();
  tracing::subscriber::set_global_default(subscriber)
}

pub fn init_logging() -> std::result::Result<(), SetGlobalDefaultError> {
  // Human Panic. Only enabled when *not* debugging.
  #[cfg(not(debug_assertions))]
  {
    setup_panic!();
  }

  // Better Panic. Only enabled *when* debugging.
  #[cfg(debug_assertions)]
  {
    better_panic::Settings::debug()
      .most_recent_first(false)
      .lineno_suffix(true)
      .verbosity(better_panic::Verbosity::Full)
      .install();
  }

  install_logger()?;

  Ok(())
}

/// Thread-local subscriber writing through the test harness. Keep the guard
/// alive for the duration of the test.
pub fn init_logging_tests() -> DefaultGuard {
  let subscriber = tracing_subscriber::fmt()
    .compact()
    .with_test_writer()
    .with_env_filter(EnvFilter::new("debug"))
    .finish();
  tracing::subscriber::set_default(subscriber)
}

/// Overwrites `path` with `contents`.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
  std::fs::write(path, contents).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
  Ok(())
}
