use std::path::PathBuf;

pub mod builder;
pub mod config;
pub mod dataset;
pub mod fetch;
pub mod format;
pub mod rng;
pub mod subcommands;
pub mod utils;
pub mod weights;

pub use builder::{build, ArtifactPaths, Artifacts};
pub use config::BuildConfig;
pub use dataset::{Dataset, Sample, Schema};
pub use fetch::Source;
pub use weights::{Matrix, StandardGaussian, Weights};

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a run. None of these are recovered from; the
/// pipeline stops before any artifact is written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The byte-stream source could not deliver a complete body.
  #[error("failed to fetch {source_desc}: {reason}")]
  Transport { source_desc: String, reason: String },
  /// The raw text does not describe a usable dataset.
  #[error("malformed dataset{}: {reason}", line_suffix(.line))]
  Format { line: Option<usize>, reason: String },
  #[error("invalid configuration: {0}")]
  Config(String),
  #[error("cannot write {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    source: std::io::Error,
  },
}

impl Error {
  pub(crate) fn transport(source_desc: impl ToString, reason: impl ToString) -> Self {
    Error::Transport {
      source_desc: source_desc.to_string(),
      reason: reason.to_string(),
    }
  }

  pub(crate) fn format(line: Option<usize>, reason: impl Into<String>) -> Self {
    Error::Format {
      line,
      reason: reason.into(),
    }
  }
}

fn line_suffix(line: &Option<usize>) -> String {
  match line {
    Some(line) => format!(" at line {}", line),
    None => String::new(),
  }
}
