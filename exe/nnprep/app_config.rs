use std::{error::Error, path::Path};

use nnprep::{config::DEFAULT_SOURCE, BuildConfig};
use serde::Deserialize;

/// Run settings. Also defines the config file format (every field can be omitted).
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
  /// URL or path of the raw comma-separated data
  pub source: Option<String>,
  /// Stem of the output files
  pub name: Option<String>,
  pub out_dir: Option<String>,
  pub hidden_nodes: Option<usize>,
  pub output_nodes: Option<usize>,
  pub train_fraction: Option<f64>,
  pub delimiter: Option<char>,
  pub feature_count: Option<usize>,
  pub seed: Option<u64>,
}

impl AppConfig {
  pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
    let content = std::fs::read_to_string(path)
      .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
    Ok(serde_yaml::from_str(&content)?)
  }

  // merge configs where the second overwrites the first
  pub fn merge(self, other: Self) -> Self {
    Self {
      source: other.source.or(self.source),
      name: other.name.or(self.name),
      out_dir: other.out_dir.or(self.out_dir),
      hidden_nodes: other.hidden_nodes.or(self.hidden_nodes),
      output_nodes: other.output_nodes.or(self.output_nodes),
      train_fraction: other.train_fraction.or(self.train_fraction),
      delimiter: other.delimiter.or(self.delimiter),
      feature_count: other.feature_count.or(self.feature_count),
      seed: other.seed.or(self.seed),
    }
  }

  pub fn source(&self) -> &str {
    self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
  }

  pub fn out_dir(&self) -> &Path {
    Path::new(self.out_dir.as_deref().unwrap_or("."))
  }

  pub fn build_config(&self) -> BuildConfig {
    let defaults = BuildConfig::default();
    BuildConfig {
      name: self.name.clone().unwrap_or(defaults.name),
      output_nodes: self.output_nodes.unwrap_or(defaults.output_nodes),
      hidden_nodes: self.hidden_nodes.unwrap_or(defaults.hidden_nodes),
      train_fraction: self.train_fraction.unwrap_or(defaults.train_fraction),
      delimiter: self.delimiter.unwrap_or(defaults.delimiter),
      feature_count: self.feature_count.or(defaults.feature_count),
    }
  }
}
