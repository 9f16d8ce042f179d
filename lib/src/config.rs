use crate::{Error, Result};

/// UCI spambase: 57 features followed by a single 0/1 label.
pub const DEFAULT_SOURCE: &str =
  "http://archive.ics.uci.edu/ml/machine-learning-databases/spambase/spambase.data";

/// Parameters of one dataset build. The defaults describe the spambase run.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
  /// Stem of the emitted `.train`, `.test` and `.init` files.
  pub name: String,
  /// Trailing label columns per record, also the network's output width.
  pub output_nodes: usize,
  pub hidden_nodes: usize,
  /// Share of the shuffled rows that goes to the training file.
  pub train_fraction: f64,
  pub delimiter: char,
  /// Expected feature columns. Inferred from the first record when `None`.
  pub feature_count: Option<usize>,
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      name: "spam".to_string(),
      output_nodes: 1,
      hidden_nodes: 64,
      train_fraction: 0.8,
      delimiter: ',',
      feature_count: None,
    }
  }
}

impl BuildConfig {
  pub fn validate(&self) -> Result<()> {
    if self.name.is_empty() {
      return Err(Error::Config("dataset name must not be empty".to_string()));
    }
    if self.output_nodes == 0 {
      return Err(Error::Config("output_nodes must be > 0".to_string()));
    }
    if self.hidden_nodes == 0 {
      return Err(Error::Config("hidden_nodes must be > 0".to_string()));
    }
    if !(self.train_fraction > 0.0 && self.train_fraction <= 1.0) {
      return Err(Error::Config(format!(
        "train_fraction must be in (0, 1], got {}",
        self.train_fraction
      )));
    }
    if self.feature_count == Some(0) {
      return Err(Error::Config("feature_count must be > 0".to_string()));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_valid() {
    let config = BuildConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.hidden_nodes, 64);
    assert_eq!(config.output_nodes, 1);
  }

  #[test]
  fn rejects_out_of_range_fraction() {
    for fraction in [0.0, -0.5, 1.5, f64::NAN] {
      let config = BuildConfig {
        train_fraction: fraction,
        ..BuildConfig::default()
      };
      assert!(matches!(config.validate(), Err(Error::Config(_))), "{}", fraction);
    }
    let full = BuildConfig {
      train_fraction: 1.0,
      ..BuildConfig::default()
    };
    assert!(full.validate().is_ok());
  }

  #[test]
  fn rejects_zero_sizes() {
    let no_outputs = BuildConfig {
      output_nodes: 0,
      ..BuildConfig::default()
    };
    assert!(no_outputs.validate().is_err());
    let no_hidden = BuildConfig {
      hidden_nodes: 0,
      ..BuildConfig::default()
    };
    assert!(no_hidden.validate().is_err());
    let no_features = BuildConfig {
      feature_count: Some(0),
      ..BuildConfig::default()
    };
    assert!(no_features.validate().is_err());
  }
}
