use std::path::{Path, PathBuf};

use crate::{
  builder::weights_path, format::render_weights, rng::rng_from_seed, utils::write_artifact,
  BuildConfig, Error, Result, Weights,
};

/// Writes a fresh `.init` file for a known feature count, without touching
/// any dataset.
pub struct Init {
  feature_count: usize,
  config: BuildConfig,
  out_dir: PathBuf,
  seed: Option<u64>,
}

impl Init {
  pub fn new(feature_count: usize, config: BuildConfig, out_dir: &Path, seed: Option<u64>) -> Self {
    Self {
      feature_count,
      config,
      out_dir: PathBuf::from(out_dir),
      seed,
    }
  }

  pub fn run(self) -> Result<PathBuf> {
    self.config.validate()?;
    if self.feature_count == 0 {
      return Err(Error::Config("feature count must be > 0".to_string()));
    }

    let mut rng = rng_from_seed(self.seed);
    let weights = Weights::generate(
      self.feature_count,
      self.config.hidden_nodes,
      self.config.output_nodes,
      &mut rng,
    );
    let contents = render_weights(&weights);

    std::fs::create_dir_all(&self.out_dir).map_err(|source| Error::Io {
      path: self.out_dir.clone(),
      source,
    })?;
    let path = weights_path(&self.out_dir, &self.config.name);
    write_artifact(&path, &contents)?;
    Ok(path)
  }
}
