use std::path::{Path, PathBuf};

use tracing::info;

use crate::{build, rng::rng_from_seed, ArtifactPaths, BuildConfig, Result, Source};

/// Fetch, build and write the `.train`, `.test` and `.init` files.
pub struct Generate {
  source: Source,
  config: BuildConfig,
  out_dir: PathBuf,
  seed: Option<u64>,
}

impl Generate {
  pub fn new(source: Source, config: BuildConfig, out_dir: &Path, seed: Option<u64>) -> Self {
    Self {
      source,
      config,
      out_dir: PathBuf::from(out_dir),
      seed,
    }
  }

  pub async fn run(self) -> Result<ArtifactPaths> {
    self.config.validate()?;
    let raw = self.source.fetch().await?;

    let mut rng = rng_from_seed(self.seed);
    let artifacts = build(&raw, &self.config, &mut rng)?;
    let paths = artifacts.write(&self.out_dir, &self.config.name)?;
    info!(
      train = %paths.train.display(),
      test = %paths.test.display(),
      weights = %paths.weights.display(),
      "done"
    );
    Ok(paths)
  }
}
