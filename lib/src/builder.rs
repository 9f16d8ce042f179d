use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{info, instrument};

use crate::{
  dataset::{fisher_yates, parse_records, ColumnScale},
  format::{render_dataset, render_weights},
  utils::write_artifact,
  BuildConfig, Dataset, Result, Schema, Weights,
};

/// Everything one run produces, held in memory until written.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
  pub schema: Schema,
  pub scale: ColumnScale,
  pub train: Dataset,
  pub test: Dataset,
  pub weights: Weights,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
  pub train: PathBuf,
  pub test: PathBuf,
  pub weights: PathBuf,
}

impl ArtifactPaths {
  pub fn new(out_dir: &Path, name: &str) -> Self {
    Self {
      train: out_dir.join(format!("{}.train", name)),
      test: out_dir.join(format!("{}.test", name)),
      weights: weights_path(out_dir, name),
    }
  }
}

pub fn weights_path(out_dir: &Path, name: &str) -> PathBuf {
  out_dir.join(format!("{}.init", name))
}

/// Parse, shuffle, normalize and split `raw`, then draw initial weights
/// sized to the parsed feature count.
#[instrument(skip(raw, rng), fields(bytes = raw.len()))]
pub fn build<R: Rng + ?Sized>(raw: &str, config: &BuildConfig, rng: &mut R) -> Result<Artifacts> {
  config.validate()?;

  let (schema, mut records) = parse_records(raw, config)?;
  fisher_yates(&mut records, rng);

  let dataset = Dataset::from_records(schema, records);
  let scale = ColumnScale::fit(dataset.samples());
  let (train, test) = dataset.normalized(&scale).split(config.train_fraction);
  info!(
    features = schema.feature_count,
    outputs = schema.output_count,
    train = train.len(),
    test = test.len(),
    "built dataset"
  );

  let weights = Weights::generate(schema.feature_count, config.hidden_nodes, schema.output_count, rng);

  Ok(Artifacts {
    schema,
    scale,
    train,
    test,
    weights,
  })
}

impl Artifacts {
  /// Renders all three files before touching the disk, then writes them into
  /// `out_dir` (created if missing), replacing earlier runs.
  ///
  /// The writes are sequential and not atomic: an I/O error on a later file
  /// leaves the earlier ones of this run next to older files from a prior run.
  pub fn write(&self, out_dir: &Path, name: &str) -> Result<ArtifactPaths> {
    let paths = ArtifactPaths::new(out_dir, name);
    let train = render_dataset(&self.train);
    let test = render_dataset(&self.test);
    let weights = render_weights(&self.weights);

    std::fs::create_dir_all(out_dir).map_err(|source| crate::Error::Io {
      path: out_dir.to_path_buf(),
      source,
    })?;
    write_artifact(&paths.train, &train)?;
    write_artifact(&paths.test, &test)?;
    write_artifact(&paths.weights, &weights)?;
    Ok(paths)
  }
}
