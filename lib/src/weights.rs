use std::f64::consts::PI;

use rand::{distributions::Distribution, Rng};
use tracing::{debug, instrument};

/// Standard normal variates via the Box-Muller transform.
///
/// `u` and `v` are uniform on `(0, 1)`: a draw of exactly zero is redrawn so
/// `ln(u)` stays finite.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardGaussian;

impl Distribution<f64> for StandardGaussian {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
    let u = open_unit(rng);
    let v = open_unit(rng);
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
  }
}

fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
  loop {
    let x: f64 = rng.gen();
    if x != 0.0 {
      return x;
    }
  }
}

/// Dense row-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
  rows: usize,
  cols: usize,
  data: Vec<f64>,
}

impl Matrix {
  pub fn random<D, R>(rows: usize, cols: usize, distribution: D, rng: &mut R) -> Self
  where
    D: Distribution<f64>,
    R: Rng + ?Sized,
  {
    let data = distribution.sample_iter(rng).take(rows * cols).collect();
    Self { rows, cols, data }
  }

  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn cols(&self) -> usize {
    self.cols
  }

  pub fn row(&self, idx: usize) -> &[f64] {
    let start = idx * self.cols;
    &self.data[start..start + self.cols]
  }

  pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
    (0..self.rows).map(move |r| self.row(r))
  }
}

/// Initial weights of a `F -> H -> O` network. Every row carries one extra
/// column for its node's bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
  /// `H x (F + 1)`
  pub layer1: Matrix,
  /// `O x (H + 1)`
  pub layer2: Matrix,
}

impl Weights {
  #[instrument(level = "debug", skip(rng))]
  pub fn generate<R: Rng + ?Sized>(
    feature_count: usize,
    hidden_nodes: usize,
    output_nodes: usize,
    rng: &mut R,
  ) -> Self {
    let layer1 = Matrix::random(hidden_nodes, feature_count + 1, StandardGaussian, rng);
    let layer2 = Matrix::random(output_nodes, hidden_nodes + 1, StandardGaussian, rng);
    debug!(
      layer1 = ?(layer1.rows(), layer1.cols()),
      layer2 = ?(layer2.rows(), layer2.cols()),
      "drew initial weights"
    );
    Self { layer1, layer2 }
  }

  pub fn feature_count(&self) -> usize {
    self.layer1.cols() - 1
  }

  pub fn hidden_nodes(&self) -> usize {
    self.layer1.rows()
  }

  pub fn output_nodes(&self) -> usize {
    self.layer2.rows()
  }
}
