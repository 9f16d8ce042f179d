//! Whitespace text format read by the downstream trainer.
//!
//! Dataset files:
//!
//! ```text
//! <rows> <features> <outputs>
//! f f ... f l ... l
//! ```
//!
//! with features at 3 decimals and labels as integers. Weight files:
//!
//! ```text
//! <features> <hidden> <outputs>
//! <hidden lines of features + 1 values>
//! <output lines of hidden + 1 values>
//! ```
//!
//! Lines are joined with `\n`; the last line carries no terminator.

use itertools::Itertools;

use crate::{Dataset, Matrix, Weights};

const FEATURE_DECIMALS: usize = 3;
const LABEL_DECIMALS: usize = 0;
const WEIGHT_DECIMALS: usize = 3;

/// Fixed-point text with exact ties rounded away from zero, the way the
/// trainer's reference writer rounds. `{:.*}` alone breaks ties to even.
fn fixed(value: f64, decimals: usize) -> String {
  // -0.0 prints as "-0.000"
  let value = if value == 0.0 { 0.0 } else { value };
  let p = 10f64.powi(decimals as i32);
  let scaled = value.abs() * p;
  // FMA yields the exact residual of the product, so only true ties pass.
  let exact_tie = scaled.fract() == 0.5 && value.abs().mul_add(p, -scaled) == 0.0;
  if exact_tie {
    format!("{:.*}", decimals, value.signum() * (scaled.floor() + 1.0) / p)
  } else {
    format!("{:.*}", decimals, value)
  }
}

pub fn render_dataset(dataset: &Dataset) -> String {
  let schema = dataset.schema();
  let body = dataset
    .samples()
    .iter()
    .map(|sample| {
      sample
        .features
        .iter()
        .map(|v| fixed(*v, FEATURE_DECIMALS))
        .chain(sample.labels.iter().map(|v| fixed(*v, LABEL_DECIMALS)))
        .join(" ")
    })
    .join("\n");
  format!(
    "{} {} {}\n{}",
    dataset.len(),
    schema.feature_count,
    schema.output_count,
    body
  )
}

pub fn render_weights(weights: &Weights) -> String {
  let render_layer = |layer: &Matrix| {
    layer
      .iter_rows()
      .map(|row| row.iter().map(|v| fixed(*v, WEIGHT_DECIMALS)).join(" "))
      .join("\n")
  };
  format!(
    "{} {} {}\n{}\n{}",
    weights.feature_count(),
    weights.hidden_nodes(),
    weights.output_nodes(),
    render_layer(&weights.layer1),
    render_layer(&weights.layer2)
  )
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;
  use crate::Schema;

  #[test]
  fn dataset_layout() {
    let schema = Schema {
      feature_count: 2,
      output_count: 1,
    };
    let ds = Dataset::from_records(schema, vec![vec![0.25, 0.4, 3.0], vec![1.0, 1.0, 9.0]]);
    assert_eq!(render_dataset(&ds), "2 2 1\n0.250 0.400 3\n1.000 1.000 9");
  }

  #[test]
  fn every_label_column_is_an_integer() {
    let schema = Schema {
      feature_count: 1,
      output_count: 2,
    };
    let ds = Dataset::from_records(schema, vec![vec![0.12345, 0.0, 1.0]]);
    assert_eq!(render_dataset(&ds), "1 1 2\n0.123 0 1");
  }

  #[test]
  fn empty_dataset_keeps_header() {
    let schema = Schema {
      feature_count: 3,
      output_count: 1,
    };
    let ds = Dataset::from_records(schema, vec![]);
    assert_eq!(render_dataset(&ds), "0 3 1\n");
  }

  #[test]
  fn negative_zero_is_plain_zero() {
    assert_eq!(fixed(-0.0, 3), "0.000");
    assert_eq!(fixed(-1.23456, 3), "-1.235");
    assert_eq!(fixed(1.0, 0), "1");
  }

  #[test]
  fn exact_ties_round_away_from_zero() {
    assert_eq!(fixed(0.0625, 3), "0.063");
    assert_eq!(fixed(3.0 / 16.0, 3), "0.188");
    assert_eq!(fixed(2.5, 0), "3");
    assert_eq!(fixed(0.5, 0), "1");
    assert_eq!(fixed(-2.5, 0), "-3");
    // Not ties once the binary value is taken exactly.
    assert_eq!(fixed(1.005, 2), "1.00");
    assert_eq!(fixed(0.0125, 3), "0.013");
  }

  #[test]
  fn sixteenths_render_rounded_up() {
    let schema = Schema {
      feature_count: 1,
      output_count: 1,
    };
    let ds = Dataset::from_records(schema, vec![vec![1.0 / 16.0, 0.5]]);
    assert_eq!(render_dataset(&ds), "1 1 1\n0.063 1");
  }

  #[test]
  fn weights_layout() {
    let weights = Weights::generate(3, 4, 2, &mut StdRng::seed_from_u64(5));
    let text = render_weights(&weights);
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[0], "3 4 2");
    assert_eq!(lines.len(), 1 + 4 + 2);
    for line in &lines[1..5] {
      assert_eq!(line.split(' ').count(), 4);
    }
    for line in &lines[5..] {
      assert_eq!(line.split(' ').count(), 5);
    }
    for value in lines[1..].iter().flat_map(|l| l.split(' ')) {
      let decimals = value.split('.').nth(1).map_or(0, str::len);
      assert_eq!(decimals, 3, "{}", value);
    }
  }
}
