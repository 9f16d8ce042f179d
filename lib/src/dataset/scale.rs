use super::Sample;

/// Per-feature maxima used for min-max scaling anchored at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnScale {
  pub maxes: Vec<f64>,
}

impl ColumnScale {
  /// Fits the maxima over every sample. Must run before the train/test split
  /// so both files share one scale.
  pub fn fit(samples: &[Sample]) -> Self {
    let width = samples.first().map_or(0, |s| s.features.len());
    let mut maxes = vec![f64::NEG_INFINITY; width];
    for sample in samples {
      for (max, value) in maxes.iter_mut().zip(&sample.features) {
        *max = f64::max(*max, *value);
      }
    }
    Self { maxes }
  }

  /// `value / max` per column. A column whose maximum is zero maps to zero.
  pub fn apply(&self, features: &[f64]) -> Vec<f64> {
    features
      .iter()
      .zip(&self.maxes)
      .map(|(value, max)| if *max == 0.0 { 0.0 } else { value / max })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  fn sample(features: &[f64]) -> Sample {
    Sample {
      features: features.to_vec(),
      labels: vec![0.0],
    }
  }

  #[test]
  fn scales_by_column_max() {
    let samples = vec![sample(&[1.0, 2.0]), sample(&[4.0, 5.0])];
    let scale = ColumnScale::fit(&samples);
    assert_eq!(scale.maxes, vec![4.0, 5.0]);
    assert_eq!(scale.apply(&samples[0].features), vec![0.25, 0.4]);
    assert_eq!(scale.apply(&samples[1].features), vec![1.0, 1.0]);
  }

  #[test]
  fn zero_column_maps_to_zero() {
    let samples = vec![sample(&[0.0, 3.0]), sample(&[0.0, 6.0])];
    let scale = ColumnScale::fit(&samples);
    assert_eq!(scale.apply(&samples[0].features), vec![0.0, 0.5]);
    assert!(scale.apply(&samples[1].features).iter().all(|v| v.is_finite()));
  }

  proptest! {
    #[test]
    fn non_negative_inputs_land_in_unit_interval(
      rows in prop::collection::vec(prop::collection::vec(0.0f64..1e6, 4), 2..50)
    ) {
      let samples: Vec<Sample> = rows.iter().map(|r| sample(r)).collect();
      let scale = ColumnScale::fit(&samples);
      for s in &samples {
        for v in scale.apply(&s.features) {
          prop_assert!((0.0..=1.0).contains(&v), "{} out of range", v);
        }
      }
    }
  }
}
