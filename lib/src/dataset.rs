pub mod parse;
pub mod scale;
pub mod shuffle;

pub use parse::*;
pub use scale::*;
pub use shuffle::*;

/// Column layout of every record: features first, then labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
  pub feature_count: usize,
  pub output_count: usize,
}

impl Schema {
  pub fn width(&self) -> usize {
    self.feature_count + self.output_count
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
  pub features: Vec<f64>,
  pub labels: Vec<f64>,
}

/// Ordered samples sharing one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
  schema: Schema,
  samples: Vec<Sample>,
}

impl Dataset {
  /// Cuts each record into features and the trailing `output_count` labels.
  /// Records are expected to be `schema.width()` long, as `parse_records` guarantees.
  pub fn from_records(schema: Schema, records: Vec<Vec<f64>>) -> Self {
    let samples = records
      .into_iter()
      .map(|mut record| {
        let labels = record.split_off(schema.feature_count);
        Sample {
          features: record,
          labels,
        }
      })
      .collect();
    Self { schema, samples }
  }

  pub fn schema(&self) -> Schema {
    self.schema
  }

  pub fn samples(&self) -> &[Sample] {
    &self.samples
  }

  pub fn len(&self) -> usize {
    self.samples.len()
  }

  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }

  /// Rescales every feature vector; labels are left untouched.
  pub fn normalized(self, scale: &ColumnScale) -> Self {
    let samples = self
      .samples
      .into_iter()
      .map(|sample| Sample {
        features: scale.apply(&sample.features),
        labels: sample.labels,
      })
      .collect();
    Self {
      schema: self.schema,
      samples,
    }
  }

  /// The first `floor(len * ratio)` samples become the training set, the rest the test set.
  pub fn split(mut self, ratio: f64) -> (Dataset, Dataset) {
    let splitting_point = ((self.samples.len() as f64 * ratio).floor() as usize).min(self.samples.len());
    let test = self.samples.split_off(splitting_point);
    tracing::debug!(train = self.samples.len(), test = test.len(), "split dataset");
    (
      Dataset {
        schema: self.schema,
        samples: self.samples,
      },
      Dataset {
        schema: self.schema,
        samples: test,
      },
    )
  }
}
