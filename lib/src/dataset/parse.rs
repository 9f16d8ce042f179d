use tracing::{debug, instrument};

use super::Schema;
use crate::{BuildConfig, Error, Result};

/// Parses delimiter-separated numeric text into equally wide records.
///
/// The record width comes from `config.feature_count` (plus the outputs) when
/// given, otherwise from the first line. A final line of a different width is
/// dropped, which absorbs the trailing newline most sources end with. Any other
/// width mismatch, an unparsable or non-finite field, or fewer than two
/// remaining rows is an `Error::Format`.
#[instrument(level = "debug", skip(content, config), fields(bytes = content.len()))]
pub fn parse_records(content: &str, config: &BuildConfig) -> Result<(Schema, Vec<Vec<f64>>)> {
  if content.trim().is_empty() {
    return Err(too_few_rows(0));
  }

  let mut rows: Vec<Vec<&str>> = content
    .split('\n')
    .map(|line| line.strip_suffix('\r').unwrap_or(line))
    .map(|line| line.split(config.delimiter).map(str::trim).collect())
    .collect();

  let width = match config.feature_count {
    Some(features) => features + config.output_nodes,
    None => rows.first().map_or(0, Vec::len),
  };
  if width <= config.output_nodes {
    return Err(Error::format(
      Some(1),
      format!(
        "{} columns leave no feature columns next to {} output(s)",
        width, config.output_nodes
      ),
    ));
  }

  if rows.last().map(Vec::len) != Some(width) {
    let dropped = rows.pop().map_or(0, |row| row.len());
    debug!(fields = dropped, expected = width, "dropping malformed trailing row");
  }

  if rows.len() < 2 {
    return Err(too_few_rows(rows.len()));
  }

  let records = rows
    .iter()
    .enumerate()
    .map(|(idx, row)| parse_row(idx + 1, row, width))
    .collect::<Result<Vec<_>>>()?;

  let schema = Schema {
    feature_count: width - config.output_nodes,
    output_count: config.output_nodes,
  };
  debug!(rows = records.len(), ?schema, "parsed records");
  Ok((schema, records))
}

fn too_few_rows(found: usize) -> Error {
  Error::format(None, format!("need at least 2 rows to split, found {}", found))
}

fn parse_row(line: usize, fields: &[&str], width: usize) -> Result<Vec<f64>> {
  if fields.len() != width {
    return Err(Error::format(
      Some(line),
      format!("expected {} fields, found {}", width, fields.len()),
    ));
  }
  fields
    .iter()
    .enumerate()
    .map(|(col, field)| match field.parse::<f64>() {
      Ok(value) if value.is_finite() => Ok(value),
      _ => Err(Error::format(
        Some(line),
        format!("column {}: {:?} is not a finite number", col + 1, field),
      )),
    })
    .collect()
}
