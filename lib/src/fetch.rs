use std::{fmt, path::PathBuf};

use tracing::{info, instrument};

use crate::{Error, Result};

/// Where the raw delimiter-separated text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
  /// `http://` or `https://` URL, fetched with a single GET.
  Http(String),
  /// Local file; a `file://` prefix is accepted.
  File(PathBuf),
}

impl From<&str> for Source {
  fn from(s: &str) -> Self {
    if s.starts_with("http://") || s.starts_with("https://") {
      Source::Http(s.to_string())
    } else {
      Source::File(PathBuf::from(s.strip_prefix("file://").unwrap_or(s)))
    }
  }
}

impl fmt::Display for Source {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Source::Http(url) => write!(f, "{}", url),
      Source::File(path) => write!(f, "{}", path.display()),
    }
  }
}

impl Source {
  /// Reads the whole body. Either the complete text comes back or an error
  /// does; there is no retry.
  #[instrument(skip(self), fields(source = %self))]
  pub async fn fetch(&self) -> Result<String> {
    info!("fetching dataset");
    let bytes = match self {
      Source::Http(url) => fetch_http(url).await?,
      Source::File(path) => tokio::fs::read(path)
        .await
        .map_err(|e| Error::transport(self, e))?,
    };
    info!(bytes = bytes.len(), "fetched dataset");
    String::from_utf8(bytes)
      .map_err(|e| Error::format(None, format!("{} is not valid UTF-8: {}", self, e)))
  }
}

async fn fetch_http(url: &str) -> Result<Vec<u8>> {
  let response = reqwest::get(url)
    .await
    .map_err(|e| Error::transport(url, e))?;
  let status = response.status();
  if !status.is_success() {
    return Err(Error::transport(url, format!("HTTP status {}", status)));
  }
  let body = response
    .bytes()
    .await
    .map_err(|e| Error::transport(url, format!("body interrupted: {}", e)))?;
  Ok(body.to_vec())
}
