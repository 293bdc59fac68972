//! Where a Swagger document comes from: a local file or a remote URL

use swagger_markdown_common::{GeneratorError, Result};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Location of the input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    Local(PathBuf),
    Remote(String),
}

impl SpecSource {
    /// Classify a location string; `http://` and `https://` values are remote
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            SpecSource::Remote(location.to_string())
        } else {
            SpecSource::Local(PathBuf::from(location))
        }
    }

    /// Pick the source from the `--input` / `--additional` pair
    ///
    /// A non-empty input always wins, with no fallback if it later fails to
    /// load. The additional location is only consulted when the input is
    /// empty, and is always fetched remotely.
    pub fn select(input: Option<&str>, additional: Option<&str>) -> Result<Self> {
        match (non_empty(input), non_empty(additional)) {
            (Some(input), _) => Ok(Self::parse(input)),
            (None, Some(url)) => Ok(SpecSource::Remote(url.to_string())),
            (None, None) => Err(GeneratorError::InputUnavailable(
                "No Swagger file given: pass --input or --additional".to_string(),
            )),
        }
    }
}

impl fmt::Display for SpecSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecSource::Local(path) => write!(f, "{}", path.display()),
            SpecSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Fetches the raw text of a remote document
#[cfg_attr(test, mockall::automock)]
pub trait SpecFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Single blocking GET, no retry
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl SpecFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let parsed = reqwest::Url::parse(url).map_err(|_| missing_scheme())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(missing_scheme());
        }

        debug!(url = %parsed, "fetching Swagger document");
        let response = reqwest::blocking::get(parsed)
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                GeneratorError::InputUnavailable(format!("Failed to fetch {}: {}", url, e))
            })?;

        response.text().map_err(|e| {
            GeneratorError::InputUnavailable(format!("Failed to read body of {}: {}", url, e))
        })
    }
}

fn missing_scheme() -> GeneratorError {
    GeneratorError::InputUnavailable(
        "Please specify the URL with a scheme, e.g. \"http://\"".to_string(),
    )
}
