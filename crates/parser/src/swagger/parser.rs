//! Swagger document loader

use super::grouper::{group_resources, ResourceGroup};
use super::source::{SpecFetcher, SpecSource};
use super::types::ApiDocument;
use swagger_markdown_common::{GeneratorError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Swagger document parser
///
/// Reads a Swagger 2.x JSON document from a local file, a string, or a
/// remote URL. The document is never mutated after loading.
#[derive(Debug, Clone)]
pub struct SwaggerParser {
    document: ApiDocument,
}

impl SwaggerParser {
    /// Load a Swagger document from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::InputUnavailable(format!(
                "No Swagger file found at {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Fetch and parse a Swagger document from a URL
    pub fn from_url(url: &str, fetcher: &dyn SpecFetcher) -> Result<Self> {
        let content = fetcher.fetch(url)?;
        Self::from_json(&content)
    }

    /// Load from whichever source the caller selected
    pub fn load(source: &SpecSource, fetcher: &dyn SpecFetcher) -> Result<Self> {
        debug!(%source, "loading Swagger document");
        match source {
            SpecSource::Local(path) => Self::from_file(path),
            SpecSource::Remote(url) => Self::from_url(url, fetcher),
        }
    }

    /// Parse a Swagger document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let document: ApiDocument = serde_json::from_str(json)
            .map_err(|e| GeneratorError::Parse(format!("Failed to parse Swagger JSON: {}", e)))?;

        Ok(Self { document })
    }

    /// Partition the document's paths into resource groups
    pub fn resource_groups(&self) -> Result<Vec<ResourceGroup<'_>>> {
        group_resources(&self.document)
    }

    /// Get reference to the underlying document
    pub fn document(&self) -> &ApiDocument {
        &self.document
    }

    pub fn into_document(self) -> ApiDocument {
        self.document
    }
}
