//! Partitions a document's paths into resource groups keyed by their first
//! path segment

use super::types::{ApiDocument, Operation};
use indexmap::IndexMap;
use swagger_markdown_common::{GeneratorError, Result};
use tracing::debug;

/// Endpoints sharing a leading path segment and a declared tag
#[derive(Debug, Clone)]
pub struct ResourceGroup<'a> {
    /// Tag name, equal to the leading path segment
    pub name: &'a str,
    /// Tag description
    pub description: Option<&'a str>,
    /// Endpoints in document order
    pub endpoints: Vec<Endpoint<'a>>,
}

/// One HTTP operation at one path
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    pub path: &'a str,
    /// Method exactly as spelled in the document
    pub method: &'a str,
    pub operation: &'a Operation,
}

/// Group every path of `document` under the tag named by its first segment
///
/// Groups follow tag declaration order, including tags no path refers to.
/// A path whose first segment names no tag is an error.
pub fn group_resources(document: &ApiDocument) -> Result<Vec<ResourceGroup<'_>>> {
    let mut groups: IndexMap<&str, ResourceGroup<'_>> = IndexMap::new();

    for tag in &document.tags {
        groups
            .entry(tag.name.as_str())
            .or_insert_with(|| ResourceGroup {
                name: &tag.name,
                description: tag.description.as_deref(),
                endpoints: Vec::new(),
            });
    }

    for (path, item) in &document.paths {
        let resource = resource_segment(path);
        let group = groups
            .get_mut(resource)
            .ok_or_else(|| GeneratorError::UnknownResource {
                path: path.clone(),
                resource: resource.to_string(),
            })?;

        for (method, operation) in &item.operations {
            group.endpoints.push(Endpoint {
                path,
                method,
                operation,
            });
        }
    }

    debug!(groups = groups.len(), "grouped paths by resource");
    Ok(groups.into_values().collect())
}

/// First non-empty slash-delimited segment of `path`
pub fn resource_segment(path: &str) -> &str {
    path.split('/').find(|s| !s.is_empty()).unwrap_or("")
}
