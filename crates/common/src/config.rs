//! Render configuration loaded from YAML files
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock English output.

use crate::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings that shape the generated Markdown
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory under the output root that holds one file per resource group
    pub output_subdir: String,
    /// Descriptions longer than this many characters are split into chunks
    pub description_width: usize,
    /// Marker inserted between description chunks
    pub line_break: String,
    /// Maximum nesting depth of schema tables
    pub max_schema_depth: usize,
    /// Human-readable text emitted by the renderers
    pub labels: Labels,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_subdir: "xview-api".to_string(),
            description_width: 50,
            line_break: "<br/>".to_string(),
            max_schema_depth: 32,
            labels: Labels::default(),
        }
    }
}

/// Captions, headings and table headers
///
/// `parameters_caption` and `nested_reference` contain a `{name}` placeholder
/// that is replaced with the property or label being described.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Labels {
    pub overview_title: String,
    pub api_title: String,
    pub path_prefix: String,
    pub method_prefix: String,
    pub request_heading: String,
    pub response_heading: String,
    pub url_parameters_caption: String,
    pub parameters_caption: String,
    pub nested_reference: String,
    pub response_type_caption: String,
    pub example_caption: String,
    pub schema_columns: Vec<String>,
    pub url_parameter_columns: Vec<String>,
    pub response_columns: Vec<String>,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            overview_title: "Overview".to_string(),
            api_title: "API Reference".to_string(),
            path_prefix: "Path: ".to_string(),
            method_prefix: "Method: ".to_string(),
            request_heading: "Request:".to_string(),
            response_heading: "Response:".to_string(),
            url_parameters_caption: "URL parameters:".to_string(),
            parameters_caption: "**parameters for `{name}` are:**".to_string(),
            nested_reference: "see definition under [{name}] below".to_string(),
            response_type_caption: "Response type: ".to_string(),
            example_caption: "Example:".to_string(),
            schema_columns: strings(&[
                "name",
                "type",
                "minLength",
                "maxLength",
                "enum",
                "required",
                "description",
            ]),
            url_parameter_columns: strings(&["name", "location", "type", "required", "description"]),
            response_columns: strings(&["name", "type", "description"]),
        }
    }
}

impl Labels {
    /// Caption line introducing the table for `name`
    pub fn parameters_caption_for(&self, name: &str) -> String {
        self.parameters_caption.replace("{name}", name)
    }

    /// Cell text pointing at the nested table for `name`
    pub fn nested_reference_for(&self, name: &str) -> String {
        self.nested_reference.replace("{name}", name)
    }
}

impl RenderConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| GeneratorError::Config(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.description_width == 0 {
            return Err(GeneratorError::Config(
                "description_width must be greater than zero".to_string(),
            ));
        }

        let columns = [
            ("schema_columns", &self.labels.schema_columns, 7),
            ("url_parameter_columns", &self.labels.url_parameter_columns, 5),
            ("response_columns", &self.labels.response_columns, 3),
        ];
        for (name, headers, expected) in columns {
            if headers.len() != expected {
                return Err(GeneratorError::Config(format!(
                    "labels.{} needs {} headers, found {}",
                    name,
                    expected,
                    headers.len()
                )));
            }
        }

        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
