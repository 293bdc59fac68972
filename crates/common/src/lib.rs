//! Common types and utilities for Swagger Markdown
//!
//! This crate contains the error taxonomy and the render configuration
//! shared by the parser, generator, and CLI components.

pub mod config;

pub use config::{Labels, RenderConfig};

use thiserror::Error;

/// Errors that can occur while loading a document or rendering Markdown
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The input document could not be read or fetched
    #[error("Input unavailable: {0}")]
    InputUnavailable(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// A path's leading segment has no declared tag
    #[error("Path '{path}' belongs to resource '{resource}', which has no matching tag")]
    UnknownResource { path: String, resource: String },

    /// A tag name that cannot be used as a file name inside the group directory
    #[error("Resource name '{0}' cannot be used as a file name")]
    InvalidResourceName(String),

    /// Nested schema tables went past the configured depth cap
    #[error("Schema '{label}' nests deeper than {limit} levels")]
    SchemaTooDeep { label: String, limit: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for loading and rendering operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
