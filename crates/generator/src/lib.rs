//! Markdown generation for Swagger documents
//!
//! This crate turns a parsed `ApiDocument` into a browsable set of Markdown
//! files: a `SUMMARY.md` index with the document overview plus one file per
//! resource group.
//!
//! ## Output layout
//! - `<output>/SUMMARY.md`
//! - `<output>/<output_subdir>/<group>.md`

mod endpoint;
mod markdown;
mod schema_table;
mod text;

pub use endpoint::{EndpointRenderer, SequenceNumbers};
pub use markdown::{HeadingLevel, MarkdownDocument, LINE_ENDING};
pub use schema_table::SchemaTableRenderer;
pub use text::wrap_description;

use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use swagger_markdown_common::{GeneratorError, RenderConfig, Result};
use swagger_markdown_parser::{group_resources, ApiDocument, ResourceGroup};
use text::value_text;
use tracing::info;

/// Top-level document keys rendered on the overview page
pub const INTRODUCTION_KEYS: [&str; 5] = ["info", "consumes", "produces", "schemes", "swagger"];

/// Name of the index page written at the output root
pub const SUMMARY_FILE: &str = "SUMMARY.md";

/// Files written by one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub summary: PathBuf,
    pub group_files: Vec<PathBuf>,
}

/// Markdown generator
///
/// Transforms an `ApiDocument` into:
/// - SUMMARY.md (overview and one link per resource group)
/// - one Markdown file per resource group
pub struct MarkdownGenerator {
    document: ApiDocument,
    config: RenderConfig,
}

impl MarkdownGenerator {
    pub fn new(document: ApiDocument, config: RenderConfig) -> Self {
        Self { document, config }
    }

    /// Generate all Markdown files under `output_dir`
    ///
    /// Every file is truncated before writing, so a rerun overwrites the
    /// previous output. The first failure aborts the run.
    pub fn generate_to_directory(&self, output_dir: &Path) -> Result<GenerationReport> {
        let groups_dir = output_dir.join(&self.config.output_subdir);
        fs::create_dir_all(&groups_dir).map_err(|e| {
            GeneratorError::Generation(format!(
                "Failed to create output directory {}: {}",
                groups_dir.display(),
                e
            ))
        })?;

        let groups = group_resources(&self.document)?;
        for group in &groups {
            check_resource_name(group.name)?;
        }

        let summary_path = output_dir.join(SUMMARY_FILE);
        let mut summary = MarkdownDocument::new(BufWriter::new(create_file(&summary_path)?));
        self.write_introduction(&mut summary)?;

        let mut group_files = Vec::with_capacity(groups.len());
        for (index, group) in groups.iter().enumerate() {
            let file_name = format!("{}.md", group.name);
            let path = groups_dir.join(&file_name);
            self.write_group(group, index + 1, &path)?;
            info!(file = %path.display(), endpoints = group.endpoints.len(), "wrote resource group");

            summary.catalog_entry(
                group.name,
                &format!("./{}/{}", self.config.output_subdir, file_name),
            )?;
            group_files.push(path);
        }

        summary.flush()?;
        info!(file = %summary_path.display(), "wrote summary");

        Ok(GenerationReport {
            summary: summary_path,
            group_files,
        })
    }

    /// Overview of the whitelisted top-level keys, in document order
    fn write_introduction<W: Write>(&self, doc: &mut MarkdownDocument<W>) -> Result<()> {
        let labels = &self.config.labels;
        doc.heading(HeadingLevel::H1, &labels.overview_title)?;

        for (key, value) in &self.document.metadata {
            if !INTRODUCTION_KEYS.contains(&key.as_str()) {
                continue;
            }
            match value {
                Value::Object(map) => {
                    doc.heading(HeadingLevel::H2, key)?;
                    for (name, entry) in map {
                        doc.unordered_item(&format!("{}: {}", name, value_text(entry)), 0)?;
                    }
                }
                Value::Array(items) => {
                    doc.heading(HeadingLevel::H2, key)?;
                    for item in items {
                        doc.unordered_item(&value_text(item), 0)?;
                    }
                }
                Value::Null => {}
                scalar => {
                    doc.heading(HeadingLevel::H2, &format!("{}: {}", key, value_text(scalar)))?;
                }
            }
        }

        doc.heading(HeadingLevel::H1, &labels.api_title)?;
        Ok(())
    }

    fn write_group(&self, group: &ResourceGroup<'_>, number: usize, path: &Path) -> Result<()> {
        let mut doc = MarkdownDocument::new(BufWriter::new(create_file(path)?));
        let renderer = EndpointRenderer::new(&self.config);

        doc.heading(HeadingLevel::H2, &format!("{}. {}", number, group.name))?;
        doc.raw(group.description.unwrap_or(""))?;
        doc.blank_line()?;

        for (index, endpoint) in group.endpoints.iter().enumerate() {
            let numbers = SequenceNumbers {
                group: number,
                endpoint: index + 1,
            };
            renderer.render(endpoint, numbers, &mut doc)?;
        }

        doc.flush()?;
        Ok(())
    }
}

/// Group pages are named after their tag, so the tag must be a plain file name
fn check_resource_name(name: &str) -> Result<()> {
    let plain = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    if plain {
        Ok(())
    } else {
        Err(GeneratorError::InvalidResourceName(name.to_string()))
    }
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| {
        GeneratorError::Generation(format!("Failed to write {}: {}", path.display(), e))
    })
}

/// Generate Markdown with the default configuration (convenience function)
pub fn generate_markdown(document: ApiDocument, output_path: &str) -> Result<GenerationReport> {
    let generator = MarkdownGenerator::new(document, RenderConfig::default());
    generator.generate_to_directory(Path::new(output_path))
}
