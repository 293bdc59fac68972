//! Flattens nested schema nodes into linked Markdown tables
//!
//! A node's table lists its immediate properties. Object and array
//! properties that have properties of their own get a reference cell and are
//! expanded into their own tables right after the parent table, in
//! declaration order. A node's example trails its whole expansion.

use crate::markdown::MarkdownDocument;
use crate::text::{
    enum_text, example_text, optional_value_text, required_text, wrap_description,
};
use std::io::Write;
use swagger_markdown_common::{GeneratorError, RenderConfig, Result};
use swagger_markdown_parser::SchemaNode;
use tracing::trace;

/// Renders schema nodes as 7-column property tables
#[derive(Debug, Clone, Copy)]
pub struct SchemaTableRenderer<'c> {
    config: &'c RenderConfig,
}

impl<'c> SchemaTableRenderer<'c> {
    pub fn new(config: &'c RenderConfig) -> Self {
        Self { config }
    }

    /// Render `node` under `label`, followed by its nested tables
    ///
    /// Scalars and nodes without properties render nothing.
    pub fn render<W: Write>(
        &self,
        node: &SchemaNode,
        label: &str,
        doc: &mut MarkdownDocument<W>,
    ) -> Result<()> {
        self.render_at(node, label, doc, 0)
    }

    fn render_at<W: Write>(
        &self,
        node: &SchemaNode,
        label: &str,
        doc: &mut MarkdownDocument<W>,
        depth: usize,
    ) -> Result<()> {
        let Some(properties) = node.iterable_properties() else {
            return Ok(());
        };
        if depth > self.config.max_schema_depth {
            return Err(GeneratorError::SchemaTooDeep {
                label: label.to_string(),
                limit: self.config.max_schema_depth,
            });
        }
        trace!(label, depth, "rendering schema table");

        let labels = &self.config.labels;
        doc.raw(&labels.parameters_caption_for(label))?;
        doc.blank_line()?;
        doc.table(&labels.schema_columns)?;

        let mut deferred = Vec::new();
        for (name, property) in properties {
            let description = if property.has_table() {
                deferred.push((name, property));
                nested_description(self.config, property, name)
            } else {
                property.description.clone().unwrap_or_default()
            };

            doc.table_row(&[
                name.clone(),
                property.schema_type.clone().unwrap_or_default(),
                optional_value_text(property.min_length.as_ref()),
                optional_value_text(property.max_length.as_ref()),
                enum_text(&property.enum_values),
                required_text(node.is_required(name)).to_string(),
                self.wrap(&description),
            ])?;
        }
        doc.blank_line()?;

        for (name, property) in deferred {
            self.render_at(property, name, doc, depth + 1)?;
        }

        if let Some(example) = &node.example {
            doc.unordered_item(&labels.example_caption, 0)?;
            doc.code_block(&example_text(example), Some("json"))?;
            doc.blank_line()?;
        }

        Ok(())
    }

    fn wrap(&self, text: &str) -> String {
        wrap_description(text, self.config.description_width, &self.config.line_break)
    }
}

/// Description cell for a property whose table follows further down
pub(crate) fn nested_description(config: &RenderConfig, property: &SchemaNode, name: &str) -> String {
    let reference = config.labels.nested_reference_for(name);
    match property.description.as_deref() {
        Some(description) if !description.is_empty() => format!("{}, {}", description, reference),
        _ => reference,
    }
}
