//! Renders one HTTP operation: heading, request parameters and responses

use crate::markdown::{HeadingLevel, MarkdownDocument};
use crate::schema_table::{nested_description, SchemaTableRenderer};
use crate::text::{required_text, wrap_description};
use std::io::Write;
use swagger_markdown_common::{RenderConfig, Result};
use swagger_markdown_parser::swagger::{Parameter, ParameterLocation, Response};
use swagger_markdown_parser::Endpoint;
use tracing::{debug, trace};

/// Response property that is always expanded into its own table
const DATA_PROPERTY: &str = "data";

/// Group and endpoint numbers used in the endpoint heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceNumbers {
    pub group: usize,
    pub endpoint: usize,
}

pub struct EndpointRenderer<'c> {
    config: &'c RenderConfig,
    schemas: SchemaTableRenderer<'c>,
}

impl<'c> EndpointRenderer<'c> {
    pub fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            schemas: SchemaTableRenderer::new(config),
        }
    }

    pub fn render<W: Write>(
        &self,
        endpoint: &Endpoint<'_>,
        numbers: SequenceNumbers,
        doc: &mut MarkdownDocument<W>,
    ) -> Result<()> {
        let labels = &self.config.labels;
        let operation = endpoint.operation;
        debug!(path = endpoint.path, method = endpoint.method, "rendering endpoint");

        doc.heading(
            HeadingLevel::H3,
            &format!(
                "{}.{} {}",
                numbers.group,
                numbers.endpoint,
                operation.summary.as_deref().unwrap_or("")
            ),
        )?;
        doc.unordered_item(&format!("{}{}", labels.path_prefix, endpoint.path), 0)?;
        doc.unordered_item(&format!("{}{}", labels.method_prefix, endpoint.method), 0)?;

        self.render_request(&operation.parameters, doc)?;
        self.render_responses(operation.responses.iter(), doc)?;

        doc.blank_line()?;
        Ok(())
    }

    /// Body schemas first, then one table for path and query parameters
    fn render_request<W: Write>(
        &self,
        parameters: &[Parameter],
        doc: &mut MarkdownDocument<W>,
    ) -> Result<()> {
        let labels = &self.config.labels;
        doc.heading(HeadingLevel::H4, &labels.request_heading)?;

        let mut url_parameters = Vec::new();
        for parameter in parameters {
            match parameter.location_kind() {
                ParameterLocation::Body => {
                    if let Some(schema) = &parameter.schema {
                        self.schemas.render(schema, "body", doc)?;
                    }
                }
                ParameterLocation::Path | ParameterLocation::Query => url_parameters.push(parameter),
                ParameterLocation::Other => {
                    trace!(name = %parameter.name, location = %parameter.location, "skipping parameter");
                }
            }
        }

        if url_parameters.is_empty() {
            return Ok(());
        }

        doc.unordered_item(&labels.url_parameters_caption, 0)?;
        doc.blank_line()?;
        doc.table(&labels.url_parameter_columns)?;
        for parameter in url_parameters {
            let description = self.wrap(parameter.description.as_deref().unwrap_or(""));
            doc.table_row(&[
                parameter.name.as_str(),
                parameter.location.as_str(),
                parameter.type_name(),
                required_text(parameter.required),
                description.as_str(),
            ])?;
        }
        doc.blank_line()?;

        Ok(())
    }

    /// One section per status code, in ascending order of the code strings
    fn render_responses<'r, W: Write>(
        &self,
        responses: impl Iterator<Item = (&'r String, &'r Response)>,
        doc: &mut MarkdownDocument<W>,
    ) -> Result<()> {
        let labels = &self.config.labels;
        doc.heading(HeadingLevel::H4, &labels.response_heading)?;

        let mut responses: Vec<_> = responses.collect();
        responses.sort_by(|(a, _), (b, _)| a.cmp(b));

        for (status, response) in responses {
            doc.unordered_item(
                &format!(
                    "**{}: {}**",
                    status,
                    response.description.as_deref().unwrap_or("")
                ),
                0,
            )?;

            let schema = response.schema.as_ref();
            let schema_type = schema
                .and_then(|s| s.schema_type.as_deref())
                .unwrap_or("none");
            doc.raw(&format!("**{}{}**", labels.response_type_caption, schema_type))?;
            doc.blank_line()?;

            doc.table(&labels.response_columns)?;
            let properties = schema.and_then(|s| s.iterable_properties());
            for (name, property) in properties.into_iter().flatten() {
                let description = if name == DATA_PROPERTY && property.has_table() {
                    nested_description(self.config, property, name)
                } else {
                    property.description.clone().unwrap_or_default()
                };
                let description = self.wrap(&description);

                doc.table_row(&[
                    name.as_str(),
                    property.schema_type.as_deref().unwrap_or(""),
                    description.as_str(),
                ])?;
            }
            doc.blank_line()?;

            if let Some(data) = properties.and_then(|p| p.get(DATA_PROPERTY)) {
                self.schemas.render(data, DATA_PROPERTY, doc)?;
            }
        }

        Ok(())
    }

    fn wrap(&self, text: &str) -> String {
        wrap_description(text, self.config.description_width, &self.config.line_break)
    }
}
