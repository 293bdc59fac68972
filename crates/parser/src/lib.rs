//! Swagger document parsing for Swagger Markdown
//!
//! This crate turns a Swagger 2.x JSON document into a read-only model
//! (`ApiDocument`) and partitions its paths into `ResourceGroup`s, one per
//! declared tag, ready for rendering.

pub mod swagger;

pub use swagger::{
    group_resources, ApiDocument, Endpoint, HttpFetcher, ResourceGroup, SchemaNode, SpecFetcher,
    SpecSource, SwaggerParser,
};

use swagger_markdown_common::Result;

/// Load a document from `source`, fetching remote sources over HTTP
pub fn load_document(source: &SpecSource) -> Result<ApiDocument> {
    SwaggerParser::load(source, &HttpFetcher).map(SwaggerParser::into_document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_document_from_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tags": [{{"name": "pets"}}], "paths": {{"/pets": {{"get": {{}}}}}}}}"#
        )
        .unwrap();

        let source = SpecSource::Local(file.path().to_path_buf());
        let document = load_document(&source).unwrap();
        assert_eq!(document.tags[0].name, "pets");
    }
}
