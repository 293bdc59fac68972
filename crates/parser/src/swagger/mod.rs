//! Swagger 2.x document loading
//!
//! Loads Swagger JSON (already fully inlined, no `$ref` pointers) from a
//! local file or a URL and partitions its paths into resource groups.
//!
//! ## Usage
//! ```rust,ignore
//! use swagger_markdown_parser::swagger::SwaggerParser;
//!
//! let parser = SwaggerParser::from_file("swagger.json")?;
//! for group in parser.resource_groups()? {
//!     println!("{}: {} endpoints", group.name, group.endpoints.len());
//! }
//! ```

mod grouper;
mod parser;
mod source;
mod types;

pub use grouper::{group_resources, resource_segment, Endpoint, ResourceGroup};
pub use parser::SwaggerParser;
pub use source::{HttpFetcher, SpecFetcher, SpecSource};
pub use types::*;
