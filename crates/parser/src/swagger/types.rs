//! Swagger 2.x type definitions
//!
//! Simplified representation focusing on what the Markdown renderer reads.
//! Every map keeps input order so generated output follows the document.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Keys of a path item that are treated as HTTP operations
pub const HTTP_METHODS: [&str; 7] = ["get", "put", "post", "delete", "options", "head", "patch"];

/// Swagger document root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiDocument {
    /// Declared resource tags, in declaration order
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,

    /// API paths (endpoints)
    #[serde(default, deserialize_with = "null_as_default")]
    pub paths: IndexMap<String, PathItem>,

    /// Every other top-level key (`swagger`, `info`, `consumes`, ...)
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// Tag declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Operations declared under one path, keyed by method as spelled in the input
///
/// Non-method keys such as `parameters` or `x-*` extensions are skipped.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PathItem {
    pub operations: IndexMap<String, Operation>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut operations = IndexMap::new();

        for (key, value) in raw {
            if !HTTP_METHODS.contains(&key.to_ascii_lowercase().as_str()) {
                continue;
            }
            let operation = Operation::deserialize(value).map_err(|e| {
                <D::Error as serde::de::Error>::custom(format!("invalid '{}' operation: {}", key, e))
            })?;
            operations.insert(key, operation);
        }

        Ok(Self { operations })
    }
}

/// HTTP operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    #[serde(default)]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,

    /// Responses keyed by status code
    #[serde(default, deserialize_with = "null_as_default")]
    pub responses: IndexMap<String, Response>,
}

/// Parameter definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    /// Location: path, query, body, header, formData
    #[serde(rename = "in")]
    pub location: String,

    #[serde(rename = "type")]
    #[serde(default)]
    pub param_type: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,

    #[serde(default)]
    pub description: Option<String>,

    /// Body schema (only meaningful when `in` is `body`)
    #[serde(default)]
    pub schema: Option<SchemaNode>,
}

/// Where a parameter is carried, as far as rendering is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
    /// Header, formData and anything else
    Other,
}

impl Parameter {
    pub fn location_kind(&self) -> ParameterLocation {
        match self.location.as_str() {
            "path" => ParameterLocation::Path,
            "query" => ParameterLocation::Query,
            "body" => ParameterLocation::Body,
            _ => ParameterLocation::Other,
        }
    }

    /// Declared type, falling back to the schema type for OpenAPI-style parameters
    pub fn type_name(&self) -> &str {
        self.param_type
            .as_deref()
            .or_else(|| self.schema.as_ref().and_then(|s| s.schema_type.as_deref()))
            .unwrap_or("")
    }
}

/// Response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub schema: Option<SchemaNode>,
}

/// Schema definition (already inlined, no `$ref` resolution)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Type: string, number, integer, boolean, array, object
    #[serde(rename = "type")]
    #[serde(default)]
    pub schema_type: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Properties (for object type)
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: IndexMap<String, SchemaNode>,

    /// Required property names; a non-list value counts as none
    #[serde(default, deserialize_with = "name_list")]
    pub required: Vec<String>,

    /// Items schema (for array type)
    #[serde(default)]
    pub items: Option<Box<SchemaNode>>,

    #[serde(rename = "minLength")]
    #[serde(default)]
    pub min_length: Option<Value>,

    #[serde(rename = "maxLength")]
    #[serde(default)]
    pub max_length: Option<Value>,

    #[serde(rename = "enum")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub enum_values: Vec<Value>,

    #[serde(default)]
    pub example: Option<Value>,
}

/// Explicit `null` reads the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn name_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| item.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    };
    Ok(names)
}

/// Structural kind of a schema node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Object,
    Array,
    Scalar,
}

impl SchemaNode {
    pub fn kind(&self) -> SchemaKind {
        match self.schema_type.as_deref() {
            Some("object") => SchemaKind::Object,
            Some("array") => SchemaKind::Array,
            _ => SchemaKind::Scalar,
        }
    }

    /// Properties a table for this node lists: its own for objects, the
    /// item node's for arrays, none for scalars
    pub fn iterable_properties(&self) -> Option<&IndexMap<String, SchemaNode>> {
        let properties = match self.kind() {
            SchemaKind::Object => Some(&self.properties),
            SchemaKind::Array => self.items.as_deref().map(|item| &item.properties),
            SchemaKind::Scalar => None,
        };
        properties.filter(|properties| !properties.is_empty())
    }

    /// Whether rendering this node produces a table
    pub fn has_table(&self) -> bool {
        self.iterable_properties().is_some()
    }

    /// Whether `name` is required; arrays also consult their item node
    pub fn is_required(&self, name: &str) -> bool {
        let listed = |node: &SchemaNode| node.required.iter().any(|r| r == name);
        match self.kind() {
            SchemaKind::Array => listed(self) || self.items.as_deref().is_some_and(listed),
            _ => listed(self),
        }
    }
}
