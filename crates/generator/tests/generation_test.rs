//! Integration test for Markdown generation

use std::fs;
use swagger_markdown_common::{GeneratorError, RenderConfig};
use swagger_markdown_generator::{generate_markdown, MarkdownGenerator, SUMMARY_FILE};
use swagger_markdown_parser::SwaggerParser;
use tempfile::TempDir;

const PET_STORE: &str = r#"{
    "swagger": "2.0",
    "info": {"title": "Pet Store", "version": "1.0.0"},
    "consumes": ["application/json"],
    "tags": [
        {"name": "pets", "description": "Everything about pets"},
        {"name": "stores", "description": "Store operations"}
    ],
    "paths": {
        "/pets": {
            "get": {
                "summary": "List pets",
                "responses": {
                    "200": {
                        "description": "OK",
                        "schema": {
                            "type": "object",
                            "properties": {"id": {"type": "integer"}}
                        }
                    }
                }
            },
            "post": {
                "summary": "Create pet",
                "parameters": [{
                    "name": "pet",
                    "in": "body",
                    "schema": {
                        "type": "object",
                        "required": ["name"],
                        "properties": {"name": {"type": "string"}}
                    }
                }],
                "responses": {"201": {"description": "Created"}}
            }
        },
        "/stores/{id}": {
            "delete": {
                "summary": "Close store",
                "parameters": [{"name": "id", "in": "path", "type": "string", "required": true}],
                "responses": {"204": {"description": "Closed"}}
            }
        }
    }
}"#;

fn generate(json: &str, config: RenderConfig) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let document = SwaggerParser::from_json(json).unwrap().into_document();

    let generator = MarkdownGenerator::new(document, config);
    let result = generator.generate_to_directory(temp_dir.path());
    assert!(result.is_ok(), "Generation failed: {:?}", result);

    temp_dir
}

#[test]
fn test_generate_minimal_pets_document() {
    let json = r#"{
        "tags": [{"name": "pets"}],
        "paths": {
            "/pets": {
                "get": {
                    "summary": "List pets",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "schema": {"type": "object", "properties": {"id": {"type": "integer"}}}
                        }
                    }
                }
            }
        }
    }"#;
    let temp_dir = generate(json, RenderConfig::default());
    let output_path = temp_dir.path();

    let summary = fs::read_to_string(output_path.join(SUMMARY_FILE)).unwrap();
    assert!(
        summary.contains("(./xview-api/pets.md)"),
        "Summary should link the pets page"
    );

    let pets = fs::read_to_string(output_path.join("xview-api/pets.md")).unwrap();
    assert!(pets.contains("## 1. pets"), "Should contain group heading");
    assert!(pets.contains("### 1.1 List pets"), "Should contain endpoint heading");
    assert!(pets.contains("id | integer | "), "Should contain response row");
}

#[test]
fn test_generate_pet_store() {
    let temp_dir = generate(PET_STORE, RenderConfig::default());
    let output_path = temp_dir.path();

    assert!(output_path.join("xview-api/pets.md").exists());
    assert!(output_path.join("xview-api/stores.md").exists());

    let summary = fs::read_to_string(output_path.join(SUMMARY_FILE)).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(
        lines,
        vec![
            "# Overview",
            "## swagger: 2.0",
            "## info",
            "- title: Pet Store",
            "- version: 1.0.0",
            "## consumes",
            "- application/json",
            "# API Reference",
            "* [pets](./xview-api/pets.md)",
            "* [stores](./xview-api/stores.md)",
        ]
    );

    let pets = fs::read_to_string(output_path.join("xview-api/pets.md")).unwrap();
    assert!(pets.starts_with("## 1. pets"));
    assert!(pets.contains("Everything about pets"));
    assert!(pets.contains("### 1.1 List pets"));
    assert!(pets.contains("### 1.2 Create pet"));
    assert!(pets.contains("- Method: post"));
    assert!(pets.contains("name | string |  |  |  | True | "));

    let stores = fs::read_to_string(output_path.join("xview-api/stores.md")).unwrap();
    assert!(stores.starts_with("## 2. stores"));
    assert!(stores.contains("### 2.1 Close store"));
    assert!(stores.contains("id | path | string | True | "));
    assert!(stores.contains("- **204: Closed**"));
}

#[test]
fn test_rerun_overwrites_previous_output() {
    let temp_dir = generate(PET_STORE, RenderConfig::default());
    let output_path = temp_dir.path();
    let first = fs::read_to_string(output_path.join(SUMMARY_FILE)).unwrap();
    let first_pets = fs::read_to_string(output_path.join("xview-api/pets.md")).unwrap();

    let document = SwaggerParser::from_json(PET_STORE).unwrap().into_document();
    MarkdownGenerator::new(document, RenderConfig::default())
        .generate_to_directory(output_path)
        .unwrap();

    assert_eq!(fs::read_to_string(output_path.join(SUMMARY_FILE)).unwrap(), first);
    assert_eq!(
        fs::read_to_string(output_path.join("xview-api/pets.md")).unwrap(),
        first_pets
    );
}

#[test]
fn test_custom_subdirectory_and_labels() {
    let yaml = r#"
output_subdir: reference
labels:
  overview_title: 概述
  api_title: API接口设计
"#;
    let config = RenderConfig::from_yaml(yaml).unwrap();
    let temp_dir = generate(PET_STORE, config);
    let output_path = temp_dir.path();

    let summary = fs::read_to_string(output_path.join(SUMMARY_FILE)).unwrap();
    assert!(summary.starts_with("# 概述"));
    assert!(summary.contains("# API接口设计"));
    assert!(summary.contains("* [pets](./reference/pets.md)"));
    assert!(output_path.join("reference/stores.md").exists());
}

#[test]
fn test_unmatched_path_is_reported() {
    let json = r#"{"tags": [{"name": "pets"}], "paths": {"/orders": {"get": {}}}}"#;
    let temp_dir = TempDir::new().unwrap();
    let document = SwaggerParser::from_json(json).unwrap().into_document();

    let err = MarkdownGenerator::new(document, RenderConfig::default())
        .generate_to_directory(temp_dir.path())
        .unwrap_err();
    assert!(matches!(err, GeneratorError::UnknownResource { .. }));
}

#[test]
fn test_tag_cannot_escape_output_directory() {
    let json = r#"{"tags": [{"name": "pets"}, {"name": "../../escaped"}], "paths": {}}"#;
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let document = SwaggerParser::from_json(json).unwrap().into_document();

    let err = MarkdownGenerator::new(document, RenderConfig::default())
        .generate_to_directory(&output_path)
        .unwrap_err();

    assert!(matches!(
        err,
        GeneratorError::InvalidResourceName(ref name) if name == "../../escaped"
    ));
    assert!(!temp_dir.path().join("escaped.md").exists());
    assert!(!output_path.join(SUMMARY_FILE).exists());
    assert!(!output_path.join("xview-api/pets.md").exists());
}

#[test]
fn test_summary_link_encodes_spaces() {
    let json = r#"{
        "tags": [{"name": "Pet Store"}],
        "paths": {"/Pet Store": {"get": {"summary": "List stores"}}}
    }"#;
    let temp_dir = generate(json, RenderConfig::default());
    let output_path = temp_dir.path();

    let summary = fs::read_to_string(output_path.join(SUMMARY_FILE)).unwrap();
    assert!(summary.contains("* [Pet Store](./xview-api/Pet%20Store.md)"));
    assert!(output_path.join("xview-api/Pet Store.md").exists());
}

#[test]
fn test_generate_markdown_uses_default_layout() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("docs");
    let document = SwaggerParser::from_json(PET_STORE).unwrap().into_document();

    let report = generate_markdown(document, output.to_str().unwrap()).unwrap();

    assert_eq!(report.summary, output.join(SUMMARY_FILE));
    assert_eq!(
        report.group_files,
        vec![output.join("xview-api/pets.md"), output.join("xview-api/stores.md")]
    );
    assert!(report.group_files.iter().all(|file| file.exists()));
}
