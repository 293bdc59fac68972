//! Swagger Markdown CLI
//!
//! Command-line interface for rendering a Swagger document into Markdown.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use swagger_markdown_common::RenderConfig;
use swagger_markdown_generator::MarkdownGenerator;
use swagger_markdown_parser::{load_document, SpecSource};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swagger-markdown")]
#[command(version, about = "Render a Swagger JSON document into Markdown reference pages", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    # Render a local file into ./target\n  \
    swagger-markdown --input swagger.json\n\n  \
    # Fetch the document from a running service\n  \
    swagger-markdown --input http://localhost:8080/v2/api-docs --output docs\n\n  \
    # Use a remote document when no local input is given\n  \
    swagger-markdown --input \"\" --additional http://localhost:8080/v2/api-docs")]
struct Cli {
    /// Path to or URL of the Swagger JSON file
    #[arg(short, long, default_value = "swagger.json", value_name = "SWAGGER_LOCATION")]
    input: String,

    /// URL of a Swagger JSON file, used only when --input is empty
    #[arg(short, long, value_name = "SWAGGER_LOCATION")]
    additional: Option<String>,

    /// Output Markdown directory
    #[arg(short, long, default_value = "target")]
    output: PathBuf,

    /// YAML file overriding labels and layout
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    let config = match &cli.config {
        Some(path) => RenderConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    let source = SpecSource::select(Some(cli.input.as_str()), cli.additional.as_deref())
        .context("No Swagger file found")?;

    println!("{} Parsing Swagger JSON: {}", "→".cyan(), source);
    let document = load_document(&source).context("Failed to load Swagger document")?;
    println!(
        "{} Parsed {} tags and {} paths",
        "✓".green(),
        document.tags.len(),
        document.paths.len()
    );

    if cli.verbose {
        println!("  Output: {}", cli.output.display());
        println!("  Group directory: {}", config.output_subdir);
    }

    println!("{} Baking Markdown...", "→".cyan());
    let generator = MarkdownGenerator::new(document, config);
    let report = generator
        .generate_to_directory(&cli.output)
        .context("Failed to generate Markdown")?;

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("\n{}", "Generated files:".bold());
    println!("  📄 {}", report.summary.display());
    for file in &report.group_files {
        println!("  📄 {}", file.display());
    }
    println!("\nResult: {}", cli.output.display());

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,swagger_markdown_parser=debug,swagger_markdown_generator=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
