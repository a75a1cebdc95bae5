//! # Generate Command
//!
//! Loads a schema document, compiles it and writes the result.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cfgen_schema::options::{DEFAULT_CONFIG_CLASS, DEFAULT_DETAIL_NAMESPACE};
use cfgen_schema::{generate, load_schema_document, GeneratorOptions};

/// Arguments for generating accessors from a schema document.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the schema document (JSON, or YAML with a .yaml/.yml extension).
    pub schema: PathBuf,

    /// Name of the root accessor type.
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_CLASS)]
    pub config_class: String,

    /// Module path of the runtime helpers referenced by the generated code.
    #[arg(short = 'd', long, default_value = DEFAULT_DETAIL_NAMESPACE)]
    pub detail_namespace: String,

    /// Output file. Standard output when omitted.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Embed the schema and emit a validating `make_config` factory.
    #[arg(short = 'e', long)]
    pub embed_schema: bool,
}

impl GenerateArgs {
    /// Generator options selected by these arguments.
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions::default()
            .with_config_class(self.config_class.as_str())
            .with_detail_namespace(self.detail_namespace.as_str())
            .with_embed_schema(self.embed_schema)
    }
}

/// Runs the compiler. Returns the process exit code.
pub fn run_generate(args: &GenerateArgs) -> Result<u8> {
    let schema = load_schema_document(&args.schema)?;
    let code = generate(&schema, &args.options())
        .with_context(|| format!("failed to generate accessors for {}", args.schema.display()))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &code)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote generated accessors");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(code.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to standard output")?;
        }
    }

    Ok(0)
}
