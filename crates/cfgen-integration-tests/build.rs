//! Build script for cfgen-integration-tests.
//!
//! Compiles every fixture schema under `schemas/` into `$OUT_DIR`, the same
//! way a project using cfgen from its own build script would.

use std::error::Error;
use std::path::{Path, PathBuf};

use cfgen_schema::{generate, load_schema_document, GeneratorOptions};

/// (schema file, generated file, options)
fn fixtures() -> Vec<(&'static str, &'static str, GeneratorOptions)> {
    vec![
        (
            "types.json",
            "types.rs",
            GeneratorOptions::default()
                .with_config_class("TypeConfig")
                .with_embed_schema(true),
        ),
        (
            "server.yaml",
            "server.rs",
            GeneratorOptions::default()
                .with_config_class("ServerConfig")
                .with_embed_schema(true),
        ),
        (
            "lists.json",
            "lists.rs",
            GeneratorOptions::default()
                .with_config_class("Lists")
                .with_detail_namespace("crate::rt"),
        ),
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let schema_dir = Path::new("schemas");

    println!("cargo:rerun-if-changed=build.rs");
    for (schema, output, options) in fixtures() {
        let path = schema_dir.join(schema);
        println!("cargo:rerun-if-changed={}", path.display());

        let document = load_schema_document(&path)?;
        let code = generate(&document, &options)?;
        std::fs::write(out_dir.join(output), code)?;
    }
    Ok(())
}
