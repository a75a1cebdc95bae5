//! # cfgen CLI entry point
//!
//! Parses command-line arguments, installs logging and runs the compiler.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cfgen_cli::generate::{run_generate, GenerateArgs};

/// Compiles a JSON Schema description of a configuration file into typed
/// Rust accessors over `serde_json` trees.
#[derive(Parser, Debug)]
#[command(name = "cfgen", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(schema = %cli.generate.schema.display(), "cfgen starting");

    match run_generate(&cli.generate) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
