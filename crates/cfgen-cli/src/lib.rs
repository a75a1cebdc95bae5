//! # cfgen-cli — Command-Line Driver
//!
//! Provides the `cfgen` command, which reads a schema document and writes
//! the generated accessor source to a file or standard output:
//!
//! ```bash
//! cfgen schemas/server.json -c ServerConfig -o src/server_config.rs
//! cfgen schemas/server.yaml --embed-schema > src/server_config.rs
//! ```
//!
//! Diagnostics go to standard error so that standard output carries only
//! generated code. Output is assembled in memory and written in one step,
//! so a failed run never leaves a partial file behind.

pub mod generate;
