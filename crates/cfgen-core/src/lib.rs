//! # cfgen-core — Runtime Support for Generated Accessors
//!
//! Code emitted by the `cfgen` schema compiler does not talk to
//! `serde_json` directly. Every conversion, optional lookup, sequence and
//! validation call goes through the [`detail`] module of this crate, which
//! is the default value of the compiler's `--detail-namespace` flag.
//!
//! ## Tree Model
//!
//! The dynamic tree is a [`serde_json::Value`]. Generated accessors are
//! `Copy` values holding a `&'a Value`; nothing in this crate ever owns or
//! mutates the caller's tree, so an accessor can never outlive it.
//!
//! ## Embedded Schemas
//!
//! When a schema is compiled with `--embed-schema`, the generated factory
//! keeps its schema text in a [`detail::EmbeddedSchema`] static. The
//! validator is compiled on first use, exactly once, even when several
//! threads race on the first call.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cfgen-*` crates.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests. The one deliberate process abort is the
//!   embedded-schema self-check, which can only fail on a compiler bug.

pub mod detail;
pub mod error;

pub use error::{SchemaError, ValidationViolations, Violation};
