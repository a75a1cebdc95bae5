//! # cfgen-integration-tests
//!
//! Accessors generated by `build.rs` from the fixture schemas in `schemas/`.
//! Each module holds one generated file; the tests in `tests/` drive them
//! against real configuration trees.

/// Runtime helpers re-exported under a project-local path, for the fixture
/// generated with a custom detail namespace.
pub mod rt {
    pub use cfgen_core::detail::*;
}

/// Every scalar kind, with an embedded schema.
pub mod types {
    include!(concat!(env!("OUT_DIR"), "/types.rs"));
}

/// Nested objects and arrays, generated from a YAML schema.
pub mod server {
    include!(concat!(env!("OUT_DIR"), "/server.rs"));
}

/// Arrays and awkward property names, against `crate::rt`.
pub mod lists {
    include!(concat!(env!("OUT_DIR"), "/lists.rs"));
}
