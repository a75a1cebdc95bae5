//! # Error Types — Run-Time Validation Failures
//!
//! A configuration tree that does not conform to its schema is an ordinary,
//! recoverable condition: the caller gets a [`SchemaError`] carrying every
//! violation the validator found, each with the JSON Pointer of the offending
//! value and of the schema keyword that rejected it.

use std::fmt;

use thiserror::Error;

/// Error returned when a tree cannot be exposed through a typed accessor.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The tree did not conform to the schema.
    #[error("configuration does not match its schema:\n{violations}")]
    ValidationFailed {
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// The schema itself could not be compiled into a validator.
    #[error("invalid schema: {reason}")]
    InvalidSchema {
        /// Reason the validator could not be built.
        reason: String,
    },
}

impl SchemaError {
    /// Returns the violations for a validation failure, or an empty slice.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::ValidationFailed { violations } => violations.violations(),
            Self::InvalidSchema { .. } => &[],
        }
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, Default)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Wraps a list of violations.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
