//! Error handling for the validation library
//!
//! Failed validations are ordinary data (`FieldReport`, `FormReport`). The
//! error type here only covers the exceptional paths: a form the caller wants
//! to propagate with `?`, a custom rule pattern that does not compile, bad
//! configuration and unknown sport codes.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Enum representing the exceptional validation error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A form failed validation and the caller asked for a `Result`
    #[error("{0}")]
    Form(FieldErrors),

    /// A custom rule pattern could not be compiled
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// A configuration value could not be parsed or is inconsistent
    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    /// Sport code outside the supported set
    #[error("Unknown sport code: {0}")]
    UnknownSport(String),
}

/// Per-field error messages collected by the form engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Messages keyed by field name, in rule order
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Wrap an error map
    pub fn new(fields: BTreeMap<String, Vec<String>>) -> Self {
        Self { fields }
    }

    /// Total number of failed rules across all fields
    pub fn message_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} field(s) failed validation:", self.fields.len())?;

        for (field, messages) in &self.fields {
            for message in messages {
                writeln!(f, "  {}: {}", field, message)?;
            }
        }

        Ok(())
    }
}

impl ValidationError {
    /// Create a configuration error for an environment key
    pub fn invalid_config<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        ValidationError::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the field errors when this is a failed form
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationError::Form(errors) => Some(errors),
            _ => None,
        }
    }
}
