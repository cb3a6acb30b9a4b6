//! Field predicates and composite validators
//!
//! Each submodule exposes `is_*` predicates (plain `bool`, never panicking,
//! absent input is `false`) and `validate_*` composites returning a
//! [`FieldReport`] that lists every failing reason.

pub mod dates;
pub mod email;
pub mod file;
pub mod identity;
pub mod password;
pub mod sports;
pub mod tournament;

pub use dates::*;
pub use email::*;
pub use file::*;
pub use identity::*;
pub use password::*;
pub use sports::*;
pub use tournament::*;

use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// Outcome of a composite validator for one logical field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    /// True when no check failed
    pub is_valid: bool,
    /// Every failing reason, in check order
    pub errors: Vec<String>,
    /// Password strength, informational only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<PasswordStrength>,
}

impl FieldReport {
    /// Build a report from the collected messages
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            strength: None,
        }
    }

    /// A passing report
    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    /// Single "required" failure used when the primary value is empty
    pub fn required(message: &str) -> Self {
        Self::from_errors(vec![message.to_string()])
    }

    /// Attach a strength classification
    pub fn with_strength(mut self, strength: PasswordStrength) -> Self {
        self.strength = Some(strength);
        self
    }
}

/// Utility helpers shared by the validators
pub mod utils {
    use super::*;

    /// Textual view of a form value: strings as-is, numbers in decimal form.
    /// Every other JSON variant has no text.
    pub fn value_as_text(value: &Value) -> Option<Cow<'_, str>> {
        match value {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    /// Numeric view of a form value: numbers, or strings that parse fully
    pub fn value_as_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// True when the value is missing or blank text
    pub fn is_blank(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Push `message` when `ok` is false
    pub(crate) fn check(errors: &mut Vec<String>, ok: bool, message: &str) {
        if !ok {
            errors.push(message.to_string());
        }
    }
}
