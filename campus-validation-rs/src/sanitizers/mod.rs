//! Input sanitization utilities
//!
//! Per-field cleaners live in [`string`]. [`sanitize_form`] applies them to a
//! whole JSON form before it goes through the validation engine.

pub mod string;

pub use string::{
    sanitize_email, sanitize_name, sanitize_number, sanitize_phone, sanitize_text,
};

use serde_json::{Number, Value};

/// Sanitization result containing the sanitized content and information
/// about whether changes were made during sanitization
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizeResult<T> {
    /// Sanitized content
    pub sanitized: T,
    /// Whether any changes were made during sanitization
    pub was_modified: bool,
    /// Optional details about what was modified
    pub details: Option<String>,
}

impl<T> SanitizeResult<T> {
    pub fn new(sanitized: T, was_modified: bool, details: Option<String>) -> Self {
        Self {
            sanitized,
            was_modified,
            details,
        }
    }

    /// Create a result with unmodified content
    pub fn unmodified(content: T) -> Self {
        Self::new(content, false, None)
    }

    /// Create a result with modified content
    pub fn modified(content: T, details: Option<String>) -> Self {
        Self::new(content, true, details)
    }

    /// Map the sanitized content
    pub fn map<U, F>(self, f: F) -> SanitizeResult<U>
    where
        F: FnOnce(T) -> U,
    {
        SanitizeResult {
            sanitized: f(self.sanitized),
            was_modified: self.was_modified,
            details: self.details,
        }
    }
}

/// Which cleaner applies to a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSanitizer {
    Text,
    Email,
    Name,
    Number,
    Phone,
}

impl FieldSanitizer {
    /// Clean one value, producing the JSON the engine will see
    pub fn apply(&self, value: &Value) -> Value {
        match self {
            FieldSanitizer::Text => Value::String(string::string(value)),
            FieldSanitizer::Email => Value::String(string::email(value)),
            FieldSanitizer::Name => Value::String(string::name(value)),
            FieldSanitizer::Phone => Value::String(string::phone(value)),
            FieldSanitizer::Number => Number::from_f64(string::number(value))
                .map(Value::Number)
                .unwrap_or_else(|| Value::from(0)),
        }
    }
}

/// Clean one field, reporting whether it changed
pub fn sanitize_field(value: &Value, sanitizer: FieldSanitizer) -> SanitizeResult<Value> {
    let cleaned = sanitizer.apply(value);
    if &cleaned == value {
        SanitizeResult::unmodified(cleaned)
    } else {
        SanitizeResult::modified(cleaned, Some(format!("Applied {:?} sanitizer", sanitizer)))
    }
}

/// Sanitize the listed fields of a JSON form. Fields missing from the form are
/// left missing; unlisted fields are copied as-is; non-object input is
/// returned unchanged.
pub fn sanitize_form(data: &Value, plan: &[(&str, FieldSanitizer)]) -> SanitizeResult<Value> {
    let mut object = match data {
        Value::Object(object) => object.clone(),
        _ => return SanitizeResult::unmodified(data.clone()),
    };

    let mut changed_fields = Vec::new();
    for (field, sanitizer) in plan {
        if let Some(value) = object.get_mut(*field) {
            let result = sanitize_field(value, *sanitizer);
            if result.was_modified {
                changed_fields.push(field.to_string());
            }
            *value = result.sanitized;
        }
    }

    if changed_fields.is_empty() {
        SanitizeResult::unmodified(Value::Object(object))
    } else {
        log::debug!("Sanitized form fields: {}", changed_fields.join(", "));
        SanitizeResult::modified(
            Value::Object(object),
            Some(format!("Sanitized fields: {}", changed_fields.join(", "))),
        )
    }
}
