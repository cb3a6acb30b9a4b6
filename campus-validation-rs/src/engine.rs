//! Form validation engine
//!
//! Runs every rule of every field in a [`FormRules`] against a JSON form and
//! gathers the failing messages per field. Pure: no I/O, inputs untouched.

use crate::errors::{FieldErrors, ValidationError, ValidationResult};
use crate::rules::FormRules;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Outcome of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    /// True iff no field produced an error
    pub is_valid: bool,
    /// Failing messages per field; passing fields are absent
    pub errors: BTreeMap<String, Vec<String>>,
}

impl FormReport {
    /// Messages for a field (empty when it passed or was not checked)
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message for a field, for single-line inline errors
    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.errors_for(field).first().map(String::as_str)
    }

    /// Convert into a `Result` so a failed form can be propagated with `?`
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ValidationError::Form(FieldErrors::new(self.errors)))
        }
    }
}

/// Validate `data` (a JSON object) against `rules`.
///
/// Every field named in `rules` is checked; a field missing from `data` (or a
/// `data` that is not an object) is checked as `null`. Fields in `data`
/// without rules are ignored.
pub fn validate_form(data: &Value, rules: &FormRules) -> FormReport {
    let mut errors = BTreeMap::new();

    for (field, rule_set) in rules.iter() {
        let value = data.get(field).unwrap_or(&Value::Null);
        let failures = rule_set.failures(value);
        if !failures.is_empty() {
            errors.insert(field.to_string(), failures);
        }
    }

    let report = FormReport {
        is_valid: errors.is_empty(),
        errors,
    };

    if report.is_valid {
        log::debug!("Form passed validation ({} fields)", rules.field_names().len());
    } else {
        log::debug!(
            "Form failed validation on fields: {:?}",
            report.errors.keys().collect::<Vec<_>>()
        );
    }

    report
}
