//! Validation rules
//!
//! A [`Rule`] pairs a check with the message shown when it fails. Predicates
//! come in several shapes (raw value, text, composite report); they are all
//! normalized to a single `Fn(&Value) -> bool` when the rule is built, so the
//! engine never has to inspect what a check returns.

use crate::errors::{ValidationError, ValidationResult};
use crate::validators::utils::value_as_text;
use crate::validators::FieldReport;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type Check = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A check plus its failure message
#[derive(Clone)]
pub struct Rule {
    check: Check,
    message: String,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Rule over the raw form value
    pub fn new<F, S>(check: F, message: S) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
        S: Into<String>,
    {
        Self {
            check: Arc::new(check),
            message: message.into(),
        }
    }

    /// Rule over the textual form of the value; values without text fail
    pub fn text<F, S>(check: F, message: S) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
        S: Into<String>,
    {
        Self::new(
            move |value| value_as_text(value).map_or(false, |text| check(&*text)),
            message,
        )
    }

    /// Rule backed by a composite validator; passes when the report is valid
    pub fn report<F, S>(validator: F, message: S) -> Self
    where
        F: Fn(&Value) -> FieldReport + Send + Sync + 'static,
        S: Into<String>,
    {
        Self::new(move |value| validator(value).is_valid, message)
    }

    /// Rule matching the textual value against a custom pattern
    pub fn pattern<S: Into<String>>(pattern: &str, message: S) -> ValidationResult<Self> {
        let re = Regex::new(pattern)
            .map_err(|e| ValidationError::InvalidPattern(format!("{}: {}", pattern, e)))?;
        Ok(Self::text(move |text| re.is_match(text), message))
    }

    /// Value must be present and not blank
    pub fn required<S: Into<String>>(message: S) -> Self {
        Self::new(
            |value| !crate::validators::utils::is_blank(value),
            message,
        )
    }

    /// Evaluate the check
    pub fn passes(&self, value: &Value) -> bool {
        (self.check)(value)
    }

    /// Message reported on failure
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ordered rules for one field. Every rule runs; order only affects the
/// order of reported messages.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append every rule of another set
    pub fn extend(mut self, other: RuleSet) -> Self {
        self.rules.extend(other.rules);
        self
    }

    /// Messages of every failing rule, in order
    pub fn failures(&self, value: &Value) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| !rule.passes(value))
            .map(|rule| rule.message.clone())
            .collect()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// Field name -> rule set, in insertion order
#[derive(Debug, Clone, Default)]
pub struct FormRules {
    fields: Vec<(String, RuleSet)>,
}

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a rule set to a field. Binding the same field again appends to
    /// its existing rules.
    pub fn field<S: Into<String>>(mut self, name: S, rules: RuleSet) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, existing)) => {
                let merged = std::mem::take(existing).extend(rules);
                *existing = merged;
            }
            None => self.fields.push((name, rules)),
        }
        self
    }

    /// Rules bound to a field
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rules)| rules)
    }

    /// Fields with their rules, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_rule_coerces_numbers() {
        let rule = Rule::text(|s| s.len() == 6, "seis caracteres");
        assert!(rule.passes(&json!("abcdef")));
        assert!(rule.passes(&json!(123456)));
        assert!(!rule.passes(&json!(null)));
        assert!(!rule.passes(&json!(true)));
        assert_eq!(rule.message(), "seis caracteres");
    }

    #[test]
    fn test_report_rule_is_normalized() {
        let rule = Rule::report(
            |value| {
                if value.as_str() == Some("ok") {
                    FieldReport::valid()
                } else {
                    FieldReport::from_errors(vec!["inner".to_string()])
                }
            },
            "outer",
        );
        assert!(rule.passes(&json!("ok")));
        assert!(!rule.passes(&json!("nope")));
    }

    #[test]
    fn test_pattern_rule() {
        let rule = Rule::pattern(r"^[A-Z]{3}$", "tres mayúsculas").unwrap();
        assert!(rule.passes(&json!("ABC")));
        assert!(!rule.passes(&json!("abc")));

        let err = Rule::pattern(r"([unclosed", "x").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPattern(_)));
    }

    #[test]
    fn test_rule_set_does_not_short_circuit() {
        let rules = RuleSet::new()
            .rule(Rule::required("requerido"))
            .rule(Rule::text(|s| s.len() >= 3, "corto"))
            .rule(Rule::text(|s| s.contains('@'), "sin arroba"));

        assert_eq!(
            rules.failures(&json!(null)),
            vec!["requerido", "corto", "sin arroba"]
        );
        assert_eq!(rules.failures(&json!("ab")), vec!["corto", "sin arroba"]);
        assert!(rules.failures(&json!("a@b")).is_empty());
        assert_eq!(rules.len(), 3);
    }

    #[test]
    fn test_form_rules_preserve_order_and_merge() {
        let form = FormRules::new()
            .field("email", RuleSet::new().rule(Rule::required("a")))
            .field("name", RuleSet::new().rule(Rule::required("b")))
            .field("email", RuleSet::new().rule(Rule::required("c")));

        assert_eq!(form.field_names(), vec!["email", "name"]);
        assert_eq!(form.get("email").unwrap().len(), 2);
        assert!(form.get("phone").is_none());
    }

    #[test]
    fn test_rules_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rule>();
        assert_send_sync::<FormRules>();
    }
}
