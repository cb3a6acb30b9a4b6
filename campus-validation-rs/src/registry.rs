//! Reusable rule bundles
//!
//! Named [`RuleSet`]s shared by the app's forms (registration, login, team and
//! tournament editors), plus the two pre-assembled account forms.

use crate::catalog::Catalog;
use crate::config::ValidationConfig;
use crate::rules::{FormRules, Rule, RuleSet};
use crate::validators::utils::value_as_text;
use crate::validators::*;
use std::sync::Arc;

/// Rule bundles bound to one configuration and catalog
#[derive(Debug, Clone)]
pub struct CommonValidationRules {
    config: Arc<ValidationConfig>,
    catalog: Arc<Catalog>,
}

impl Default for CommonValidationRules {
    fn default() -> Self {
        Self::new(ValidationConfig::default(), Catalog::default())
    }
}

impl CommonValidationRules {
    pub fn new(config: ValidationConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Format, then institutional domain
    pub fn email(&self) -> RuleSet {
        let config = Arc::clone(&self.config);
        RuleSet::new()
            .rule(Rule::text(is_valid_email_format, MSG_EMAIL_FORMAT))
            .rule(Rule::text(
                move |email| is_university_email(email, &config.university_domains),
                MSG_EMAIL_UNIVERSITY,
            ))
    }

    /// Length and the four required character classes
    pub fn password(&self) -> RuleSet {
        let min_length = self.config.password_min_length;
        RuleSet::new()
            .rule(Rule::text(
                move |password| has_min_length(password, min_length),
                password_length_message(min_length),
            ))
            .rule(Rule::text(has_uppercase, MSG_PASSWORD_UPPERCASE))
            .rule(Rule::text(has_lowercase, MSG_PASSWORD_LOWERCASE))
            .rule(Rule::text(has_digit, MSG_PASSWORD_DIGIT))
            .rule(Rule::text(has_special_char, MSG_PASSWORD_SPECIAL))
    }

    pub fn name(&self) -> RuleSet {
        RuleSet::new()
            .rule(Rule::text(has_valid_name_length, MSG_NAME_LENGTH))
            .rule(Rule::text(has_valid_name_chars, MSG_NAME_CHARS))
    }

    pub fn student_id(&self) -> RuleSet {
        RuleSet::new().rule(Rule::text(is_valid_student_id, MSG_STUDENT_ID_FORMAT))
    }

    pub fn phone(&self) -> RuleSet {
        RuleSet::new().rule(Rule::text(is_valid_phone, MSG_PHONE_FORMAT))
    }

    pub fn faculty(&self) -> RuleSet {
        let catalog = Arc::clone(&self.catalog);
        RuleSet::new().rule(Rule::text(
            move |faculty| is_valid_faculty(faculty, &catalog),
            MSG_FACULTY_INVALID,
        ))
    }

    pub fn user_type(&self) -> RuleSet {
        RuleSet::new().rule(Rule::text(is_valid_user_type, MSG_USER_TYPE_INVALID))
    }

    pub fn sport(&self) -> RuleSet {
        RuleSet::new().rule(Rule::text(is_valid_sport, MSG_SPORT_INVALID))
    }

    /// Birth date within the configured age range (today)
    pub fn birth_date(&self) -> RuleSet {
        let config = Arc::clone(&self.config);
        let message = age_range_message(self.config.min_age, self.config.max_age);
        RuleSet::new().rule(Rule::report(
            move |value| match value_as_text(value) {
                Some(text) => validate_birth_date(&text, &config),
                None => FieldReport::required(MSG_BIRTH_DATE_REQUIRED),
            },
            message,
        ))
    }

    pub fn tournament_name(&self) -> RuleSet {
        RuleSet::new().rule(Rule::text(
            is_valid_tournament_name,
            MSG_TOURNAMENT_NAME_LENGTH,
        ))
    }

    /// Student sign-up form
    pub fn registration_form(&self) -> FormRules {
        FormRules::new()
            .field("email", self.email())
            .field("password", self.password())
            .field("name", self.name())
            .field("studentId", self.student_id())
            .field("faculty", self.faculty())
            .field("phone", self.phone())
            .field("userType", self.user_type())
    }

    /// Login only needs a well-formed institutional address and a password
    pub fn login_form(&self) -> FormRules {
        FormRules::new()
            .field("email", self.email())
            .field(
                "password",
                RuleSet::new().rule(Rule::required(MSG_PASSWORD_REQUIRED)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validate_form;
    use serde_json::json;

    #[test]
    fn test_email_bundle_runs_every_rule() {
        let rules = CommonValidationRules::default();
        let form = FormRules::new().field("email", rules.email());

        let report = validate_form(&json!({"email": "bad"}), &form);
        assert!(!report.is_valid);
        assert_eq!(
            report.errors_for("email"),
            &[MSG_EMAIL_FORMAT, MSG_EMAIL_UNIVERSITY]
        );
    }

    #[test]
    fn test_password_bundle_uses_configured_length() {
        let config = ValidationConfig {
            password_min_length: 10,
            ..ValidationConfig::default()
        };
        let rules = CommonValidationRules::new(config, Catalog::default());
        let failures = rules.password().failures(&json!("Abc#1234"));
        assert_eq!(failures, vec![password_length_message(10)]);
    }

    #[test]
    fn test_registration_form() {
        let rules = CommonValidationRules::default();
        let form = rules.registration_form();

        let good = json!({
            "email": "ana.lopez@alumno.unam.mx",
            "password": "Fut#bol2025",
            "name": "Ana López",
            "studentId": "31420987",
            "faculty": "Ingeniería",
            "phone": "55 1234 5678",
            "userType": "student"
        });
        let report = validate_form(&good, &form);
        assert!(report.is_valid, "{:?}", report.errors);

        let bad = json!({
            "email": "ana@gmail.com",
            "password": "futbol",
            "name": "A",
            "studentId": 123,
            "faculty": "Magia",
            "userType": "root"
        });
        let report = validate_form(&bad, &form);
        assert_eq!(report.errors_for("email"), &[MSG_EMAIL_UNIVERSITY]);
        assert_eq!(report.errors_for("password").len(), 4);
        assert_eq!(report.errors_for("name"), &[MSG_NAME_LENGTH]);
        assert_eq!(report.errors_for("studentId"), &[MSG_STUDENT_ID_FORMAT]);
        assert_eq!(report.errors_for("faculty"), &[MSG_FACULTY_INVALID]);
        assert_eq!(report.errors_for("phone"), &[MSG_PHONE_FORMAT]);
        assert_eq!(report.errors_for("userType"), &[MSG_USER_TYPE_INVALID]);
    }

    #[test]
    fn test_login_form() {
        let form = CommonValidationRules::default().login_form();
        let report = validate_form(&json!({"email": "x@unam.mx", "password": ""}), &form);
        assert_eq!(report.errors_for("password"), &[MSG_PASSWORD_REQUIRED]);
        assert!(report.errors_for("email").is_empty());
    }

    #[test]
    fn test_birth_date_bundle() {
        let rules = CommonValidationRules::default();
        let set = rules.birth_date();
        assert!(set.failures(&json!("1990-01-01")).is_empty());
        assert_eq!(set.failures(&json!("ayer")), vec![age_range_message(16, 65)]);
        assert_eq!(set.failures(&json!(null)).len(), 1);
    }

    #[test]
    fn test_sport_and_tournament_name_bundles() {
        let rules = CommonValidationRules::default();
        assert!(rules.sport().failures(&json!("voleibol")).is_empty());
        assert_eq!(rules.sport().failures(&json!("golf")), vec![MSG_SPORT_INVALID]);
        assert_eq!(
            rules.tournament_name().failures(&json!("ab")),
            vec![MSG_TOURNAMENT_NAME_LENGTH]
        );
    }
}
