//! Password validators
//!
//! Character-class checks are independent predicates. Strength is a weighted
//! score over the same predicates and never affects validity.

use super::utils::check;
use super::FieldReport;
use crate::config::ValidationConfig;
use serde::{Deserialize, Serialize};

/// Punctuation counted as a special character
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const MSG_PASSWORD_REQUIRED: &str = "La contraseña es requerida";
pub const MSG_PASSWORD_UPPERCASE: &str = "La contraseña debe contener al menos una letra mayúscula";
pub const MSG_PASSWORD_LOWERCASE: &str = "La contraseña debe contener al menos una letra minúscula";
pub const MSG_PASSWORD_DIGIT: &str = "La contraseña debe contener al menos un número";
pub const MSG_PASSWORD_SPECIAL: &str = "La contraseña debe contener al menos un carácter especial";
pub const MSG_PASSWORD_SPACES: &str = "La contraseña no puede contener espacios";
pub const MSG_PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden";

/// Length message for a given minimum
pub fn password_length_message(min_length: usize) -> String {
    format!(
        "La contraseña debe tener al menos {} caracteres",
        min_length
    )
}

/// At least `min_length` characters
pub fn has_min_length(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
}

/// Contains an ASCII uppercase letter
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Contains an ASCII lowercase letter
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Contains an ASCII digit
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Contains a character from [`SPECIAL_CHARACTERS`]
pub fn has_special_char(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Contains no whitespace at all
pub fn has_no_spaces(password: &str) -> bool {
    !password.chars().any(char::is_whitespace)
}

/// Strength buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

/// Strength classification shown next to the password field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub level: StrengthLevel,
    pub text: String,
    pub color: String,
}

impl PasswordStrength {
    fn for_level(level: StrengthLevel) -> Self {
        let (text, color) = match level {
            StrengthLevel::Weak => ("Débil", "#F44336"),
            StrengthLevel::Medium => ("Media", "#FF9800"),
            StrengthLevel::Strong => ("Fuerte", "#4CAF50"),
        };
        Self {
            level,
            text: text.to_string(),
            color: color.to_string(),
        }
    }
}

/// Weighted score: length>=8 (2), uppercase (1), lowercase (1), digit (1),
/// special (2), no spaces (1), length>=12 (1)
pub fn strength_score(password: &str) -> u32 {
    let weights = [
        (has_min_length(password, 8), 2),
        (has_uppercase(password), 1),
        (has_lowercase(password), 1),
        (has_digit(password), 1),
        (has_special_char(password), 2),
        (has_no_spaces(password), 1),
        (has_min_length(password, 12), 1),
    ];
    weights
        .iter()
        .filter(|(passed, _)| *passed)
        .map(|(_, points)| points)
        .sum()
}

/// Classify a password: >=8 strong, >=5 medium, otherwise weak
pub fn get_strength(password: &str) -> PasswordStrength {
    let level = match strength_score(password) {
        score if score >= 8 => StrengthLevel::Strong,
        score if score >= 5 => StrengthLevel::Medium,
        _ => StrengthLevel::Weak,
    };
    PasswordStrength::for_level(level)
}

/// Run every password check. When `confirmation` is given it must match.
/// The strength classification is always attached.
pub fn validate_password(
    password: &str,
    confirmation: Option<&str>,
    config: &ValidationConfig,
) -> FieldReport {
    let strength = get_strength(password);

    if password.is_empty() {
        return FieldReport::required(MSG_PASSWORD_REQUIRED).with_strength(strength);
    }

    let mut errors = Vec::new();
    if !has_min_length(password, config.password_min_length) {
        errors.push(password_length_message(config.password_min_length));
    }
    check(&mut errors, has_uppercase(password), MSG_PASSWORD_UPPERCASE);
    check(&mut errors, has_lowercase(password), MSG_PASSWORD_LOWERCASE);
    check(&mut errors, has_digit(password), MSG_PASSWORD_DIGIT);
    check(&mut errors, has_special_char(password), MSG_PASSWORD_SPECIAL);
    check(&mut errors, has_no_spaces(password), MSG_PASSWORD_SPACES);
    if let Some(confirmation) = confirmation {
        check(&mut errors, password == confirmation, MSG_PASSWORD_MISMATCH);
    }

    FieldReport::from_errors(errors).with_strength(strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("abc", StrengthLevel::Weak; "short lowercase")]
    #[test_case("abc def", StrengthLevel::Weak; "with space")]
    #[test_case("Abcdef12", StrengthLevel::Medium; "eight mixed")]
    #[test_case("Abcdef12!@#longenough", StrengthLevel::Strong; "long with specials")]
    #[test_case("Abcdef1!", StrengthLevel::Strong; "eight with special")]
    fn test_strength_levels(password: &str, expected: StrengthLevel) {
        assert_eq!(get_strength(password).level, expected);
    }

    #[test]
    fn test_strength_score_weights() {
        assert_eq!(strength_score(""), 1);
        assert_eq!(strength_score("abc"), 2);
        assert_eq!(strength_score("Abcdef12"), 6);
        assert_eq!(strength_score("Abcdef12!@#longenough"), 9);
    }

    #[test]
    fn test_strength_presentation() {
        let strong = get_strength("Abcdef12!@#longenough");
        assert_eq!(strong.text, "Fuerte");
        assert_eq!(strong.color, "#4CAF50");
        assert!(StrengthLevel::Weak < StrengthLevel::Strong);
    }

    #[test]
    fn test_character_classes() {
        assert!(has_uppercase("aB"));
        assert!(!has_uppercase("ab1"));
        assert!(has_lowercase("Ab"));
        assert!(!has_lowercase("AB1"));
        assert!(has_digit("a1"));
        assert!(!has_digit("abc"));
        assert!(has_special_char("a?"));
        assert!(!has_special_char("a_b"));
        assert!(has_no_spaces("abc"));
        assert!(!has_no_spaces("a\tb"));
    }

    #[test]
    fn test_validate_password_collects_every_failure() {
        let config = ValidationConfig::default();
        let report = validate_password("ab c", None, &config);

        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec![
                password_length_message(8),
                MSG_PASSWORD_UPPERCASE.to_string(),
                MSG_PASSWORD_DIGIT.to_string(),
                MSG_PASSWORD_SPECIAL.to_string(),
                MSG_PASSWORD_SPACES.to_string(),
            ]
        );
        assert_eq!(report.strength.unwrap().level, StrengthLevel::Weak);
    }

    #[test]
    fn test_validate_password_confirmation() {
        let config = ValidationConfig::default();

        let report = validate_password("Secure#Pass1", Some("Secure#Pass1"), &config);
        assert!(report.is_valid);
        assert_eq!(report.strength.unwrap().level, StrengthLevel::Strong);

        let report = validate_password("Secure#Pass1", Some("Secure#Pass2"), &config);
        assert_eq!(report.errors, vec![MSG_PASSWORD_MISMATCH]);
    }

    #[test]
    fn test_validate_password_required_short_circuits() {
        let report = validate_password("", Some("x"), &ValidationConfig::default());
        assert_eq!(report.errors, vec![MSG_PASSWORD_REQUIRED]);
        assert!(report.strength.is_some());
    }

    #[test]
    fn test_configured_min_length() {
        let config = ValidationConfig {
            password_min_length: 12,
            ..ValidationConfig::default()
        };
        let report = validate_password("Secure#Pass1", None, &config);
        assert!(report.is_valid);
        let report = validate_password("Secure#Pas1", None, &config);
        assert_eq!(report.errors, vec![password_length_message(12)]);
    }
}
