//! Email validators
//!
//! Format checks are ASCII-oriented and intentionally loose (no RFC 5322).
//! The institutional check is a fragment match on the domain: a domain that
//! contains any allowed fragment passes, so `alumnos.education.com` is
//! accepted through `edu`.

use super::utils::check;
use super::FieldReport;
use crate::config::ValidationConfig;
use lazy_static::lazy_static;
use regex::Regex;

/// Shortest accepted address, in characters
pub const EMAIL_MIN_LENGTH: usize = 5;

/// Longest accepted address, in characters
pub const EMAIL_MAX_LENGTH: usize = 254;

pub const MSG_EMAIL_REQUIRED: &str = "El correo electrónico es requerido";
pub const MSG_EMAIL_FORMAT: &str = "El correo electrónico tiene un formato inválido";
pub const MSG_EMAIL_LENGTH: &str = "El correo electrónico debe tener entre 5 y 254 caracteres";
pub const MSG_EMAIL_UNIVERSITY: &str = "Debes usar tu correo universitario";

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Basic `local@domain.tld` shape
pub fn is_valid_email_format(email: &str) -> bool {
    !email.is_empty() && EMAIL_REGEX.is_match(email)
}

/// Length between 5 and 254 characters inclusive
pub fn is_valid_email_length(email: &str) -> bool {
    let len = email.chars().count();
    (EMAIL_MIN_LENGTH..=EMAIL_MAX_LENGTH).contains(&len)
}

/// Domain part of a well-formed address, lowercased
pub fn email_domain(email: &str) -> Option<String> {
    if !is_valid_email_format(email) {
        return None;
    }
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_lowercase())
}

/// Well-formed address whose domain contains or ends with an allowed fragment
/// (case-insensitive)
pub fn is_university_email(email: &str, domains: &[String]) -> bool {
    match email_domain(email) {
        Some(domain) => domains.iter().any(|fragment| {
            let fragment = fragment.to_lowercase();
            domain.contains(&fragment) || domain.ends_with(&fragment)
        }),
        None => false,
    }
}

/// Run every email check and collect the failures
pub fn validate_email(email: &str, config: &ValidationConfig) -> FieldReport {
    if email.trim().is_empty() {
        return FieldReport::required(MSG_EMAIL_REQUIRED);
    }

    let mut errors = Vec::new();
    check(&mut errors, is_valid_email_format(email), MSG_EMAIL_FORMAT);
    check(&mut errors, is_valid_email_length(email), MSG_EMAIL_LENGTH);
    check(
        &mut errors,
        is_university_email(email, &config.university_domains),
        MSG_EMAIL_UNIVERSITY,
    );
    FieldReport::from_errors(errors)
}
