//! Personal data validators: names, student IDs, phones, age, faculty, role

use super::dates::{age_on, parse_datetime};
use super::utils::check;
use super::FieldReport;
use crate::catalog::{Catalog, UserType};
use crate::config::ValidationConfig;
use chrono::{NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;

pub const MSG_NAME_REQUIRED: &str = "El nombre es requerido";
pub const MSG_NAME_LENGTH: &str = "El nombre debe tener al menos 2 caracteres";
pub const MSG_NAME_CHARS: &str =
    "El nombre solo puede contener letras, espacios, guiones y apóstrofes";
pub const MSG_STUDENT_ID_REQUIRED: &str = "La matrícula es requerida";
pub const MSG_STUDENT_ID_FORMAT: &str = "La matrícula debe tener entre 6 y 12 dígitos";
pub const MSG_PHONE_REQUIRED: &str = "El teléfono es requerido";
pub const MSG_PHONE_FORMAT: &str = "El teléfono debe tener 10 dígitos (opcionalmente con +52)";
pub const MSG_BIRTH_DATE_REQUIRED: &str = "La fecha de nacimiento es requerida";
pub const MSG_BIRTH_DATE_INVALID: &str = "La fecha de nacimiento no es válida";
pub const MSG_FACULTY_REQUIRED: &str = "La facultad es requerida";
pub const MSG_FACULTY_INVALID: &str = "Selecciona una facultad válida";
pub const MSG_USER_TYPE_INVALID: &str = "Tipo de usuario inválido";

lazy_static! {
    // Latin letters including accented ones (excluding × and ÷), spaces, hyphen, apostrophe
    static ref NAME_REGEX: Regex = Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\s'-]+$").unwrap();
    static ref STUDENT_ID_REGEX: Regex = Regex::new(r"^[0-9]{6,12}$").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"^(\+52)?[1-9][0-9]{9}$").unwrap();
}

/// Age range message for the configured bounds
pub fn age_range_message(min_age: u32, max_age: u32) -> String {
    format!("Debes tener entre {} y {} años", min_age, max_age)
}

/// At least two characters once trimmed
pub fn has_valid_name_length(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

/// Only Latin letters, spaces, hyphens and apostrophes
pub fn has_valid_name_chars(name: &str) -> bool {
    NAME_REGEX.is_match(name.trim())
}

/// Trimmed length >= 2 and only name characters
pub fn is_valid_name(name: &str) -> bool {
    has_valid_name_length(name) && has_valid_name_chars(name)
}

/// 6 to 12 ASCII digits
pub fn is_valid_student_id(student_id: &str) -> bool {
    STUDENT_ID_REGEX.is_match(student_id)
}

/// Ten digits (first nonzero) with an optional `+52`, ignoring spaces and hyphens
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    PHONE_REGEX.is_match(&compact)
}

/// Age within `[min_age, max_age]` on the given day
pub fn is_valid_age_on(birth_date: &str, today: NaiveDate, min_age: u32, max_age: u32) -> bool {
    parse_datetime(birth_date)
        .and_then(|birth| age_on(birth.date_naive(), today))
        .map(|age| age >= min_age && age <= max_age)
        .unwrap_or(false)
}

/// Age within `[min_age, max_age]` today
pub fn is_valid_age(birth_date: &str, min_age: u32, max_age: u32) -> bool {
    is_valid_age_on(birth_date, Utc::now().date_naive(), min_age, max_age)
}

/// Exact, case-sensitive membership in the faculty list
pub fn is_valid_faculty(faculty: &str, catalog: &Catalog) -> bool {
    catalog.faculties.iter().any(|f| f == faculty)
}

/// Known role code
pub fn is_valid_user_type(user_type: &str) -> bool {
    UserType::parse(user_type).is_some()
}

pub fn validate_name(name: &str) -> FieldReport {
    if name.trim().is_empty() {
        return FieldReport::required(MSG_NAME_REQUIRED);
    }

    let mut errors = Vec::new();
    check(&mut errors, has_valid_name_length(name), MSG_NAME_LENGTH);
    check(&mut errors, has_valid_name_chars(name), MSG_NAME_CHARS);
    FieldReport::from_errors(errors)
}

pub fn validate_student_id(student_id: &str) -> FieldReport {
    if student_id.trim().is_empty() {
        return FieldReport::required(MSG_STUDENT_ID_REQUIRED);
    }
    let mut errors = Vec::new();
    check(&mut errors, is_valid_student_id(student_id), MSG_STUDENT_ID_FORMAT);
    FieldReport::from_errors(errors)
}

pub fn validate_phone(phone: &str) -> FieldReport {
    if phone.trim().is_empty() {
        return FieldReport::required(MSG_PHONE_REQUIRED);
    }
    let mut errors = Vec::new();
    check(&mut errors, is_valid_phone(phone), MSG_PHONE_FORMAT);
    FieldReport::from_errors(errors)
}

/// Birth date must parse and fall within the configured age range on `today`
pub fn validate_birth_date_on(
    birth_date: &str,
    today: NaiveDate,
    config: &ValidationConfig,
) -> FieldReport {
    if birth_date.trim().is_empty() {
        return FieldReport::required(MSG_BIRTH_DATE_REQUIRED);
    }
    if parse_datetime(birth_date).is_none() {
        return FieldReport::from_errors(vec![MSG_BIRTH_DATE_INVALID.to_string()]);
    }

    let mut errors = Vec::new();
    if !is_valid_age_on(birth_date, today, config.min_age, config.max_age) {
        errors.push(age_range_message(config.min_age, config.max_age));
    }
    FieldReport::from_errors(errors)
}

pub fn validate_birth_date(birth_date: &str, config: &ValidationConfig) -> FieldReport {
    validate_birth_date_on(birth_date, Utc::now().date_naive(), config)
}

pub fn validate_faculty(faculty: &str, catalog: &Catalog) -> FieldReport {
    if faculty.trim().is_empty() {
        return FieldReport::required(MSG_FACULTY_REQUIRED);
    }
    let mut errors = Vec::new();
    check(&mut errors, is_valid_faculty(faculty, catalog), MSG_FACULTY_INVALID);
    FieldReport::from_errors(errors)
}
