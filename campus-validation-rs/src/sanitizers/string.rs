//! Field sanitizers
//!
//! Cleaners for raw form input. They never judge validity and never fail:
//! non-text input degrades to an empty string (or `0.0` for numbers).

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Longest leading decimal literal, the way a lenient float parser reads it
    static ref LEADING_NUMBER_REGEX: Regex = Regex::new(r"^-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)").unwrap();
}

/// Characters kept by the name sanitizer
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, 'À'..='Ö' | 'Ø'..='ö' | 'ø'..='ÿ')
        || c.is_whitespace()
        || c == '\''
        || c == '-'
}

/// Drop `<` and `>`, then trim surrounding whitespace
pub fn sanitize_text(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| *c != '<' && *c != '>').collect();
    stripped.trim().to_string()
}

/// Text sanitizer; non-string values become an empty string
pub fn string(value: &Value) -> String {
    match value {
        Value::String(s) => sanitize_text(s),
        _ => String::new(),
    }
}

/// Text-sanitize then lowercase
pub fn sanitize_email(input: &str) -> String {
    sanitize_text(input).to_lowercase()
}

pub fn email(value: &Value) -> String {
    match value {
        Value::String(s) => sanitize_email(s),
        _ => String::new(),
    }
}

/// Text-sanitize, compose accents (NFC), then keep only name characters
pub fn sanitize_name(input: &str) -> String {
    sanitize_text(input)
        .nfc()
        .filter(|c| is_name_char(*c))
        .collect()
}

pub fn name(value: &Value) -> String {
    match value {
        Value::String(s) => sanitize_name(s),
        _ => String::new(),
    }
}

/// Keep digits, `.` and `-`, then read the leading decimal; `0.0` when
/// nothing numeric remains
pub fn sanitize_number(input: &str) -> f64 {
    let kept: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    LEADING_NUMBER_REGEX
        .find(&kept)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n != 0.0)
        .unwrap_or(0.0)
}

pub fn number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()).unwrap_or(0.0),
        Value::String(s) => sanitize_number(s),
        _ => 0.0,
    }
}

/// Text-sanitize then keep digits, `+`, whitespace and `-`
pub fn sanitize_phone(input: &str) -> String {
    sanitize_text(input)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-' || c.is_whitespace())
        .collect()
}

pub fn phone(value: &Value) -> String {
    match value {
        Value::String(s) => sanitize_phone(s),
        _ => String::new(),
    }
}
