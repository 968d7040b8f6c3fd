use std::sync::OnceLock;

use regex::Regex;

use shared_models::error::AppError;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
    })
}

/// Parses an id taken from a path segment or query string.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid id: {}", raw)))
}

/// Parses an optional numeric query filter; a missing or empty value is `None`.
pub fn parse_optional_id(raw: Option<&str>) -> Result<Option<i64>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_id(value).map(Some),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// Empty strings are accepted because partial edits send them to mean
/// "unchanged".
pub fn validate_optional_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() || is_valid_email(email) {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!("Invalid email address: {}", email)))
    }
}

pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::ValidationError(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}

/// Returns `replacement` unless it is blank, in which case `current` is kept.
pub fn merge_text(current: String, replacement: Option<String>) -> String {
    match replacement {
        Some(value) if !value.trim().is_empty() => value,
        _ => current,
    }
}
