//! Validation rules for contact form fields
//!
//! Required-value, email and phone checks. Digits are ASCII only, matching
//! how browsers evaluate the same patterns.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum number of characters a normalized phone number must have
pub const MIN_PHONE_LENGTH: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[1-9][0-9]{0,15}$").expect("valid phone pattern"));

/// Separators that are stripped from phone numbers before validation
static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-().]").expect("valid separator pattern"));

/// Field validation error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Required field is empty after trimming
    Required,
    /// Email does not look like `local@domain.tld`
    InvalidEmail,
    /// Phone number is too short or contains invalid characters
    InvalidPhone,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required => write!(f, "This field is required"),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address"),
            FieldError::InvalidPhone => write!(f, "Please enter a valid phone number"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Kind of input a field renders as; selects the format check applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    TextArea,
}

impl FieldKind {
    /// HTML `type` attribute for `<input>` kinds
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
        }
    }

    /// Run the format check for this kind. Text kinds always pass.
    pub fn check_format(&self, value: &str) -> Result<(), FieldError> {
        match self {
            FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
            FieldKind::Tel if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
            _ => Ok(()),
        }
    }
}

/// Check the required rule against a raw field value
pub fn check_required(value: &str, required: bool) -> Result<(), FieldError> {
    if required && value.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// Check if an email address has a local part, a domain and a dotted suffix
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Strip spaces, dashes, parentheses and dots from a phone number
pub fn normalize_phone(phone: &str) -> String {
    PHONE_SEPARATORS.replace_all(phone, "").into_owned()
}

/// Check if a phone number is plausible once separators are removed
pub fn is_valid_phone(phone: &str) -> bool {
    let clean = normalize_phone(phone);
    clean.len() >= MIN_PHONE_LENGTH && PHONE_PATTERN.is_match(&clean)
}
