//! The per-field validation rules.
//!
//! Each rule is a pure function from the displayed value to a
//! [`ValidationResult`]; none of them mutates anything. Blank values are the
//! submission controller's concern and reach these rules only through it.

use std::sync::LazyLock;

use regex::Regex;

use super::{ValidationError, ValidationResult};

static CEP_DISPLAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{5})-(\d{3})$").expect("Invalid regex pattern"));
// ASCII class: `\d` would also match non-ASCII decimal digits here.
static NUMERO_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid regex pattern"));
static UF_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("Invalid regex pattern"));

/// CEP must hold exactly 8 digits and display as `00000-000`.
///
/// The digit count is checked against the unmasked value first, so a short
/// CEP reports the count error rather than the format one. The format check
/// runs against the displayed value; with the live mask active it rarely
/// fails, but it is what guarantees the final shape.
pub fn validate_cep(value: &str) -> ValidationResult {
    let digits_only: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits_only.len() != 8 {
        return ValidationResult::Invalid(ValidationError::CepDigitCount);
    }
    if !CEP_DISPLAY.is_match(value) {
        return ValidationResult::Invalid(ValidationError::CepFormat);
    }
    ValidationResult::Valid
}

/// Street line must be at least 5 characters after trimming.
pub fn validate_logradouro(value: &str) -> ValidationResult {
    if value.trim().chars().count() < 5 {
        return ValidationResult::Invalid(ValidationError::LogradouroTooShort);
    }
    ValidationResult::Valid
}

/// Street number must be non-empty and all decimal digits after trimming.
pub fn validate_numero(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() || !NUMERO_DIGITS.is_match(trimmed) {
        return ValidationResult::Invalid(ValidationError::NumeroNotNumeric);
    }
    ValidationResult::Valid
}

/// UF must be exactly two uppercase ASCII letters.
pub fn validate_uf(value: &str) -> ValidationResult {
    if !UF_LETTERS.is_match(value) {
        return ValidationResult::Invalid(ValidationError::UfFormat);
    }
    ValidationResult::Valid
}
