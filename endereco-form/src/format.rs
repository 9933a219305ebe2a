//! Live display formatters.
//!
//! Pure string transforms applied on every keystroke; the caller writes the
//! returned value back into the displayed field. Both are idempotent, so
//! reformatting an already-formatted value is a no-op.

/// Apply the CEP mask (`DDDDD-DDD`).
///
/// Strips every non-digit, then inserts a single hyphen after the 5th digit
/// once a 6th digit exists. Digits beyond 8 are kept after the hyphen; the
/// mask never truncates.
pub fn format_cep(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() > 5 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}

/// Uppercase every letter; non-letters pass through unchanged.
pub fn uppercase_uf(input: &str) -> String {
    input.to_uppercase()
}
