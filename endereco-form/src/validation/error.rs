//! Validation error types.

use crate::field::Field;

/// Everything that can make a submit attempt fail.
///
/// `Display` yields the exact user-facing message for each case; the
/// controller surfaces these strings verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field was blank (whitespace-only counts as blank). Takes
    /// precedence over every field-specific rule.
    #[error("{}: Campo obrigatório não pode estar em branco.", .field.id().to_uppercase())]
    MissingRequiredField { field: Field },

    /// CEP does not contain exactly 8 digits.
    #[error("CEP: O campo deve conter 8 dígitos.")]
    CepDigitCount,

    /// CEP has 8 digits but the displayed value is not `00000-000`.
    #[error("CEP: Formato inválido. Use 00000-000.")]
    CepFormat,

    /// Street line shorter than 5 characters after trimming.
    #[error("Logradouro: Deve conter no mínimo 5 caracteres.")]
    LogradouroTooShort,

    /// Street number empty or containing non-digits.
    #[error("Número: Deve conter apenas dígitos numéricos e ser preenchido.")]
    NumeroNotNumeric,

    /// UF is not exactly two uppercase ASCII letters.
    #[error("UF: Deve conter exatamente 2 letras maiúsculas (Ex: SP, RJ).")]
    UfFormat,
}

impl ValidationError {
    /// Creates a missing-field error for the given field.
    pub fn missing(field: Field) -> Self {
        Self::MissingRequiredField { field }
    }
}
