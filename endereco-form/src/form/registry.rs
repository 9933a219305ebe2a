//! The ordered field registry.

use crate::field::Field;
use crate::surface::FormSurface;
use crate::validation::{
    ValidationResult, validate_cep, validate_logradouro, validate_numero, validate_uf,
};

/// One form field as seen by a single submit attempt: its identity, the
/// value displayed at submit time, and the rule that judges it.
pub struct FieldDescriptor {
    pub field: Field,
    pub value: String,
    pub validate: fn(&str) -> ValidationResult,
}

impl FieldDescriptor {
    fn rule(field: Field) -> fn(&str) -> ValidationResult {
        match field {
            Field::Cep => validate_cep,
            Field::Logradouro => validate_logradouro,
            Field::Numero => validate_numero,
            Field::Uf => validate_uf,
        }
    }
}

/// Build the registry in validation order, reading every value fresh from
/// the surface. Rebuilt on each submit; nothing survives between attempts.
pub fn registry(surface: &impl FormSurface) -> Vec<FieldDescriptor> {
    Field::ALL
        .into_iter()
        .map(|field| FieldDescriptor {
            field,
            value: surface.value(field),
            validate: FieldDescriptor::rule(field),
        })
        .collect()
}
