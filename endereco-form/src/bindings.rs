//! Keystroke-level input bindings.

use crate::field::Field;
use crate::format::{format_cep, uppercase_uf};

/// Live formatting for a field's displayed value.
///
/// Called by the hosting UI after every keystroke-level change; the returned
/// string replaces the displayed value. `None` means the field has no live
/// formatter. This never validates and never blocks input.
pub fn live_format(field: Field, value: &str) -> Option<String> {
    match field {
        Field::Cep => Some(format_cep(value)),
        Field::Uf => Some(uppercase_uf(value)),
        Field::Logradouro | Field::Numero => None,
    }
}
