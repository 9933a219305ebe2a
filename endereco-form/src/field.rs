//! Field identity and validation order.

use std::fmt;

/// Element id of the form itself, as supplied by the hosting page.
pub const FORM_ID: &str = "formEndereco";

/// The four address fields, in validation order.
///
/// The order of [`Field::ALL`] decides which error surfaces first when
/// several fields are invalid on the same submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Cep,
    Logradouro,
    Numero,
    Uf,
}

impl Field {
    /// All fields, in the fixed order the submission controller checks them.
    pub const ALL: [Field; 4] = [Field::Cep, Field::Logradouro, Field::Numero, Field::Uf];

    /// Stable element identifier supplied by the hosting page.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Cep => "cep",
            Field::Logradouro => "logradouro",
            Field::Numero => "numero",
            Field::Uf => "uf",
        }
    }

    /// Human-facing label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Cep => "CEP",
            Field::Logradouro => "Logradouro",
            Field::Numero => "Número",
            Field::Uf => "UF",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
