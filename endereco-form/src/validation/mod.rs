//! Field validation.
//!
//! One pure rule per field, each returning a [`ValidationResult`]; the
//! user-facing message for every failure lives on [`ValidationError`] so the
//! submission controller only ever formats one error type.

mod error;
mod result;
pub mod rules;

pub use error::ValidationError;
pub use result::ValidationResult;
pub use rules::{validate_cep, validate_logradouro, validate_numero, validate_uf};
