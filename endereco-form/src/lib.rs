//! Validation core for the Endereço address-entry form.
//!
//! Pure formatters and field validators, an ordered field registry, and a
//! submission controller that drives user feedback through an injectable
//! [`FormSurface`]. Nothing in this crate touches a UI runtime; the hosting
//! front end implements [`FormSurface`] and forwards keystroke-level changes
//! to [`bindings::live_format`].

pub mod bindings;
pub mod field;
pub mod form;
pub mod format;
pub mod surface;
pub mod validation;

pub use bindings::live_format;
pub use field::{FORM_ID, Field};
pub use form::{FieldDescriptor, FieldFailure, SUCCESS_MESSAGE, SubmitOutcome, submit};
pub use format::{format_cep, uppercase_uf};
pub use surface::{FormSurface, Notice};
pub use validation::{ValidationError, ValidationResult};
