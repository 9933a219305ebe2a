//! Field registry and submission controller.

mod registry;
mod submit;

pub use registry::{FieldDescriptor, registry};
pub use submit::{FieldFailure, SUCCESS_MESSAGE, SubmitOutcome, submit};
