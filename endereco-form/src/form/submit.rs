//! The submit-time control flow.

use log::debug;

use crate::field::Field;
use crate::surface::{FormSurface, Notice};
use crate::validation::ValidationError;

use super::registry::{FieldDescriptor, registry};

/// Confirmation text shown when every field passes.
pub const SUCCESS_MESSAGE: &str = "Endereço cadastrado com sucesso";

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    /// The field that failed (for focusing).
    pub field: Field,
    /// User-facing error message.
    pub message: String,
}

/// What one submit attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form was cleared.
    Accepted,
    /// The first failing field, in validation order.
    Rejected(FieldFailure),
}

impl SubmitOutcome {
    /// Check if the attempt passed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Get the failure (if any).
    pub fn failure(&self) -> Option<&FieldFailure> {
        match self {
            Self::Accepted => None,
            Self::Rejected(failure) => Some(failure),
        }
    }
}

/// Run one submit attempt against the surface.
///
/// Scans the registry in order and stops at the first failure: a blank
/// value fails as a missing required field before the field's own rule is
/// consulted, for every field. Exactly one notification is emitted per
/// call, and focus moves at most once. Values are cleared only when all
/// four fields pass. Always returns; a failed attempt leaves the form
/// ready for a retry.
pub fn submit(surface: &mut impl FormSurface) -> SubmitOutcome {
    let first_failure = registry(surface).into_iter().find_map(|descriptor| {
        check(&descriptor).err().map(|err| FieldFailure {
            field: descriptor.field,
            message: err.to_string(),
        })
    });

    match first_failure {
        Some(failure) => {
            debug!("submit rejected at '{}': {}", failure.field, failure.message);
            surface.notify(Notice::Error(failure.message.clone()));
            surface.focus(failure.field);
            SubmitOutcome::Rejected(failure)
        }
        None => {
            debug!("submit accepted, clearing form");
            surface.notify(Notice::Success(SUCCESS_MESSAGE.to_string()));
            surface.clear_all();
            SubmitOutcome::Accepted
        }
    }
}

fn check(descriptor: &FieldDescriptor) -> Result<(), ValidationError> {
    if descriptor.value.trim().is_empty() {
        return Err(ValidationError::missing(descriptor.field));
    }
    match (descriptor.validate)(&descriptor.value).into_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
