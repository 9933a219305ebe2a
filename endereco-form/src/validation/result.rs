use super::ValidationError;

/// Result of running one field's rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The value passed.
    #[default]
    Valid,
    /// The value failed; the error carries the user-facing message.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Check if the value passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the value failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the validation error (if any).
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(err) => Some(err),
        }
    }

    /// Consume the result, keeping only the failure.
    pub fn into_error(self) -> Option<ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(err) => Some(err),
        }
    }
}
