//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Sound identifier is malformed (empty, too long, non-alphanumeric)
    #[error("Invalid sound: {0}")]
    InvalidSound(String),

    /// Sound is well-formed but has no registered example
    #[error("Unknown sound: {0}")]
    UnknownSound(String),

    /// Scoring or remedy was requested before a sound was selected
    #[error("No sound selected for practice")]
    NoActiveSound,

    /// A practice session operation is not valid in the current stage
    #[error("Cannot {action} while session is {stage}")]
    InvalidTransition { stage: String, action: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid transition error
    pub fn invalid_transition(stage: impl Into<String>, action: impl Into<String>) -> Self {
        Self::InvalidTransition {
            stage: stage.into(),
            action: action.into(),
        }
    }

    /// Whether the error was caused by caller input rather than sequencing
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSound(_) | Self::UnknownSound(_) | Self::ValidationError(_)
        )
    }
}
