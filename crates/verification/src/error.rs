use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, VerificationError>;

impl VerificationError {
    /// A transition attempted from a terminal state. Callers surface this as
    /// "already processed" rather than a generic failure.
    pub fn is_conflict(&self) -> bool {
        matches!(self, VerificationError::Conflict(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, VerificationError::Validation(_))
    }
}

impl From<validator::ValidationErrors> for VerificationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        VerificationError::Validation(errors.to_string())
    }
}
