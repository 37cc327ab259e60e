use thiserror::Error;

use cn_model::RuleViolation;

/// Store-level failure, distinct from business-rule violations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored document is unreadable: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No prior document exists for the process/stage pair.
    #[error("no prior document found for this process and stage")]
    NotFound,
    #[error(transparent)]
    Violation(#[from] RuleViolation),
    #[error("document store failure: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Stable code for the dispatch layer.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound => "DATA_NOT_FOUND",
            ServiceError::Violation(violation) => violation.code(),
            ServiceError::Store(_) => "STORE_FAILURE",
        }
    }
}
