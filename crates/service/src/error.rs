//! Service-level error model.

use thiserror::Error;

use billabong_core::DomainError;
use billabong_parties::Verdict;
use billabong_store::StoreError;

/// Error surfaced to the caller of a service operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A referenced record does not exist.
    #[error("record not found")]
    NotFound,

    /// A submitted party snapshot failed its consistency check. The write
    /// was not performed.
    #[error("snapshot rejected ({role}): {verdict}")]
    Rejected {
        role: &'static str,
        verdict: Verdict,
    },

    /// Record-level validation failure.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage failure other than a missing record.
    #[error("storage failure: {0}")]
    Store(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound,
            StoreError::Domain(domain) => ServiceError::Domain(domain),
            other => ServiceError::Store(other.to_string()),
        }
    }
}
