//! Shared error types for the services crate.

use thiserror::Error;

use jobdesk_core::model::AssessmentId;
use storage::repository::StorageError;
use storage::sample::SampleDataError;

/// Errors emitted by the assessment session and its flow service.
///
/// None of these reject an answer value: they report events that are not
/// defined for the current lifecycle state, or provider failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("assessment has no questions")]
    Empty,
    #[error("assessment already submitted")]
    Submitted,
    #[error("submission confirmation is open")]
    ConfirmPending,
    #[error("no submission confirmation is open")]
    NotConfirming,
    #[error("session has not been submitted")]
    NotSubmitted,
    #[error("assessment {0} was already submitted and cannot be retaken")]
    AlreadySubmitted(AssessmentId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// The requested assessment does not exist in the catalog.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionError::Storage(StorageError::NotFound))
    }
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ApplicationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApplicationError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    SampleData(#[from] SampleDataError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
