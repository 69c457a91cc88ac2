use async_trait::async_trait;
use jobdesk_core::model::{
    Application, ApplicationId, Assessment, AssessmentId, AssessmentListing, AssessmentSubmission,
    TestStatus,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),
}

/// Storage identifier for a recorded submission.
pub type SubmissionId = i64;

/// A submission together with its storage id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRow {
    pub id: SubmissionId,
    pub submission: AssessmentSubmission,
}

/// Read-only provider of assessments and their catalog rows.
#[async_trait]
pub trait AssessmentCatalog: Send + Sync {
    /// Fetch an assessment with its questions.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the id has no question set.
    async fn get_assessment(&self, id: AssessmentId) -> Result<Assessment, StorageError>;

    /// List catalog rows in display order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    async fn list_assessments(&self) -> Result<Vec<AssessmentListing>, StorageError>;
}

/// Receives finalized answers from the assessment flow.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Record a submission.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the assessment was already submitted.
    async fn append_submission(
        &self,
        submission: &AssessmentSubmission,
    ) -> Result<SubmissionId, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing.
    async fn get_submission(&self, id: SubmissionId) -> Result<AssessmentSubmission, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn find_by_assessment(
        &self,
        assessment_id: AssessmentId,
    ) -> Result<Option<SubmissionRow>, StorageError>;
}

/// The candidate's tracked job applications.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn list_applications(&self) -> Result<Vec<Application>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing.
    async fn get_application(&self, id: ApplicationId) -> Result<Application, StorageError>;

    /// Flip the test attached to `assessment_id` to completed.
    ///
    /// Returns the affected application, or `None` when no application links
    /// to this assessment.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn mark_test_completed(
        &self,
        assessment_id: AssessmentId,
    ) -> Result<Option<ApplicationId>, StorageError>;
}

/// In-memory backend used by the desktop app and tests.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    assessments: Arc<Mutex<HashMap<AssessmentId, Assessment>>>,
    listings: Arc<Mutex<Vec<AssessmentListing>>>,
    submissions: Arc<Mutex<Vec<SubmissionRow>>>,
    applications: Arc<Mutex<Vec<Application>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Connection(e.to_string()))
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the question set for an assessment.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn upsert_assessment(&self, assessment: Assessment) -> Result<(), StorageError> {
        lock(&self.assessments)?.insert(assessment.id(), assessment);
        Ok(())
    }

    /// Insert or replace a catalog row, keeping insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn upsert_listing(&self, listing: AssessmentListing) -> Result<(), StorageError> {
        let mut guard = lock(&self.listings)?;
        match guard.iter_mut().find(|row| row.id == listing.id) {
            Some(row) => *row = listing,
            None => guard.push(listing),
        }
        Ok(())
    }

    /// Insert or replace an application, keeping insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn upsert_application(&self, application: Application) -> Result<(), StorageError> {
        let mut guard = lock(&self.applications)?;
        match guard.iter_mut().find(|row| row.id == application.id) {
            Some(row) => *row = application,
            None => guard.push(application),
        }
        Ok(())
    }
}

#[async_trait]
impl AssessmentCatalog for InMemoryRepository {
    async fn get_assessment(&self, id: AssessmentId) -> Result<Assessment, StorageError> {
        lock(&self.assessments)?
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn list_assessments(&self) -> Result<Vec<AssessmentListing>, StorageError> {
        Ok(lock(&self.listings)?.clone())
    }
}

#[async_trait]
impl SubmissionRepository for InMemoryRepository {
    async fn append_submission(
        &self,
        submission: &AssessmentSubmission,
    ) -> Result<SubmissionId, StorageError> {
        let mut guard = lock(&self.submissions)?;
        if guard
            .iter()
            .any(|row| row.submission.assessment_id == submission.assessment_id)
        {
            return Err(StorageError::Conflict);
        }
        let id = guard
            .last()
            .map_or(1, |row| row.id.saturating_add(1));
        guard.push(SubmissionRow {
            id,
            submission: submission.clone(),
        });
        Ok(id)
    }

    async fn get_submission(&self, id: SubmissionId) -> Result<AssessmentSubmission, StorageError> {
        lock(&self.submissions)?
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.submission.clone())
            .ok_or(StorageError::NotFound)
    }

    async fn find_by_assessment(
        &self,
        assessment_id: AssessmentId,
    ) -> Result<Option<SubmissionRow>, StorageError> {
        Ok(lock(&self.submissions)?
            .iter()
            .find(|row| row.submission.assessment_id == assessment_id)
            .cloned())
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryRepository {
    async fn list_applications(&self) -> Result<Vec<Application>, StorageError> {
        Ok(lock(&self.applications)?.clone())
    }

    async fn get_application(&self, id: ApplicationId) -> Result<Application, StorageError> {
        lock(&self.applications)?
            .iter()
            .find(|app| app.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn mark_test_completed(
        &self,
        assessment_id: AssessmentId,
    ) -> Result<Option<ApplicationId>, StorageError> {
        let mut guard = lock(&self.applications)?;
        let Some(app) = guard
            .iter_mut()
            .find(|app| app.assessment_id() == Some(assessment_id))
        else {
            return Ok(None);
        };
        if let Some(link) = app.test.as_mut() {
            link.status = TestStatus::Completed;
        }
        Ok(Some(app.id))
    }
}

/// Aggregates providers behind trait objects so a real backend can be swapped in.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn AssessmentCatalog>,
    pub submissions: Arc<dyn SubmissionRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let catalog: Arc<dyn AssessmentCatalog> = Arc::new(repo.clone());
        let submissions: Arc<dyn SubmissionRepository> = Arc::new(repo.clone());
        let applications: Arc<dyn ApplicationRepository> = Arc::new(repo);
        Self {
            catalog,
            submissions,
            applications,
        }
    }
}
