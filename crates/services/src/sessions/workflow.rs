use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

use jobdesk_core::model::{ApplicationId, AssessmentId};
use storage::repository::{
    ApplicationRepository, AssessmentCatalog, StorageError, SubmissionId, SubmissionRepository,
};

use super::service::AssessmentSession;
use super::state::{SessionEvent, Transition};
use crate::config::FlowConfig;
use crate::error::SessionError;
use crate::Clock;

/// Where the UI goes after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    MyApplications,
}

/// Deferred navigation the view schedules once the submitted screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectPlan {
    pub target: RedirectTarget,
    pub delay: Duration,
}

/// Result of a recorded submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub submission_id: SubmissionId,
    pub submitted_at: DateTime<Utc>,
    /// Application whose test was flipped to completed, if any links here.
    pub application_id: Option<ApplicationId>,
    pub redirect: RedirectPlan,
}

/// Orchestrates session start, event handling and submission recording.
#[derive(Clone)]
pub struct AssessmentFlowService {
    clock: Clock,
    config: FlowConfig,
    catalog: Arc<dyn AssessmentCatalog>,
    submissions: Arc<dyn SubmissionRepository>,
    applications: Arc<dyn ApplicationRepository>,
}

impl AssessmentFlowService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<dyn AssessmentCatalog>,
        submissions: Arc<dyn SubmissionRepository>,
        applications: Arc<dyn ApplicationRepository>,
    ) -> Self {
        Self {
            clock,
            config: FlowConfig::default(),
            catalog,
            submissions,
            applications,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: FlowConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> FlowConfig {
        self.config
    }

    #[must_use]
    pub fn redirect_plan(&self) -> RedirectPlan {
        RedirectPlan {
            target: RedirectTarget::MyApplications,
            delay: self.config.redirect_delay,
        }
    }

    /// Load an assessment and open a fresh session on it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadySubmitted` if this assessment was submitted
    /// before, `SessionError::Storage` for a missing assessment or provider
    /// failure, and `SessionError::Empty` for an assessment without questions.
    pub async fn start_session(
        &self,
        assessment_id: AssessmentId,
    ) -> Result<AssessmentSession, SessionError> {
        if self
            .submissions
            .find_by_assessment(assessment_id)
            .await?
            .is_some()
        {
            return Err(SessionError::AlreadySubmitted(assessment_id));
        }

        let assessment = self.catalog.get_assessment(assessment_id).await?;
        let session = AssessmentSession::new(Arc::new(assessment), self.clock.now())?;
        tracing::debug!(
            %assessment_id,
            questions = session.total_questions(),
            "assessment session started"
        );
        Ok(session)
    }

    /// Forward a UI event, stamping `ConfirmSubmit` with the clock.
    ///
    /// This only performs the local transition; use [`Self::confirm_submit`]
    /// to also record the submission.
    ///
    /// # Errors
    ///
    /// See [`AssessmentSession::apply`].
    pub fn apply(
        &self,
        session: &mut AssessmentSession,
        event: SessionEvent,
    ) -> Result<Transition, SessionError> {
        session.apply(event, self.clock.now())
    }

    /// Submit from the confirmation view and record the answers.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotConfirming` unless the confirmation is open,
    /// `SessionError::Submitted` when called again after success, and
    /// `SessionError::Storage` when recording fails. On a storage failure the
    /// session stays submitted; call [`Self::finalize_submission`] to retry.
    pub async fn confirm_submit(
        &self,
        session: &mut AssessmentSession,
    ) -> Result<SubmissionReceipt, SessionError> {
        session.confirm_submit(self.clock.now())?;
        self.finalize_submission(session).await
    }

    /// Record a submitted session that has not been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotSubmitted` before the terminal transition,
    /// `SessionError::Submitted` if this session was already recorded,
    /// `SessionError::AlreadySubmitted` if another session recorded the same
    /// assessment, and `SessionError::Storage` on provider failure.
    pub async fn finalize_submission(
        &self,
        session: &mut AssessmentSession,
    ) -> Result<SubmissionReceipt, SessionError> {
        if session.submission_id().is_some() {
            return Err(SessionError::Submitted);
        }
        let submission = session.to_submission()?;
        let assessment_id = submission.assessment_id;

        let submission_id = match self.submissions.append_submission(&submission).await {
            Ok(id) => id,
            Err(StorageError::Conflict) => {
                return Err(SessionError::AlreadySubmitted(assessment_id));
            }
            Err(err) => {
                tracing::warn!(%assessment_id, error = %err, "failed to record submission");
                return Err(err.into());
            }
        };
        session.set_submission_id(submission_id);

        let application_id = match self.applications.mark_test_completed(assessment_id).await {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(
                    %assessment_id,
                    error = %err,
                    "failed to mark application test completed"
                );
                None
            }
        };

        tracing::info!(
            %assessment_id,
            submission_id,
            answered = submission.answered_count(),
            total = session.total_questions(),
            "assessment submitted"
        );

        Ok(SubmissionReceipt {
            submission_id,
            submitted_at: submission.submitted_at,
            application_id,
            redirect: self.redirect_plan(),
        })
    }
}
