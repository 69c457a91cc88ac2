use jobdesk_core::model::{AssessmentId, QuestionKind};
use services::{
    AssessmentFlowService, AssessmentSession, SessionEvent, SessionState, SubmissionReceipt,
    SubmitSummary, Transition,
};

use super::time_fmt::format_datetime;
use crate::views::ViewError;

/// User input on the assessment screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    /// Option click or text-area edit for the current question.
    Answer(String),
    Next,
    Previous,
    RequestSubmit,
    Cancel,
    ConfirmSubmit,
}

impl AssessmentIntent {
    fn into_event(self) -> SessionEvent {
        match self {
            AssessmentIntent::Answer(value) => SessionEvent::Answer(value),
            AssessmentIntent::Next => SessionEvent::Next,
            AssessmentIntent::Previous => SessionEvent::Previous,
            AssessmentIntent::RequestSubmit => SessionEvent::RequestSubmit,
            AssessmentIntent::Cancel => SessionEvent::Cancel,
            AssessmentIntent::ConfirmSubmit => SessionEvent::ConfirmSubmit,
        }
    }
}

/// Which panel the taking screen shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentPhase {
    Answering,
    Confirming,
    Submitted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerInputVm {
    Choices(Vec<OptionVm>),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number_label: String,
    pub kind_label: &'static str,
    pub prompt: String,
    pub input: AnswerInputVm,
    pub is_first: bool,
    pub is_last: bool,
    pub progress_percent: u8,
    pub progress_label: String,
}

pub const UNANSWERED_WARNING: &str =
    "You have unanswered questions. It's recommended to answer all questions before submitting.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmVm {
    pub total: usize,
    pub answered: usize,
    pub unanswered: usize,
    /// Shown but never blocks submission.
    pub warning: Option<&'static str>,
}

impl ConfirmVm {
    #[must_use]
    pub fn from_summary(summary: SubmitSummary) -> Self {
        Self {
            total: summary.total,
            answered: summary.answered,
            unanswered: summary.unanswered,
            warning: summary.warn_unanswered.then_some(UNANSWERED_WARNING),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedVm {
    pub title: String,
    pub company: String,
    pub job_title: String,
    pub submitted_label: String,
}

/// Header shown above every panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentHeaderVm {
    pub title: String,
    pub company_line: String,
    pub timer_label: String,
}

/// Owns one assessment session for the lifetime of the taking screen.
pub struct AssessmentVm {
    session: AssessmentSession,
    receipt: Option<SubmissionReceipt>,
}

impl AssessmentVm {
    #[must_use]
    pub fn new(session: AssessmentSession) -> Self {
        Self {
            session,
            receipt: None,
        }
    }

    #[must_use]
    pub fn assessment_id(&self) -> AssessmentId {
        self.session.assessment().id()
    }

    #[must_use]
    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    #[must_use]
    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> AssessmentPhase {
        match self.session.state() {
            SessionState::InProgress => AssessmentPhase::Answering,
            SessionState::ConfirmPending { .. } => AssessmentPhase::Confirming,
            SessionState::Submitted { .. } => AssessmentPhase::Submitted,
        }
    }

    #[must_use]
    pub fn header(&self) -> AssessmentHeaderVm {
        let assessment = self.session.assessment();
        AssessmentHeaderVm {
            title: assessment.title().to_string(),
            company_line: format!("{} • {}", assessment.company(), assessment.job_title()),
            timer_label: self.session.time_remaining_label(),
        }
    }

    #[must_use]
    pub fn question(&self) -> QuestionVm {
        let current = self.session.current_question();
        let progress = self.session.progress();
        let input = match current.kind() {
            QuestionKind::MultipleChoice { options, .. } => AnswerInputVm::Choices(
                options
                    .iter()
                    .map(|option| OptionVm {
                        label: option.clone(),
                        selected: current.is_selected(option),
                    })
                    .collect(),
            ),
            QuestionKind::FreeText => AnswerInputVm::Text(current.answer_or_empty().to_string()),
        };

        QuestionVm {
            number_label: format!("Question {} of {}", progress.position, progress.total),
            kind_label: current.kind().label(),
            prompt: current.prompt().to_string(),
            input,
            is_first: self.session.is_first(),
            is_last: self.session.is_last(),
            progress_percent: progress.percent,
            progress_label: format!("{}% Complete", progress.percent),
        }
    }

    #[must_use]
    pub fn confirm(&self) -> Option<ConfirmVm> {
        match self.session.state() {
            SessionState::ConfirmPending { summary } => Some(ConfirmVm::from_summary(summary)),
            _ => None,
        }
    }

    #[must_use]
    pub fn submitted(&self) -> Option<SubmittedVm> {
        self.session.submitted_view().map(|view| SubmittedVm {
            submitted_label: format_datetime(view.submitted_at),
            title: view.title,
            company: view.company,
            job_title: view.job_title,
        })
    }

    /// Apply a local intent.
    ///
    /// `ConfirmSubmit` must go through [`Self::submit`] so the answers get recorded.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the session rejects the event.
    pub fn apply(
        &mut self,
        flow: &AssessmentFlowService,
        intent: AssessmentIntent,
    ) -> Result<Transition, ViewError> {
        flow.apply(&mut self.session, intent.into_event())
            .map_err(|err| ViewError::from(&err))
    }

    /// Confirm, or retry recording a session that is already submitted.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` when the transition or the write fails.
    pub async fn submit(
        &mut self,
        flow: &AssessmentFlowService,
    ) -> Result<SubmissionReceipt, ViewError> {
        if let Some(receipt) = &self.receipt {
            return Ok(receipt.clone());
        }
        let result = if self.session.is_submitted() {
            flow.finalize_submission(&mut self.session).await
        } else {
            flow.confirm_submit(&mut self.session).await
        };
        let receipt = result.map_err(|err| ViewError::from(&err))?;
        self.receipt = Some(receipt.clone());
        Ok(receipt)
    }
}

/// # Errors
///
/// Returns `ViewError::NotFound` for an unknown id, `ViewError::AlreadySubmitted`
/// for a retake, and `ViewError::Unknown` for other failures.
pub async fn start_assessment(
    flow: &AssessmentFlowService,
    assessment_id: AssessmentId,
) -> Result<AssessmentVm, ViewError> {
    let session = flow
        .start_session(assessment_id)
        .await
        .map_err(|err| ViewError::from(&err))?;
    Ok(AssessmentVm::new(session))
}
