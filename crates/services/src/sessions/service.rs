use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use jobdesk_core::model::{AnswerSheet, Assessment, AssessmentSubmission, Question};
use storage::repository::SubmissionId;

use super::progress::{SessionProgress, SubmitSummary};
use super::state::{SessionEvent, SessionState, Transition};
use super::view::{time_remaining_label, CurrentQuestion, SubmittedView};
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One candidate attempt at one assessment.
///
/// Holds the question pointer, captured answers and lifecycle state. The
/// pointer always addresses a real question. Once `Submitted`, every event is
/// rejected and neither answers nor the pointer change again.
pub struct AssessmentSession {
    assessment: Arc<Assessment>,
    current: usize,
    answers: AnswerSheet,
    state: SessionState,
    started_at: DateTime<Utc>,
    submission_id: Option<SubmissionId>,
}

impl AssessmentSession {
    /// Start a session on the first question with no answers.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the assessment has no questions.
    pub fn new(assessment: Arc<Assessment>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if assessment.is_empty() {
            return Err(SessionError::Empty);
        }
        Ok(Self {
            assessment,
            current: 0,
            answers: AnswerSheet::new(),
            state: SessionState::InProgress,
            started_at,
            submission_id: None,
        })
    }

    #[must_use]
    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.assessment.len()
    }

    fn last_index(&self) -> usize {
        self.total_questions().saturating_sub(1)
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn current_question(&self) -> CurrentQuestion<'_> {
        let question: &Question = &self.assessment.questions()[self.current];
        CurrentQuestion {
            index: self.current,
            question,
            answer: self.answers.get(question.id()),
        }
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current == self.last_index()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::at(self.current, self.total_questions())
    }

    /// Fixed timer label; it does not count down.
    #[must_use]
    pub fn time_remaining_label(&self) -> String {
        time_remaining_label(self.assessment.details().duration_minutes)
    }

    /// Counts as they stand right now, whatever the state.
    #[must_use]
    pub fn submit_summary(&self) -> SubmitSummary {
        SubmitSummary::new(self.total_questions(), self.answers.len())
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.state.is_submitted()
    }

    #[must_use]
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            SessionState::Submitted { submitted_at } => Some(submitted_at),
            _ => None,
        }
    }

    #[must_use]
    pub fn submitted_view(&self) -> Option<SubmittedView> {
        self.submitted_at()
            .map(|submitted_at| SubmittedView::new(&self.assessment, submitted_at))
    }

    #[must_use]
    pub fn submission_id(&self) -> Option<SubmissionId> {
        self.submission_id
    }

    pub(crate) fn set_submission_id(&mut self, id: SubmissionId) {
        self.submission_id = Some(id);
    }

    /// Snapshot handed to application tracking once submitted.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotSubmitted` before the terminal transition.
    pub fn to_submission(&self) -> Result<AssessmentSubmission, SessionError> {
        let submitted_at = self.submitted_at().ok_or(SessionError::NotSubmitted)?;
        Ok(AssessmentSubmission {
            assessment_id: self.assessment.id(),
            answers: self.answers.clone(),
            started_at: self.started_at,
            submitted_at,
        })
    }

    //
    // ─── TRANSITIONS ──────────────────────────────────────────────────────────
    //

    /// Feed one input event to the state machine.
    ///
    /// `at` is only read by `ConfirmSubmit`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Submitted` for any event after submission,
    /// `SessionError::ConfirmPending` for answer/navigation/request events while
    /// the confirmation is open, and `SessionError::NotConfirming` for
    /// cancel/confirm while it is not. A rejected event leaves the session as it was.
    pub fn apply(
        &mut self,
        event: SessionEvent,
        at: DateTime<Utc>,
    ) -> Result<Transition, SessionError> {
        let transition = match (self.state, event) {
            (SessionState::Submitted { .. }, _) => return Err(SessionError::Submitted),

            (SessionState::InProgress, SessionEvent::Answer(value)) => {
                let id = self.assessment.questions()[self.current].id();
                self.answers.record(id, value);
                Transition::Answered
            }
            (SessionState::InProgress, SessionEvent::Next) => {
                if self.current < self.last_index() {
                    self.current += 1;
                    Transition::Moved {
                        index: self.current,
                    }
                } else {
                    Transition::Unchanged
                }
            }
            (SessionState::InProgress, SessionEvent::Previous) => {
                if self.current > 0 {
                    self.current -= 1;
                    Transition::Moved {
                        index: self.current,
                    }
                } else {
                    Transition::Unchanged
                }
            }
            (SessionState::InProgress, SessionEvent::RequestSubmit) => {
                let summary = self.submit_summary();
                self.state = SessionState::ConfirmPending { summary };
                Transition::ConfirmOpened(summary)
            }
            (SessionState::InProgress, SessionEvent::Cancel | SessionEvent::ConfirmSubmit) => {
                return Err(SessionError::NotConfirming);
            }

            (SessionState::ConfirmPending { .. }, SessionEvent::Cancel) => {
                self.state = SessionState::InProgress;
                Transition::ConfirmClosed
            }
            (SessionState::ConfirmPending { .. }, SessionEvent::ConfirmSubmit) => {
                self.state = SessionState::Submitted { submitted_at: at };
                Transition::Submitted { submitted_at: at }
            }
            (
                SessionState::ConfirmPending { .. },
                SessionEvent::Answer(_)
                | SessionEvent::Next
                | SessionEvent::Previous
                | SessionEvent::RequestSubmit,
            ) => return Err(SessionError::ConfirmPending),
        };

        tracing::debug!(
            assessment_id = %self.assessment.id(),
            index = self.current,
            answered = self.answers.len(),
            ?transition,
            "session transition"
        );
        Ok(transition)
    }

    /// # Errors
    ///
    /// See [`AssessmentSession::apply`].
    pub fn answer(&mut self, value: impl Into<String>) -> Result<Transition, SessionError> {
        self.apply(SessionEvent::Answer(value.into()), self.started_at)
    }

    /// # Errors
    ///
    /// See [`AssessmentSession::apply`].
    pub fn next(&mut self) -> Result<Transition, SessionError> {
        self.apply(SessionEvent::Next, self.started_at)
    }

    /// # Errors
    ///
    /// See [`AssessmentSession::apply`].
    pub fn previous(&mut self) -> Result<Transition, SessionError> {
        self.apply(SessionEvent::Previous, self.started_at)
    }

    /// # Errors
    ///
    /// See [`AssessmentSession::apply`].
    pub fn request_submit(&mut self) -> Result<SubmitSummary, SessionError> {
        match self.apply(SessionEvent::RequestSubmit, self.started_at)? {
            Transition::ConfirmOpened(summary) => Ok(summary),
            _ => Err(SessionError::NotConfirming),
        }
    }

    /// # Errors
    ///
    /// See [`AssessmentSession::apply`].
    pub fn cancel(&mut self) -> Result<Transition, SessionError> {
        self.apply(SessionEvent::Cancel, self.started_at)
    }

    /// # Errors
    ///
    /// See [`AssessmentSession::apply`].
    pub fn confirm_submit(&mut self, at: DateTime<Utc>) -> Result<DateTime<Utc>, SessionError> {
        match self.apply(SessionEvent::ConfirmSubmit, at)? {
            Transition::Submitted { submitted_at } => Ok(submitted_at),
            _ => Err(SessionError::NotConfirming),
        }
    }
}

impl fmt::Debug for AssessmentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentSession")
            .field("assessment_id", &self.assessment.id())
            .field("questions", &self.assessment.len())
            .field("current", &self.current)
            .field("answered", &self.answers.len())
            .field("state", &self.state)
            .field("submission_id", &self.submission_id)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jobdesk_core::model::QuestionId;
    use jobdesk_core::time::fixed_now;
    use storage::sample::frontend_assessment;

    fn build_session() -> AssessmentSession {
        AssessmentSession::new(Arc::new(frontend_assessment().unwrap()), fixed_now()).unwrap()
    }

    fn snapshot(session: &AssessmentSession) -> (usize, AnswerSheet, SessionState) {
        (
            session.current_index(),
            session.answers().clone(),
            session.state(),
        )
    }

    #[test]
    fn starts_on_first_question_with_no_answers() {
        let session = build_session();
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.current_question().answer, None);
        assert!(session.is_first());
        assert_eq!(session.time_remaining_label(), "60:00 remaining");
    }

    #[test]
    fn navigation_is_clamped_at_both_ends() {
        let mut session = build_session();
        assert_eq!(session.previous().unwrap(), Transition::Unchanged);
        assert_eq!(session.current_index(), 0);

        for expected in 1..8 {
            assert_eq!(session.next().unwrap(), Transition::Moved { index: expected });
        }
        assert!(session.is_last());
        assert_eq!(session.next().unwrap(), Transition::Unchanged);
        assert_eq!(session.current_index(), 7);
    }

    #[test]
    fn arbitrary_navigation_stays_in_range() {
        let mut session = build_session();
        // Deterministic pseudo-random walk.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 2 == 0 {
                session.next().unwrap();
            } else {
                session.previous().unwrap();
            }
            assert!(session.current_index() < session.total_questions());
        }
    }

    #[test]
    fn answers_track_latest_value_per_question() {
        let mut session = build_session();
        session.answer("useState").unwrap();
        session.answer("useReactState").unwrap();
        session.next().unwrap();
        session.answer("Cascading Style Sheets").unwrap();

        assert_eq!(session.answers().get(QuestionId::new(1)), Some("useReactState"));
        assert_eq!(
            session.answers().get(QuestionId::new(2)),
            Some("Cascading Style Sheets")
        );

        session.previous().unwrap();
        assert_eq!(session.current_question().answer, Some("useReactState"));
        session.answer("useContext").unwrap();
        assert_eq!(
            session.answers().get(QuestionId::new(2)),
            Some("Cascading Style Sheets")
        );
    }

    #[test]
    fn answers_are_not_checked_against_the_key() {
        let mut session = build_session();
        session.answer("definitely not an option").unwrap();
        assert_eq!(
            session.answers().get(QuestionId::new(1)),
            Some("definitely not an option")
        );
    }

    #[test]
    fn progress_is_derived_from_index() {
        let mut session = build_session();
        assert_eq!(session.progress().percent, 13);
        assert_eq!(session.progress().position, 1);
        for _ in 0..7 {
            session.next().unwrap();
        }
        assert_eq!(session.progress().percent, 100);
        assert_eq!(session.progress().position, 8);
    }

    #[test]
    fn partial_answers_warn_but_submit() {
        let mut session = build_session();
        for value in ["useReactState", "Cascading Style Sheets", "All of the above"] {
            session.answer(value).unwrap();
            session.next().unwrap();
        }

        let summary = session.request_submit().unwrap();
        assert_eq!(summary.total, 8);
        assert_eq!(summary.answered, 3);
        assert_eq!(summary.unanswered, 5);
        assert!(summary.warn_unanswered);

        let at = fixed_now() + Duration::minutes(20);
        assert_eq!(session.confirm_submit(at).unwrap(), at);
        assert!(session.is_submitted());
        assert_eq!(session.submitted_at(), Some(at));
    }

    #[test]
    fn all_answered_has_no_warning() {
        let mut session = build_session();
        for index in 0..8 {
            session.answer(format!("answer {index}")).unwrap();
            session.next().unwrap();
        }
        let summary = session.request_submit().unwrap();
        assert_eq!(summary.answered, 8);
        assert_eq!(summary.unanswered, 0);
        assert!(!summary.warn_unanswered);
    }

    #[test]
    fn submitting_with_nothing_answered_succeeds() {
        let mut session = build_session();
        let summary = session.request_submit().unwrap();
        assert_eq!(summary.answered, 0);
        assert_eq!(summary.unanswered, 8);
        session.confirm_submit(fixed_now()).unwrap();
        assert!(session.is_submitted());
    }

    #[test]
    fn cancel_restores_pre_confirmation_state() {
        let mut session = build_session();
        session.answer("useState").unwrap();
        session.next().unwrap();
        session.next().unwrap();
        let before = snapshot(&session);

        session.request_submit().unwrap();
        assert!(session.state().is_confirm_pending());
        assert_eq!(session.cancel().unwrap(), Transition::ConfirmClosed);

        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn confirmation_blocks_answers_and_navigation() {
        let mut session = build_session();
        session.request_submit().unwrap();
        let before = snapshot(&session);

        assert!(matches!(session.answer("x"), Err(SessionError::ConfirmPending)));
        assert!(matches!(session.next(), Err(SessionError::ConfirmPending)));
        assert!(matches!(session.previous(), Err(SessionError::ConfirmPending)));
        assert!(matches!(
            session.request_submit(),
            Err(SessionError::ConfirmPending)
        ));
        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn cancel_and_confirm_need_an_open_confirmation() {
        let mut session = build_session();
        assert!(matches!(session.cancel(), Err(SessionError::NotConfirming)));
        assert!(matches!(
            session.confirm_submit(fixed_now()),
            Err(SessionError::NotConfirming)
        ));
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn submitted_session_ignores_every_event() {
        let mut session = build_session();
        session.answer("useState").unwrap();
        session.next().unwrap();
        session.request_submit().unwrap();
        session.confirm_submit(fixed_now()).unwrap();
        let before = snapshot(&session);

        let events = [
            SessionEvent::Answer("late".into()),
            SessionEvent::Next,
            SessionEvent::Previous,
            SessionEvent::RequestSubmit,
            SessionEvent::Cancel,
            SessionEvent::ConfirmSubmit,
        ];
        for event in events {
            let err = session
                .apply(event, fixed_now() + Duration::hours(1))
                .unwrap_err();
            assert!(matches!(err, SessionError::Submitted));
        }
        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn counts_add_up_in_every_state() {
        let mut session = build_session();
        let check = |s: &AssessmentSession| {
            let summary = s.submit_summary();
            assert_eq!(summary.answered + summary.unanswered, summary.total);
        };
        check(&session);
        session.answer("a").unwrap();
        check(&session);
        session.request_submit().unwrap();
        check(&session);
        session.cancel().unwrap();
        session.next().unwrap();
        session.answer("b").unwrap();
        check(&session);
        session.request_submit().unwrap();
        session.confirm_submit(fixed_now()).unwrap();
        check(&session);
    }

    #[test]
    fn submission_snapshot_requires_terminal_state() {
        let mut session = build_session();
        session.answer("useState").unwrap();
        assert!(matches!(
            session.to_submission(),
            Err(SessionError::NotSubmitted)
        ));

        session.request_submit().unwrap();
        session.confirm_submit(fixed_now()).unwrap();
        let submission = session.to_submission().unwrap();
        assert_eq!(submission.assessment_id, session.assessment().id());
        assert_eq!(submission.answered_count(), 1);
        assert_eq!(submission.submitted_at, fixed_now());
    }

    #[test]
    fn submitted_view_carries_display_data() {
        let mut session = build_session();
        assert!(session.submitted_view().is_none());
        session.request_submit().unwrap();
        session.confirm_submit(fixed_now()).unwrap();

        let view = session.submitted_view().unwrap();
        assert_eq!(view.title, "Frontend Development Assessment");
        assert_eq!(view.company, "TechCorp");
        assert_eq!(view.job_title, "Senior Frontend Developer");
        assert_eq!(view.submitted_at, fixed_now());
    }
}
