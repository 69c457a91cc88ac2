use chrono::{DateTime, Utc};

use super::progress::SubmitSummary;

/// Lifecycle of an assessment session.
///
/// A single variant makes "submitted with the dialog still open" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    /// Confirmation view is open with the counts captured when it opened.
    ConfirmPending { summary: SubmitSummary },
    /// Terminal.
    Submitted { submitted_at: DateTime<Utc> },
}

impl SessionState {
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, SessionState::InProgress)
    }

    #[must_use]
    pub fn is_confirm_pending(&self) -> bool {
        matches!(self, SessionState::ConfirmPending { .. })
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self, SessionState::Submitted { .. })
    }
}

/// Discrete user input delivered to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Select an option or replace the free-text content of the current question.
    Answer(String),
    Next,
    Previous,
    RequestSubmit,
    Cancel,
    ConfirmSubmit,
}

/// What an accepted event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Answered,
    Moved { index: usize },
    /// Accepted but nothing changed (`Next` on the last question, `Previous` on the first).
    Unchanged,
    ConfirmOpened(SubmitSummary),
    ConfirmClosed,
    Submitted { submitted_at: DateTime<Utc> },
}
