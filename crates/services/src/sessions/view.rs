use chrono::{DateTime, Utc};

use jobdesk_core::model::{Assessment, Question, QuestionId, QuestionKind};

/// Presentation-agnostic snapshot of the question under the pointer.
///
/// The UI decides how to render options, labels and empty answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentQuestion<'a> {
    /// 0-based position in the assessment.
    pub index: usize,
    pub question: &'a Question,
    pub answer: Option<&'a str>,
}

impl<'a> CurrentQuestion<'a> {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.question.id()
    }

    #[must_use]
    pub fn prompt(&self) -> &'a str {
        self.question.prompt()
    }

    #[must_use]
    pub fn kind(&self) -> &'a QuestionKind {
        self.question.kind()
    }

    #[must_use]
    pub fn options(&self) -> &'a [String] {
        self.question.options()
    }

    /// Current answer, or the empty string when nothing was captured yet.
    #[must_use]
    pub fn answer_or_empty(&self) -> &'a str {
        self.answer.unwrap_or("")
    }

    #[must_use]
    pub fn is_selected(&self, option: &str) -> bool {
        self.answer == Some(option)
    }
}

/// Data shown once an assessment has been submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedView {
    pub title: String,
    pub company: String,
    pub job_title: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedView {
    #[must_use]
    pub fn new(assessment: &Assessment, submitted_at: DateTime<Utc>) -> Self {
        Self {
            title: assessment.title().to_string(),
            company: assessment.company().to_string(),
            job_title: assessment.job_title().to_string(),
            submitted_at,
        }
    }
}

/// Static "MM:SS remaining" label for an assessment of `duration_minutes`.
///
/// The label is cosmetic: it is derived from the duration and never counts down.
#[must_use]
pub fn time_remaining_label(duration_minutes: u32) -> String {
    format!("{duration_minutes:02}:00 remaining")
}
