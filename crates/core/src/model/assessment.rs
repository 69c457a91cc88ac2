use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{AssessmentId, QuestionId};
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("assessment title cannot be empty")]
    EmptyTitle,

    #[error("assessment must contain at least one question")]
    NoQuestions,

    #[error("duplicate question id {0}")]
    DuplicateQuestion(QuestionId),

    #[error("duration must be > 0 minutes")]
    InvalidDuration,
}

//
// ─── METADATA ──────────────────────────────────────────────────────────────────
//

/// Read-only display data attached to an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDetails {
    pub title: String,
    pub company: String,
    pub job_title: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub due_date: NaiveDate,
    pub duration_minutes: u32,
}

//
// ─── ASSESSMENT ────────────────────────────────────────────────────────────────
//

/// A fixed, ordered set of questions attached to one job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    id: AssessmentId,
    details: AssessmentDetails,
    questions: Vec<Question>,
}

impl Assessment {
    /// # Errors
    ///
    /// Returns `AssessmentError` when the title is blank, the duration is zero,
    /// there are no questions, or two questions share an id.
    pub fn new(
        id: AssessmentId,
        details: AssessmentDetails,
        questions: Vec<Question>,
    ) -> Result<Self, AssessmentError> {
        if details.title.trim().is_empty() {
            return Err(AssessmentError::EmptyTitle);
        }
        if details.duration_minutes == 0 {
            return Err(AssessmentError::InvalidDuration);
        }
        if questions.is_empty() {
            return Err(AssessmentError::NoQuestions);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(AssessmentError::DuplicateQuestion(question.id()));
            }
        }

        Ok(Self {
            id,
            details,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> AssessmentId {
        self.id
    }

    #[must_use]
    pub fn details(&self) -> &AssessmentDetails {
        &self.details
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.details.title
    }

    #[must_use]
    pub fn company(&self) -> &str {
        &self.details.company
    }

    #[must_use]
    pub fn job_title(&self) -> &str {
        &self.details.job_title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn contains_question(&self, id: QuestionId) -> bool {
        self.questions.iter().any(|q| q.id() == id)
    }
}
