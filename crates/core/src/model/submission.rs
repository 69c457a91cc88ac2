use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{AssessmentId, QuestionId};

/// Captured answers keyed by question.
///
/// Entries are inserted or overwritten, never removed. Any string is accepted,
/// including an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<QuestionId, String>);

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `question`, returning the previous value.
    pub fn record(&mut self, question: QuestionId, value: impl Into<String>) -> Option<String> {
        self.0.insert(question, value.into())
    }

    #[must_use]
    pub fn get(&self, question: QuestionId) -> Option<&str> {
        self.0.get(&question).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, question: QuestionId) -> bool {
        self.0.contains_key(&question)
    }

    /// Number of questions with a recorded value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.0.iter().map(|(id, value)| (*id, value.as_str()))
    }
}

/// Finalized answers handed to application tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub assessment_id: AssessmentId,
    pub answers: AnswerSheet,
    pub started_at: DateTime<Utc>,
    pub submitted_at: DateTime<Utc>,
}

impl AssessmentSubmission {
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_overwrites_and_reports_previous() {
        let mut sheet = AnswerSheet::new();
        assert_eq!(sheet.record(QuestionId::new(1), "a"), None);
        assert_eq!(sheet.record(QuestionId::new(1), "b"), Some("a".to_string()));
        assert_eq!(sheet.get(QuestionId::new(1)), Some("b"));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn empty_text_counts_as_recorded() {
        let mut sheet = AnswerSheet::new();
        sheet.record(QuestionId::new(5), "");
        assert!(sheet.contains(QuestionId::new(5)));
        assert_eq!(sheet.len(), 1);
    }
}
