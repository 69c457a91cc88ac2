use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("multiple-choice question {id} has no options")]
    NoOptions { id: QuestionId },
}

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Pick one of the ordered options.
    ///
    /// `answer_key` comes from the catalog and is kept for display/export only;
    /// sessions never read it.
    MultipleChoice {
        options: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        answer_key: Option<String>,
    },
    /// Free-form text response.
    FreeText,
}

impl QuestionKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "Multiple Choice",
            QuestionKind::FreeText => "Text Response",
        }
    }
}

/// A single assessment question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
}

impl Question {
    /// Build a multiple-choice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt and
    /// `QuestionError::NoOptions` when `options` is empty.
    pub fn multiple_choice<I, S>(
        id: QuestionId,
        prompt: impl Into<String>,
        options: I,
        answer_key: Option<String>,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(QuestionError::NoOptions { id });
        }
        Self::build(id, prompt, QuestionKind::MultipleChoice { options, answer_key })
    }

    /// Build a free-text question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt.
    pub fn free_text(id: QuestionId, prompt: impl Into<String>) -> Result<Self, QuestionError> {
        Self::build(id, prompt, QuestionKind::FreeText)
    }

    fn build(
        id: QuestionId,
        prompt: impl Into<String>,
        kind: QuestionKind,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        Ok(Self { id, prompt, kind })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Options for multiple-choice questions, empty for free text.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            QuestionKind::FreeText => &[],
        }
    }

    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }

    #[must_use]
    pub fn answer_key(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::MultipleChoice { answer_key, .. } => answer_key.as_deref(),
            QuestionKind::FreeText => None,
        }
    }
}
