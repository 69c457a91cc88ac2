use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ids::AssessmentId;

/// Lifecycle of an assessment as shown in the candidate's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssessmentStatus {
    NotStarted,
    InProgress { progress: u8 },
    /// `score` is opaque catalog data; nothing in this workspace computes it.
    Completed { score: Option<u8> },
    Expired,
}

impl AssessmentStatus {
    #[must_use]
    pub fn kind(self) -> StatusKind {
        match self {
            AssessmentStatus::NotStarted => StatusKind::NotStarted,
            AssessmentStatus::InProgress { .. } => StatusKind::InProgress,
            AssessmentStatus::Completed { .. } => StatusKind::Completed,
            AssessmentStatus::Expired => StatusKind::Expired,
        }
    }

    /// Whether the candidate may open the taking screen.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(
            self,
            AssessmentStatus::NotStarted | AssessmentStatus::InProgress { .. }
        )
    }
}

/// Payload-free status discriminant, used by filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    NotStarted,
    InProgress,
    Completed,
    Expired,
}

impl StatusKind {
    pub const ALL: [StatusKind; 4] = [
        StatusKind::NotStarted,
        StatusKind::InProgress,
        StatusKind::Completed,
        StatusKind::Expired,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StatusKind::NotStarted => "Not Started",
            StatusKind::InProgress => "In Progress",
            StatusKind::Completed => "Completed",
            StatusKind::Expired => "Expired",
        }
    }

    /// Parse a filter value such as `"in progress"` or `"in_progress"`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().to_lowercase() == normalized)
    }
}

/// Catalog row for one assessment; carries no questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentListing {
    pub id: AssessmentId,
    pub title: String,
    pub company: String,
    pub job_title: String,
    pub due_date: NaiveDate,
    pub duration_minutes: u32,
    pub question_count: u32,
    pub status: AssessmentStatus,
}

impl AssessmentListing {
    /// Case-insensitive substring match over title, company and job title.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.title, &self.company, &self.job_title]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}
