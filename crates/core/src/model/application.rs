use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ids::{ApplicationId, AssessmentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    ApplicationSent,
    InReview,
    InterviewScheduled,
    OfferReceived,
    Rejected,
}

impl ApplicationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::ApplicationSent => "Application Sent",
            ApplicationStatus::InReview => "In Review",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::OfferReceived => "Offer Received",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Still waiting on the employer.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(
            self,
            ApplicationStatus::ApplicationSent
                | ApplicationStatus::InReview
                | ApplicationStatus::InterviewScheduled
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    NotStarted,
    Pending,
    Completed,
}

impl TestStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TestStatus::NotStarted => "Not Started",
            TestStatus::Pending => "Pending",
            TestStatus::Completed => "Completed",
        }
    }
}

/// Assessment attached to an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestLink {
    pub assessment_id: AssessmentId,
    pub status: TestStatus,
}

/// A job the candidate has applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub applied_on: NaiveDate,
    pub status: ApplicationStatus,
    pub interview_on: Option<NaiveDate>,
    pub test: Option<TestLink>,
}

impl Application {
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.job_title.to_lowercase().contains(&query)
            || self.company.to_lowercase().contains(&query)
    }

    #[must_use]
    pub fn assessment_id(&self) -> Option<AssessmentId> {
        self.test.map(|link| link.assessment_id)
    }
}
