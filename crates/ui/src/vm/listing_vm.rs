use jobdesk_core::model::{AssessmentListing, AssessmentStatus};

use crate::vm::time_fmt::{format_date, format_minutes};

/// Call to action on an assessment card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingAction {
    Start,
    Continue,
    ViewResults,
    /// Rendered disabled.
    Expired,
}

impl ListingAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ListingAction::Start => "Start Assessment",
            ListingAction::Continue => "Continue",
            ListingAction::ViewResults => "View Results",
            ListingAction::Expired => "Expired",
        }
    }

    /// Whether the action opens the taking screen.
    #[must_use]
    pub fn opens_assessment(self) -> bool {
        matches!(self, ListingAction::Start | ListingAction::Continue)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingCardVm {
    pub id: u64,
    pub title: String,
    pub company_line: String,
    pub due_label: String,
    pub duration_label: String,
    pub questions_label: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    /// Catalog-provided progress for in-progress rows.
    pub progress: Option<u8>,
    pub score_label: Option<String>,
    pub action: ListingAction,
}

impl From<&AssessmentListing> for ListingCardVm {
    fn from(listing: &AssessmentListing) -> Self {
        let (status_class, progress, score_label, action) = match listing.status {
            AssessmentStatus::NotStarted => ("status-not-started", None, None, ListingAction::Start),
            AssessmentStatus::InProgress { progress } => (
                "status-in-progress",
                Some(progress),
                None,
                ListingAction::Continue,
            ),
            AssessmentStatus::Completed { score } => (
                "status-completed",
                None,
                score.map(|score| format!("Score: {score}%")),
                ListingAction::ViewResults,
            ),
            AssessmentStatus::Expired => ("status-expired", None, None, ListingAction::Expired),
        };

        Self {
            id: listing.id.value(),
            title: listing.title.clone(),
            company_line: format!("{} • {}", listing.company, listing.job_title),
            due_label: format!("Due {}", format_date(listing.due_date)),
            duration_label: format_minutes(listing.duration_minutes),
            questions_label: format!("{} questions", listing.question_count),
            status_label: listing.status.kind().label(),
            status_class,
            progress,
            score_label,
            action,
        }
    }
}

#[must_use]
pub fn map_listing_cards(listings: &[AssessmentListing]) -> Vec<ListingCardVm> {
    listings.iter().map(ListingCardVm::from).collect()
}
