use std::sync::Arc;

use jobdesk_core::model::{AssessmentListing, AssessmentStatus, StatusKind};
use storage::repository::{AssessmentCatalog, SubmissionRepository};

use crate::error::CatalogError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(StatusKind),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: AssessmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(kind) => status.kind() == kind,
        }
    }
}

/// Search box plus status dropdown of the assessments page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssessmentFilter {
    pub query: String,
    pub status: StatusFilter,
}

impl AssessmentFilter {
    #[must_use]
    pub fn new(query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    #[must_use]
    pub fn matches(&self, listing: &AssessmentListing) -> bool {
        self.status.matches(listing.status) && listing.matches_query(&self.query)
    }
}

/// Read-side service for the candidate's assessment catalog.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn AssessmentCatalog>,
    submissions: Arc<dyn SubmissionRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(
        catalog: Arc<dyn AssessmentCatalog>,
        submissions: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            catalog,
            submissions,
        }
    }

    /// List catalog rows matching `filter`, in catalog order.
    ///
    /// Rows whose assessment has a recorded submission are reported as
    /// completed before filtering; a score already present in the catalog is kept.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if a provider fails.
    pub async fn list_assessments(
        &self,
        filter: &AssessmentFilter,
    ) -> Result<Vec<AssessmentListing>, CatalogError> {
        let rows = self.catalog.list_assessments().await?;
        let mut out = Vec::with_capacity(rows.len());
        for mut row in rows {
            if !matches!(row.status, AssessmentStatus::Completed { .. })
                && self.submissions.find_by_assessment(row.id).await?.is_some()
            {
                row.status = AssessmentStatus::Completed { score: None };
            }
            if filter.matches(&row) {
                out.push(row);
            }
        }
        Ok(out)
    }
}
