use std::sync::Arc;

use jobdesk_core::model::{Application, ApplicationId};
use storage::repository::ApplicationRepository;

use crate::error::ApplicationError;

/// Tabs of the "my applications" page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApplicationTab {
    #[default]
    All,
    /// Sent, in review or interview scheduled.
    Active,
    /// Offer received or rejected.
    Closed,
}

impl ApplicationTab {
    pub const ALL: [ApplicationTab; 3] = [
        ApplicationTab::All,
        ApplicationTab::Active,
        ApplicationTab::Closed,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ApplicationTab::All => "All Applications",
            ApplicationTab::Active => "Active",
            ApplicationTab::Closed => "Closed",
        }
    }

    #[must_use]
    pub fn matches(self, application: &Application) -> bool {
        match self {
            ApplicationTab::All => true,
            ApplicationTab::Active => application.status.is_active(),
            ApplicationTab::Closed => !application.status.is_active(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub query: String,
    pub tab: ApplicationTab,
}

impl ApplicationFilter {
    #[must_use]
    pub fn new(query: impl Into<String>, tab: ApplicationTab) -> Self {
        Self {
            query: query.into(),
            tab,
        }
    }
}

/// Read-side service for the candidate's job applications.
#[derive(Clone)]
pub struct ApplicationService {
    applications: Arc<dyn ApplicationRepository>,
}

impl ApplicationService {
    #[must_use]
    pub fn new(applications: Arc<dyn ApplicationRepository>) -> Self {
        Self { applications }
    }

    /// # Errors
    ///
    /// Returns `ApplicationError::Storage` if repository access fails.
    pub async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<Application>, ApplicationError> {
        let rows = self.applications.list_applications().await?;
        Ok(rows
            .into_iter()
            .filter(|app| filter.tab.matches(app) && app.matches_query(&filter.query))
            .collect())
    }

    /// # Errors
    ///
    /// Returns `ApplicationError::Storage` (including `NotFound`) if the lookup fails.
    pub async fn get_application(&self, id: ApplicationId) -> Result<Application, ApplicationError> {
        Ok(self.applications.get_application(id).await?)
    }
}
