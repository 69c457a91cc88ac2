use std::sync::Arc;

use storage::repository::Storage;

use crate::application_service::ApplicationService;
use crate::catalog_service::CatalogService;
use crate::config::FlowConfig;
use crate::error::AppServicesError;
use crate::sessions::AssessmentFlowService;
use crate::Clock;

/// Assembles app-facing services over one storage aggregate.
#[derive(Clone)]
pub struct AppServices {
    flow: Arc<AssessmentFlowService>,
    catalog: Arc<CatalogService>,
    applications: Arc<ApplicationService>,
}

impl AppServices {
    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, config: FlowConfig) -> Self {
        let flow = Arc::new(
            AssessmentFlowService::new(
                clock,
                Arc::clone(&storage.catalog),
                Arc::clone(&storage.submissions),
                Arc::clone(&storage.applications),
            )
            .with_config(config),
        );
        let catalog = Arc::new(CatalogService::new(
            Arc::clone(&storage.catalog),
            Arc::clone(&storage.submissions),
        ));
        let applications = Arc::new(ApplicationService::new(Arc::clone(&storage.applications)));

        Self {
            flow,
            catalog,
            applications,
        }
    }

    /// Build services over in-memory storage seeded with the sample data set.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::SampleData` if seeding fails.
    pub fn with_sample_data(clock: Clock, config: FlowConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::with_sample_data()?;
        Ok(Self::from_storage(&storage, clock, config))
    }

    #[must_use]
    pub fn flow(&self) -> Arc<AssessmentFlowService> {
        Arc::clone(&self.flow)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn applications(&self) -> Arc<ApplicationService> {
        Arc::clone(&self.applications)
    }
}
