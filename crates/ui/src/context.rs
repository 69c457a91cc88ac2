use std::sync::{Arc, Mutex};

use jobdesk_core::model::AssessmentId;
use services::{ApplicationService, AssessmentFlowService, CatalogService};

pub trait UiApp: Send + Sync {
    /// Assessment to open once on launch, if any.
    fn start_assessment(&self) -> Option<AssessmentId>;

    fn flow(&self) -> Arc<AssessmentFlowService>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn applications(&self) -> Arc<ApplicationService>;
}

#[derive(Clone)]
pub struct AppContext {
    start_assessment_configured: Option<AssessmentId>,
    start_assessment_once: Arc<Mutex<Option<AssessmentId>>>,

    flow: Arc<AssessmentFlowService>,
    catalog: Arc<CatalogService>,
    applications: Arc<ApplicationService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let start_assessment_configured = app.start_assessment();

        Self {
            start_assessment_configured,
            start_assessment_once: Arc::new(Mutex::new(start_assessment_configured)),
            flow: app.flow(),
            catalog: app.catalog(),
            applications: app.applications(),
        }
    }

    /// Returns the launch assessment the first time it is called, `None` afterwards.
    #[must_use]
    pub fn take_start_assessment(&self) -> Option<AssessmentId> {
        self.start_assessment_once
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }

    /// The configured value (not the one-shot value).
    #[must_use]
    pub fn start_assessment_configured(&self) -> Option<AssessmentId> {
        self.start_assessment_configured
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
