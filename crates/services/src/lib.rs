#![forbid(unsafe_code)]

pub mod app_services;
pub mod application_service;
pub mod catalog_service;
pub mod config;
pub mod error;
pub mod sessions;

pub use jobdesk_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use application_service::{ApplicationFilter, ApplicationService, ApplicationTab};
pub use catalog_service::{AssessmentFilter, CatalogService, StatusFilter};
pub use config::{FlowConfig, DEFAULT_REDIRECT_DELAY};
pub use error::{AppServicesError, ApplicationError, CatalogError, SessionError};

pub use sessions::{
    AssessmentFlowService, AssessmentSession, CurrentQuestion, RedirectPlan, RedirectTarget,
    SessionEvent, SessionProgress, SessionState, SubmissionReceipt, SubmitSummary, SubmittedView,
    Transition,
};
