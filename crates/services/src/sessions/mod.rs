mod progress;
mod service;
mod state;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::{progress_percent, SessionProgress, SubmitSummary};
pub use service::AssessmentSession;
pub use state::{SessionEvent, SessionState, Transition};
pub use view::{time_remaining_label, CurrentQuestion, SubmittedView};
pub use workflow::{AssessmentFlowService, RedirectPlan, RedirectTarget, SubmissionReceipt};
