mod applications;
mod assessment;
mod assessments;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use applications::ApplicationsView;
pub use assessment::TakeAssessmentView;
pub use assessments::AssessmentsView;
pub use state::{view_state_from_resource, ViewError, ViewState};
