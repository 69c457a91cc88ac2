use jobdesk_core::model::{Application, ApplicationStatus, TestStatus};

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationTestVm {
    pub status_label: &'static str,
    /// Set while the candidate can still take the linked assessment.
    pub take_assessment_id: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationRowVm {
    pub id: u64,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub applied_label: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub interview_label: Option<String>,
    pub test: Option<ApplicationTestVm>,
}

fn status_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::ApplicationSent => "status-sent",
        ApplicationStatus::InReview => "status-review",
        ApplicationStatus::InterviewScheduled => "status-interview",
        ApplicationStatus::OfferReceived => "status-offer",
        ApplicationStatus::Rejected => "status-rejected",
    }
}

impl From<&Application> for ApplicationRowVm {
    fn from(app: &Application) -> Self {
        let test = app.test.map(|link| ApplicationTestVm {
            status_label: link.status.label(),
            take_assessment_id: (link.status != TestStatus::Completed)
                .then(|| link.assessment_id.value()),
        });

        Self {
            id: app.id.value(),
            job_title: app.job_title.clone(),
            company: app.company.clone(),
            location: app.location.clone(),
            applied_label: format!("Applied {}", format_date(app.applied_on)),
            status_label: app.status.label(),
            status_class: status_class(app.status),
            interview_label: app
                .interview_on
                .map(|date| format!("Interview on {}", format_date(date))),
            test,
        }
    }
}

#[must_use]
pub fn map_application_rows(apps: &[Application]) -> Vec<ApplicationRowVm> {
    apps.iter().map(ApplicationRowVm::from).collect()
}
