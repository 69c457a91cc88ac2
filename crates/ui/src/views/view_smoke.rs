use std::sync::Arc;
use std::time::Duration;

use jobdesk_core::model::{
    ApplicationId, Assessment, AssessmentId, AssessmentListing, AssessmentSubmission, TestStatus,
};
use storage::repository::{
    ApplicationRepository, AssessmentCatalog, InMemoryRepository, Storage, StorageError,
    SubmissionId, SubmissionRepository, SubmissionRow,
};

use super::test_harness::{
    ViewKind, drive_dom, setup_app_harness, setup_view_harness, setup_view_harness_with_storage,
};
use crate::routes::Route;
use crate::vm::AssessmentIntent;

const APPLICATIONS_SUBTITLE: &str = "Track the status of your job applications";

#[tokio::test(flavor = "current_thread")]
async fn assessments_view_smoke_renders_catalog() {
    let mut harness = setup_view_harness(ViewKind::Assessments);
    harness.rebuild();
    let html = harness.settle_until("Frontend Development Assessment").await;

    for title in [
        "Frontend Development Assessment",
        "UX Design Challenge",
        "Backend Development Test",
        "Product Management Case Study",
        "DevOps Technical Assessment",
    ] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("Start Assessment"), "missing start cta in {html}");
    assert!(html.contains("Continue"), "missing continue cta in {html}");
    assert!(html.contains("Score: 85%"), "missing catalog score in {html}");
    assert!(html.contains("Expired"), "missing expired cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn applications_view_smoke_renders_rows() {
    let mut harness = setup_view_harness(ViewKind::Applications);
    harness.rebuild();
    let html = harness.settle_until("Senior Frontend Developer").await;

    assert!(html.contains("My Applications"), "missing title in {html}");
    assert!(html.contains("In Review"), "missing status in {html}");
    assert!(html.contains("Interview on Mar 25, 2023"), "missing interview in {html}");
    assert!(html.contains("Take Assessment"), "missing test link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_take_and_submit() {
    let mut harness = setup_view_harness(ViewKind::TakeAssessment(1));
    harness.rebuild();
    let html = harness.settle_until("Question 1 of 8").await;
    assert!(html.contains("60:00 remaining"), "missing timer in {html}");
    assert!(html.contains("13% Complete"), "missing progress in {html}");
    assert!(html.contains("Which of the following is NOT a React hook?"), "missing prompt in {html}");

    let dispatch = harness.assessment_handles.dispatch();
    dispatch.call(AssessmentIntent::Answer("useReactState".into()));
    drive_dom(&mut harness.dom);
    dispatch.call(AssessmentIntent::Next);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Question 2 of 8"), "did not advance in {html}");

    dispatch.call(AssessmentIntent::RequestSubmit);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Unanswered Questions"), "missing dialog in {html}");
    assert!(html.contains("Warning"), "missing warning in {html}");

    dispatch.call(AssessmentIntent::Cancel);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(!html.contains("Unanswered Questions"), "dialog still open in {html}");
    assert!(html.contains("Question 2 of 8"), "position lost in {html}");

    dispatch.call(AssessmentIntent::RequestSubmit);
    drive_dom(&mut harness.dom);
    dispatch.call(AssessmentIntent::ConfirmSubmit);
    let html = harness.settle_until("Assessment Submitted").await;
    assert!(html.contains("TechCorp"), "missing company in {html}");
    assert!(html.contains("View Applications"), "missing action in {html}");
    assert!(html.contains("Your responses have been recorded"), "missing confirmation in {html}");
    assert!(html.contains("Redirecting to My Applications"), "missing redirect note in {html}");

    let row = harness
        .storage
        .submissions
        .find_by_assessment(AssessmentId::new(1))
        .await
        .unwrap()
        .expect("submission recorded");
    assert_eq!(row.submission.answered_count(), 1);
    let app = harness
        .storage
        .applications
        .get_application(ApplicationId::new(1))
        .await
        .unwrap();
    assert_eq!(app.test.unwrap().status, TestStatus::Completed);
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_unknown_assessment() {
    let mut harness = setup_view_harness(ViewKind::TakeAssessment(3));
    harness.rebuild();
    let html = harness.settle_until("could not be found").await;
    assert!(html.contains("could not be found"), "missing not-found in {html}");
    assert!(!html.contains("Retry"), "not-found should not offer retry in {html}");
}

struct FailingCatalog;

#[async_trait::async_trait]
impl AssessmentCatalog for FailingCatalog {
    async fn get_assessment(&self, _id: AssessmentId) -> Result<Assessment, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_assessments(&self) -> Result<Vec<AssessmentListing>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn assessments_view_smoke_renders_error_state() {
    let repo = InMemoryRepository::new();
    let storage = Storage {
        catalog: Arc::new(FailingCatalog),
        submissions: Arc::new(repo.clone()),
        applications: Arc::new(repo),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Assessments, storage);
    harness.rebuild();
    let html = harness.settle_until("Something went wrong").await;
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submitted_assessment_redirects_to_applications() {
    let mut harness = setup_app_harness(AssessmentId::new(4), Duration::from_millis(10));
    harness.rebuild();
    let html = harness.settle_until("Question 1 of").await;
    assert!(html.contains("Product Management Case Study"), "launch did not open assessment in {html}");

    let dispatch = harness.assessment_handles.dispatch();
    dispatch.call(AssessmentIntent::RequestSubmit);
    drive_dom(&mut harness.dom);
    dispatch.call(AssessmentIntent::ConfirmSubmit);

    let html = harness.settle_until(APPLICATIONS_SUBTITLE).await;
    assert!(html.contains(APPLICATIONS_SUBTITLE), "no redirect to applications in {html}");
    assert!(!html.contains("Assessment Submitted"), "submitted panel still shown in {html}");

    let app = harness
        .storage
        .applications
        .get_application(ApplicationId::new(4))
        .await
        .unwrap();
    assert_eq!(app.test.unwrap().status, TestStatus::Completed);
}

#[tokio::test(flavor = "current_thread")]
async fn leaving_submitted_view_cancels_redirect() {
    let mut harness = setup_app_harness(AssessmentId::new(4), Duration::from_millis(200));
    harness.rebuild();
    harness.settle_until("Question 1 of").await;

    let dispatch = harness.assessment_handles.dispatch();
    dispatch.call(AssessmentIntent::RequestSubmit);
    drive_dom(&mut harness.dom);
    dispatch.call(AssessmentIntent::ConfirmSubmit);
    let html = harness.settle_until("Redirecting to My Applications").await;
    assert!(html.contains("Redirecting to My Applications"), "missing redirect note in {html}");

    let navigator = harness.assessment_handles.navigator();
    harness.dom.in_runtime(|| {
        navigator.push(Route::Assessments {});
    });
    let html = harness.settle_until("Frontend Development Assessment").await;
    assert!(html.contains("Frontend Development Assessment"), "catalog not shown in {html}");

    // Well past the redirect delay.
    for _ in 0..8 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(!html.contains(APPLICATIONS_SUBTITLE), "redirect fired after teardown in {html}");
    assert!(html.contains("Frontend Development Assessment"), "left the catalog in {html}");
}

struct FailingSubmissions;

#[async_trait::async_trait]
impl SubmissionRepository for FailingSubmissions {
    async fn append_submission(
        &self,
        _submission: &AssessmentSubmission,
    ) -> Result<SubmissionId, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_submission(&self, _id: SubmissionId) -> Result<AssessmentSubmission, StorageError> {
        Err(StorageError::NotFound)
    }

    async fn find_by_assessment(
        &self,
        _assessment_id: AssessmentId,
    ) -> Result<Option<SubmissionRow>, StorageError> {
        Ok(None)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submission_does_not_claim_answers_were_recorded() {
    let seeded = Storage::with_sample_data().unwrap();
    let storage = Storage {
        submissions: Arc::new(FailingSubmissions),
        ..seeded
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::TakeAssessment(1), storage);
    harness.rebuild();
    harness.settle_until("Question 1 of 8").await;

    let dispatch = harness.assessment_handles.dispatch();
    dispatch.call(AssessmentIntent::RequestSubmit);
    drive_dom(&mut harness.dom);
    dispatch.call(AssessmentIntent::ConfirmSubmit);

    let html = harness.settle_until("Something went wrong").await;
    assert!(html.contains("Assessment Submitted"), "missing submitted panel in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(
        !html.contains("Your responses have been recorded"),
        "claims answers were recorded in {html}"
    );
    assert!(!html.contains("Redirecting to My Applications"), "redirect without receipt in {html}");
}
