use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use jobdesk_core::model::AssessmentId;
use jobdesk_core::time::fixed_now;
use services::{AppServices, ApplicationService, AssessmentFlowService, CatalogService, Clock, FlowConfig};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::assessment::AssessmentTestHandles;
use crate::views::{ApplicationsView, AssessmentsView, TakeAssessmentView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    start_assessment: Option<AssessmentId>,
}

impl UiApp for TestApp {
    fn start_assessment(&self) -> Option<AssessmentId> {
        self.start_assessment
    }

    fn flow(&self) -> Arc<AssessmentFlowService> {
        self.services.flow()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn applications(&self) -> Arc<ApplicationService> {
        self.services.applications()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Assessments,
    Applications,
    TakeAssessment(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    assessment_handles: AssessmentTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.assessment_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
    assessment_handles: AssessmentTestHandles,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Full app routes, entered through the launch assessment.
#[component]
fn AppRouterHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.assessment_handles.clone());
    rsx! { Router::<Route> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Assessments => rsx! { AssessmentsView {} },
        ViewKind::Applications => rsx! { ApplicationsView {} },
        ViewKind::TakeAssessment(assessment_id) => rsx! { TakeAssessmentView { assessment_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub assessment_handles: AssessmentTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Run pending work until `needle` shows up in the rendered html.
    pub async fn settle_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Sample-data harness whose redirect never fires during a test.
pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::with_sample_data().expect("sample data");
    setup_view_harness_with_storage(view, storage)
}

fn test_app(
    storage: &Storage,
    redirect_delay: Duration,
    start: Option<AssessmentId>,
) -> Arc<TestApp> {
    let config = FlowConfig::default().with_redirect_delay(redirect_delay);
    Arc::new(TestApp {
        services: AppServices::from_storage(storage, Clock::fixed(fixed_now()), config),
        start_assessment: start,
    })
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let assessment_handles = AssessmentTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: test_app(&storage, Duration::from_secs(3600), None),
            view,
            assessment_handles: assessment_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        assessment_handles,
    }
}

/// Harness over the real app routes that opens `start` on launch.
pub fn setup_app_harness(start: AssessmentId, redirect_delay: Duration) -> ViewHarness {
    let storage = Storage::with_sample_data().expect("sample data");
    let assessment_handles = AssessmentTestHandles::default();

    let dom = VirtualDom::new_with_props(
        AppRouterHarness,
        AppHarnessProps {
            app: test_app(&storage, redirect_delay, Some(start)),
            assessment_handles: assessment_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        assessment_handles,
    }
}
