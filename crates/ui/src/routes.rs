use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ApplicationsView, AssessmentsView, TakeAssessmentView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", AssessmentsView)] Assessments {},
        #[route("/assessments/:assessment_id", TakeAssessmentView)] TakeAssessment { assessment_id: u64 },
        #[route("/applications", ApplicationsView)] Applications {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "JobDesk" }
            ul {
                li { Link { to: Route::Assessments {}, "Assessments" } }
                li { Link { to: Route::Applications {}, "My Applications" } }
            }
        }
    }
}
