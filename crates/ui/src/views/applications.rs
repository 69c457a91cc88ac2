use dioxus::prelude::*;
use dioxus_router::Link;

use services::{ApplicationFilter, ApplicationTab};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ApplicationRowVm, map_application_rows};

#[component]
pub fn ApplicationsView() -> Element {
    let ctx = use_context::<AppContext>();
    let applications = ctx.applications();
    let mut query = use_signal(String::new);
    let mut tab = use_signal(ApplicationTab::default);

    let resource = use_resource(move || {
        let applications = applications.clone();
        let filter = ApplicationFilter::new(query(), tab());
        async move {
            let rows = applications
                .list_applications(&filter)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(map_application_rows(&rows))
        }
    });

    let state = view_state_from_resource(&resource);
    let active_tab = tab();

    rsx! {
        div { class: "page",
            h2 { "My Applications" }
            p { class: "subtitle", "Track the status of your job applications" }

            div { class: "tabs",
                for option in ApplicationTab::ALL {
                    button {
                        class: if option == active_tab { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(option),
                        "{option.label()}"
                    }
                }
            }
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search applications...",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(rows) => rsx! {
                    if rows.is_empty() {
                        p { class: "empty", "No applications found." }
                    } else {
                        ul { class: "application-list",
                            for row in rows {
                                ApplicationRow { key: "{row.id}", row }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn ApplicationRow(row: ApplicationRowVm) -> Element {
    rsx! {
        li { class: "application-card",
            div { class: "card-header",
                h3 { "{row.job_title}" }
                span { class: "badge {row.status_class}", "{row.status_label}" }
            }
            p { class: "company", "{row.company} • {row.location}" }
            p { class: "meta", "{row.applied_label}" }
            if let Some(interview) = row.interview_label.as_deref() {
                p { class: "meta interview", "{interview}" }
            }
            if let Some(test) = row.test {
                div { class: "test-status",
                    span { "Assessment: {test.status_label}" }
                    if let Some(assessment_id) = test.take_assessment_id {
                        Link {
                            class: "btn btn-primary",
                            to: Route::TakeAssessment { assessment_id },
                            "Take Assessment"
                        }
                    }
                }
            }
        }
    }
}
