use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use jobdesk_core::model::StatusKind;
use services::{AssessmentFilter, StatusFilter};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ListingAction, ListingCardVm, map_listing_cards};

const ALL_STATUSES: &str = "all";

fn parse_status_filter(value: &str) -> StatusFilter {
    StatusKind::parse(value).map_or(StatusFilter::All, StatusFilter::Only)
}

#[component]
pub fn AssessmentsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let mut query = use_signal(String::new);
    let mut status = use_signal(StatusFilter::default);

    use_effect(move || {
        if let Some(id) = ctx.take_start_assessment() {
            navigator.push(Route::TakeAssessment {
                assessment_id: id.value(),
            });
        }
    });

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let filter = AssessmentFilter::new(query(), status());
        async move {
            let rows = catalog
                .list_assessments(&filter)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(map_listing_cards(&rows))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Assessments" }
            p { class: "subtitle", "Complete assessments for your job applications" }

            div { class: "filters",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search assessments...",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                select {
                    class: "status-filter",
                    onchange: move |evt| status.set(parse_status_filter(&evt.value())),
                    option { value: ALL_STATUSES, "All Statuses" }
                    for kind in StatusKind::ALL {
                        option { value: kind.label(), "{kind.label()}" }
                    }
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { class: "empty", "No assessments match your search." }
                    } else {
                        ul { class: "assessment-list",
                            for card in cards {
                                ListingCard { key: "{card.id}", card }
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
fn ListingCard(card: ListingCardVm) -> Element {
    rsx! {
        li { class: "assessment-card",
            div { class: "card-header",
                h3 { "{card.title}" }
                span { class: "badge {card.status_class}", "{card.status_label}" }
            }
            p { class: "company", "{card.company_line}" }
            p { class: "meta",
                span { "{card.due_label}" }
                span { "{card.duration_label}" }
                span { "{card.questions_label}" }
            }
            if let Some(progress) = card.progress {
                div { class: "progress",
                    div { class: "progress-bar", style: "width: {progress}%" }
                }
                p { class: "progress-label", "{progress}% complete" }
            }
            if let Some(score) = card.score_label.as_deref() {
                p { class: "score", "{score}" }
            }
            match card.action {
                ListingAction::Start | ListingAction::Continue => rsx! {
                    Link {
                        class: "btn btn-primary",
                        to: Route::TakeAssessment { assessment_id: card.id },
                        "{card.action.label()}"
                    }
                },
                ListingAction::ViewResults => rsx! {
                    Link {
                        class: "btn",
                        to: Route::Applications {},
                        "{card.action.label()}"
                    }
                },
                ListingAction::Expired => rsx! {
                    button { class: "btn", disabled: true, "{card.action.label()}" }
                },
            }
        }
    }
}
