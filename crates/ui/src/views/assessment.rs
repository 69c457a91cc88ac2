use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use jobdesk_core::model::AssessmentId;
use services::{RedirectPlan, RedirectTarget};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    AnswerInputVm, AssessmentIntent, AssessmentPhase, AssessmentVm, ConfirmVm, QuestionVm,
    SubmittedVm, start_assessment,
};

#[cfg(test)]
use std::cell::RefCell;

#[cfg(test)]
use dioxus_router::Navigator;

/// Slot for the pending redirect; cancelled when the view goes away.
type RedirectSlot = Rc<Cell<Option<Task>>>;

fn redirect_route(target: RedirectTarget) -> Route {
    match target {
        RedirectTarget::MyApplications => Route::Applications {},
    }
}

#[component]
pub fn TakeAssessmentView(assessment_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let flow = ctx.flow();
    let assessment_id = AssessmentId::new(assessment_id);

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<AssessmentVm>);
    let submitting = use_signal(|| false);
    let redirect_slot: RedirectSlot = use_hook(|| Rc::new(Cell::new(None)));

    {
        let redirect_slot = Rc::clone(&redirect_slot);
        use_drop(move || {
            if let Some(task) = redirect_slot.take() {
                task.cancel();
            }
        });
    }

    let flow_for_resource = flow.clone();
    let resource = use_resource(move || {
        let flow = flow_for_resource.clone();
        let mut error = error;
        let mut vm = vm;

        async move {
            let started = start_assessment(&flow, assessment_id).await?;
            vm.set(Some(started));
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });

    let schedule_redirect = {
        let redirect_slot = Rc::clone(&redirect_slot);
        move |plan: RedirectPlan| {
            let fired = Rc::clone(&redirect_slot);
            let task = spawn(async move {
                tokio::time::sleep(plan.delay).await;
                // The slot only holds a pending redirect.
                fired.take();
                navigator.push(redirect_route(plan.target));
            });
            if let Some(previous) = redirect_slot.replace(Some(task)) {
                previous.cancel();
            }
        }
    };

    let dispatch_intent = {
        let flow = flow.clone();
        use_callback(move |intent: AssessmentIntent| {
            let mut error = error;
            let mut vm = vm;
            let mut submitting = submitting;

            match intent {
                AssessmentIntent::ConfirmSubmit => {
                    if submitting() {
                        return;
                    }
                    submitting.set(true);
                    let flow = flow.clone();
                    let schedule_redirect = schedule_redirect.clone();
                    spawn(async move {
                        let taken = vm.write().take();
                        let Some(mut local) = taken else {
                            submitting.set(false);
                            error.set(Some(ViewError::Unknown));
                            return;
                        };

                        let result = local.submit(&flow).await;

                        // Put the session back so the screen stays usable after errors.
                        vm.set(Some(local));
                        submitting.set(false);

                        match result {
                            Ok(receipt) => {
                                error.set(None);
                                schedule_redirect(receipt.redirect);
                            }
                            Err(err) => error.set(Some(err)),
                        }
                    });
                }
                intent => {
                    let result = vm
                        .write()
                        .as_mut()
                        .map(|local| local.apply(&flow, intent));
                    match result {
                        Some(Ok(_)) => error.set(None),
                        Some(Err(err)) => error.set(Some(err)),
                        None => error.set(Some(ViewError::Unknown)),
                    }
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AssessmentTestHandles>() {
                handles.register(dispatch_intent, navigator);
            }
        }
    }

    let state = view_state_from_resource(&resource);
    let vm_guard = vm.read();
    let header = vm_guard.as_ref().map(AssessmentVm::header);
    let timer_label = header.as_ref().map(|header| header.timer_label.clone());
    let phase = vm_guard.as_ref().map(AssessmentVm::phase);
    let question = vm_guard.as_ref().map(AssessmentVm::question);
    let confirm = vm_guard.as_ref().and_then(AssessmentVm::confirm);
    let submitted = vm_guard.as_ref().and_then(AssessmentVm::submitted);
    let redirect_secs = vm_guard
        .as_ref()
        .and_then(AssessmentVm::receipt)
        .map(|receipt| receipt.redirect.delay.as_secs());
    drop(vm_guard);
    let action_error = *error.read();
    let is_submitting = submitting();

    rsx! {
        div { class: "page assessment-page",
            div { class: "assessment-topbar",
                Link { class: "btn btn-ghost", to: Route::Assessments {}, "← Back to Assessments" }
                if let Some(timer_label) = timer_label {
                    span { class: "timer", "{timer_label}" }
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "notice error",
                        p { "{err.message()}" }
                        if err.is_retryable() {
                            button {
                                class: "btn",
                                onclick: move |_| {
                                    let mut resource = resource;
                                    resource.restart();
                                },
                                "Retry"
                            }
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if is_submitting {
                        p { class: "submitting", "Submitting..." }
                    }
                    if let Some(err) = action_error {
                        div { class: "notice error",
                            p { "{err.message()}" }
                            if err.is_retryable() && phase == Some(AssessmentPhase::Submitted) {
                                button {
                                    class: "btn",
                                    onclick: move |_| dispatch_intent.call(AssessmentIntent::ConfirmSubmit),
                                    "Retry"
                                }
                            }
                        }
                    }
                    match (phase, submitted) {
                        (Some(AssessmentPhase::Submitted), Some(submitted)) => rsx! {
                            SubmittedPanel { submitted, redirect_secs }
                        },
                        _ => rsx! {
                            if let (Some(header), Some(question)) = (header, question) {
                                div { class: "assessment-header",
                                    div {
                                        h1 { "{header.title}" }
                                        p { class: "company", "{header.company_line}" }
                                    }
                                    div { class: "position",
                                        span { "{question.number_label}" }
                                        div { class: "progress",
                                            div { class: "progress-bar", style: "width: {question.progress_percent}%" }
                                        }
                                        span { class: "progress-label", "{question.progress_label}" }
                                    }
                                }
                                QuestionPanel { question: question.clone(), on_intent: dispatch_intent }
                            }
                            if let Some(confirm) = confirm {
                                ConfirmDialog { confirm, on_intent: dispatch_intent, busy: is_submitting }
                            }
                        },
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionPanel(question: QuestionVm, on_intent: Callback<AssessmentIntent>) -> Element {
    rsx! {
        div { class: "question-card",
            div { class: "card-header",
                h3 { "{question.number_label}" }
                span { class: "badge", "{question.kind_label}" }
            }
            p { class: "prompt", "{question.prompt}" }

            match question.input {
                AnswerInputVm::Choices(options) => rsx! {
                    ul { class: "options",
                        for option in options {
                            li {
                                key: "{option.label}",
                                class: if option.selected { "option selected" } else { "option" },
                                label {
                                    input {
                                        r#type: "radio",
                                        name: "answer",
                                        checked: option.selected,
                                        onchange: {
                                            let value = option.label.clone();
                                            move |_| on_intent.call(AssessmentIntent::Answer(value.clone()))
                                        },
                                    }
                                    span { "{option.label}" }
                                }
                            }
                        }
                    }
                },
                AnswerInputVm::Text(text) => rsx! {
                    textarea {
                        class: "answer-text",
                        placeholder: "Type your answer here...",
                        value: "{text}",
                        oninput: move |evt| on_intent.call(AssessmentIntent::Answer(evt.value())),
                    }
                },
            }

            div { class: "card-footer",
                button {
                    class: "btn",
                    disabled: question.is_first,
                    onclick: move |_| on_intent.call(AssessmentIntent::Previous),
                    "Previous"
                }
                button {
                    class: "btn",
                    onclick: move |_| on_intent.call(AssessmentIntent::RequestSubmit),
                    "Submit Test"
                }
                if question.is_last {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_intent.call(AssessmentIntent::RequestSubmit),
                        "Submit"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_intent.call(AssessmentIntent::Next),
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn ConfirmDialog(confirm: ConfirmVm, on_intent: Callback<AssessmentIntent>, busy: bool) -> Element {
    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog", role: "dialog",
                h3 { "Submit Assessment" }
                p {
                    "Are you sure you want to submit your assessment? You won't be able to change your answers after submission."
                }
                dl { class: "summary",
                    dt { "Total Questions" }
                    dd { "{confirm.total}" }
                    dt { "Answered Questions" }
                    dd { "{confirm.answered}" }
                    dt { "Unanswered Questions" }
                    dd { "{confirm.unanswered}" }
                }
                if let Some(warning) = confirm.warning {
                    div { class: "notice warning",
                        strong { "Warning" }
                        p { "{warning}" }
                    }
                }
                div { class: "dialog-footer",
                    button {
                        class: "btn",
                        disabled: busy,
                        onclick: move |_| on_intent.call(AssessmentIntent::Cancel),
                        "Continue Editing"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: busy,
                        onclick: move |_| on_intent.call(AssessmentIntent::ConfirmSubmit),
                        "Submit Assessment"
                    }
                }
            }
        }
    }
}

#[component]
fn SubmittedPanel(submitted: SubmittedVm, redirect_secs: Option<u64>) -> Element {
    rsx! {
        div { class: "submitted",
            h2 { "Assessment Submitted" }
            if redirect_secs.is_some() {
                p {
                    "Thank you for completing the {submitted.title}. Your responses have been recorded."
                }
            }
            dl { class: "summary",
                dt { "Assessment" }
                dd { "{submitted.title}" }
                dt { "Company" }
                dd { "{submitted.company}" }
                dt { "Job Position" }
                dd { "{submitted.job_title}" }
                dt { "Submission Date" }
                dd { "{submitted.submitted_label}" }
            }
            if let Some(secs) = redirect_secs {
                p { class: "redirect-note", "Redirecting to My Applications in {secs} seconds..." }
            }
            div { class: "actions",
                Link { class: "btn", to: Route::Assessments {}, "Back to Assessments" }
                Link { class: "btn btn-primary", to: Route::Applications {}, "View Applications" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AssessmentTestHandles {
    dispatch: Rc<RefCell<Option<Callback<AssessmentIntent>>>>,
    navigator: Rc<RefCell<Option<Navigator>>>,
}

#[cfg(test)]
impl AssessmentTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<AssessmentIntent>, navigator: Navigator) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.navigator.borrow_mut() = Some(navigator);
    }

    pub(crate) fn dispatch(&self) -> Callback<AssessmentIntent> {
        (*self.dispatch.borrow()).expect("assessment dispatch registered")
    }

    pub(crate) fn navigator(&self) -> Navigator {
        (*self.navigator.borrow()).expect("assessment navigator registered")
    }
}
