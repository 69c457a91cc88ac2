use dioxus::prelude::*;
use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotFound,
    /// The assessment was submitted before and cannot be retaken.
    AlreadySubmitted,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::NotFound => "This assessment could not be found.",
            ViewError::AlreadySubmitted => {
                "You have already submitted this assessment. Once submitted, it cannot be retaken."
            }
        }
    }

    /// Whether retrying the same action could succeed.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, ViewError::Unknown)
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::AlreadySubmitted(_) => ViewError::AlreadySubmitted,
            _ if err.is_not_found() => ViewError::NotFound,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
