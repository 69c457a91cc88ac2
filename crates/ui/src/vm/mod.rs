mod application_vm;
mod assessment_vm;
mod listing_vm;
mod time_fmt;

pub use application_vm::{ApplicationRowVm, ApplicationTestVm, map_application_rows};
pub use assessment_vm::{
    AnswerInputVm, AssessmentHeaderVm, AssessmentIntent, AssessmentPhase, AssessmentVm, ConfirmVm,
    OptionVm, QuestionVm, SubmittedVm, UNANSWERED_WARNING, start_assessment,
};
pub use listing_vm::{ListingAction, ListingCardVm, map_listing_cards};
pub use time_fmt::{format_date, format_datetime, format_minutes};
