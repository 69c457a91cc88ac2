mod application;
mod assessment;
mod ids;
mod listing;
mod question;
mod submission;

pub use application::{Application, ApplicationStatus, TestLink, TestStatus};
pub use assessment::{Assessment, AssessmentDetails, AssessmentError};
pub use ids::{ApplicationId, AssessmentId, ParseIdError, QuestionId};
pub use listing::{AssessmentListing, AssessmentStatus, StatusKind};
pub use question::{Question, QuestionError, QuestionKind};
pub use submission::{AnswerSheet, AssessmentSubmission};
