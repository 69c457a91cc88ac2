use thiserror::Error;

use crate::model::{AssessmentError, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}
