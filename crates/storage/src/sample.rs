//! Sample catalog, applications and question sets for the desktop app.

use chrono::NaiveDate;
use jobdesk_core::model::{
    Application, ApplicationId, ApplicationStatus, Assessment, AssessmentDetails, AssessmentId,
    AssessmentListing, AssessmentStatus, Question, QuestionId, TestLink, TestStatus,
};
use thiserror::Error;

use crate::repository::{InMemoryRepository, Storage, StorageError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SampleDataError {
    #[error("invalid sample date {0}")]
    InvalidDate(String),
    #[error(transparent)]
    Model(#[from] jobdesk_core::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, SampleDataError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| SampleDataError::InvalidDate(format!("{y}-{m}-{d}")))
}

fn mc(
    id: u64,
    prompt: &str,
    options: [&str; 4],
    key: &str,
) -> Result<Question, jobdesk_core::Error> {
    Ok(Question::multiple_choice(
        QuestionId::new(id),
        prompt,
        options,
        Some(key.to_string()),
    )?)
}

fn text(id: u64, prompt: &str) -> Result<Question, jobdesk_core::Error> {
    Ok(Question::free_text(QuestionId::new(id), prompt)?)
}

/// The eight-question frontend assessment used by `TechCorp`.
///
/// # Errors
///
/// Returns `SampleDataError` if the fixed data fails model validation.
pub fn frontend_assessment() -> Result<Assessment, SampleDataError> {
    let questions = vec![
        mc(
            1,
            "Which of the following is NOT a React hook?",
            ["useState", "useEffect", "useContext", "useReactState"],
            "useReactState",
        )?,
        mc(
            2,
            "What does CSS stand for?",
            [
                "Creative Style Sheets",
                "Cascading Style Sheets",
                "Computer Style Sheets",
                "Colorful Style Sheets",
            ],
            "Cascading Style Sheets",
        )?,
        mc(
            3,
            "Which of the following is a valid way to declare a variable in JavaScript?",
            ["var x = 5;", "let x = 5;", "const x = 5;", "All of the above"],
            "All of the above",
        )?,
        mc(
            4,
            "What is the output of console.log(typeof [])?",
            ["array", "object", "undefined", "null"],
            "object",
        )?,
        text(
            5,
            "Explain the difference between 'let' and 'const' in JavaScript.",
        )?,
        mc(
            6,
            "Which CSS property is used to control the spacing between elements?",
            ["spacing", "margin", "padding", "Both B and C"],
            "Both B and C",
        )?,
        mc(
            7,
            "What does the 'useEffect' hook do in React?",
            [
                "Manages component state",
                "Performs side effects in function components",
                "Creates a new React component",
                "Handles form submissions",
            ],
            "Performs side effects in function components",
        )?,
        text(
            8,
            "Describe how you would implement responsive design for a website.",
        )?,
    ];

    let details = AssessmentDetails {
        title: "Frontend Development Assessment".into(),
        company: "TechCorp".into(),
        job_title: "Senior Frontend Developer".into(),
        description: "This assessment evaluates your knowledge of frontend development \
                      concepts, including React, JavaScript, CSS, and responsive design. \
                      Please answer all questions to the best of your ability."
            .into(),
        instructions: vec![
            "You have 60 minutes to complete this assessment.".into(),
            "You can navigate between questions using the previous and next buttons.".into(),
            "You can review your answers before submitting.".into(),
            "Once submitted, you cannot retake the assessment.".into(),
        ],
        due_date: date(2023, 3, 25)?,
        duration_minutes: 60,
    };

    Ok(Assessment::new(AssessmentId::new(1), details, questions).map_err(jobdesk_core::Error::from)?)
}

/// A short product-management case study.
///
/// # Errors
///
/// Returns `SampleDataError` if the fixed data fails model validation.
pub fn product_case_study() -> Result<Assessment, SampleDataError> {
    let questions = vec![
        text(1, "Describe how you would prioritize a backlog with competing stakeholder requests.")?,
        mc(
            2,
            "Which metric best reflects product-market fit for a subscription product?",
            ["Page views", "Net revenue retention", "Number of features", "Team size"],
            "Net revenue retention",
        )?,
        text(3, "Outline a launch plan for a feature aimed at enterprise admins.")?,
        text(4, "How would you decide to sunset an underused feature?")?,
    ];

    let details = AssessmentDetails {
        title: "Product Management Case Study".into(),
        company: "ProductLabs".into(),
        job_title: "Product Manager".into(),
        description: "Work through a short product scenario.".into(),
        instructions: vec!["There are no wrong answers; explain your reasoning.".into()],
        due_date: date(2023, 3, 30)?,
        duration_minutes: 120,
    };

    Ok(Assessment::new(AssessmentId::new(4), details, questions).map_err(jobdesk_core::Error::from)?)
}

fn listings() -> Result<Vec<AssessmentListing>, SampleDataError> {
    let row = |id: u64,
               title: &str,
               company: &str,
               job_title: &str,
               due: NaiveDate,
               duration_minutes: u32,
               question_count: u32,
               status: AssessmentStatus| AssessmentListing {
        id: AssessmentId::new(id),
        title: title.into(),
        company: company.into(),
        job_title: job_title.into(),
        due_date: due,
        duration_minutes,
        question_count,
        status,
    };

    Ok(vec![
        row(
            1,
            "Frontend Development Assessment",
            "TechCorp",
            "Senior Frontend Developer",
            date(2023, 3, 25)?,
            60,
            8,
            AssessmentStatus::NotStarted,
        ),
        row(
            2,
            "UX Design Challenge",
            "DesignHub",
            "UX Designer",
            date(2023, 3, 20)?,
            90,
            5,
            AssessmentStatus::Completed { score: Some(85) },
        ),
        row(
            3,
            "Backend Development Test",
            "DataSystems",
            "Backend Engineer",
            date(2023, 3, 15)?,
            75,
            12,
            AssessmentStatus::Expired,
        ),
        row(
            4,
            "Product Management Case Study",
            "ProductLabs",
            "Product Manager",
            date(2023, 3, 30)?,
            120,
            4,
            AssessmentStatus::InProgress { progress: 25 },
        ),
        row(
            5,
            "DevOps Technical Assessment",
            "CloudTech",
            "DevOps Engineer",
            date(2023, 3, 18)?,
            90,
            10,
            AssessmentStatus::Completed { score: Some(92) },
        ),
    ])
}

fn applications() -> Result<Vec<Application>, SampleDataError> {
    let test = |id: u64, status: TestStatus| {
        Some(TestLink {
            assessment_id: AssessmentId::new(id),
            status,
        })
    };

    Ok(vec![
        Application {
            id: ApplicationId::new(1),
            job_title: "Senior Frontend Developer".into(),
            company: "TechCorp".into(),
            location: "San Francisco, CA".into(),
            applied_on: date(2023, 3, 15)?,
            status: ApplicationStatus::InReview,
            interview_on: None,
            test: test(1, TestStatus::Pending),
        },
        Application {
            id: ApplicationId::new(2),
            job_title: "UX Designer".into(),
            company: "DesignHub".into(),
            location: "Remote".into(),
            applied_on: date(2023, 3, 10)?,
            status: ApplicationStatus::InterviewScheduled,
            interview_on: Some(date(2023, 3, 25)?),
            test: test(2, TestStatus::Completed),
        },
        Application {
            id: ApplicationId::new(3),
            job_title: "Backend Engineer".into(),
            company: "DataSystems".into(),
            location: "New York, NY".into(),
            applied_on: date(2023, 3, 5)?,
            status: ApplicationStatus::Rejected,
            interview_on: None,
            test: None,
        },
        Application {
            id: ApplicationId::new(4),
            job_title: "Product Manager".into(),
            company: "ProductLabs".into(),
            location: "Austin, TX".into(),
            applied_on: date(2023, 3, 18)?,
            status: ApplicationStatus::ApplicationSent,
            interview_on: None,
            test: test(4, TestStatus::NotStarted),
        },
        Application {
            id: ApplicationId::new(5),
            job_title: "DevOps Engineer".into(),
            company: "CloudTech".into(),
            location: "Remote".into(),
            applied_on: date(2023, 2, 28)?,
            status: ApplicationStatus::OfferReceived,
            interview_on: Some(date(2023, 3, 15)?),
            test: test(5, TestStatus::Completed),
        },
    ])
}

/// Load every sample record into `repo`.
///
/// # Errors
///
/// Returns `SampleDataError` if a record fails validation or cannot be stored.
pub fn seed(repo: &InMemoryRepository) -> Result<(), SampleDataError> {
    repo.upsert_assessment(frontend_assessment()?)?;
    repo.upsert_assessment(product_case_study()?)?;
    for listing in listings()? {
        repo.upsert_listing(listing)?;
    }
    for application in applications()? {
        repo.upsert_application(application)?;
    }
    Ok(())
}

impl Storage {
    /// In-memory storage preloaded with the sample data set.
    ///
    /// # Errors
    ///
    /// Returns `SampleDataError` if seeding fails.
    pub fn with_sample_data() -> Result<Self, SampleDataError> {
        let repo = InMemoryRepository::new();
        seed(&repo)?;
        Ok(Self::from_repository(repo))
    }
}
