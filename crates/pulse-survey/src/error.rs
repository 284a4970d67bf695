//! Error types for the survey engine and its collaborators.
//!
//! User-facing failure modes are modeled as explicit states and gate
//! results, not exceptions: the engine returns
//! [`EngineError::NotAcceptingInput`] and validation variants as
//! ordinary `Err` values that the view layer maps to disabled
//! controls. The one programmer-error condition is
//! [`EngineError::UnknownQuestion`].

use pulse_types::{CustomerId, ErrorCode, QuestionId};
use thiserror::Error;

/// Rejected transition of the survey-response state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The attempt is suspended or terminal and ignores input.
    #[error("attempt is not accepting input while {phase}")]
    NotAcceptingInput {
        /// Name of the rejecting phase.
        phase: &'static str,
    },

    /// The question id is not part of the loaded catalog.
    ///
    /// Programmer error: the view layer referenced a question the
    /// provider never returned.
    #[error("question {0} is not part of the loaded catalog")]
    UnknownQuestion(QuestionId),

    /// The answer operation does not match the question's kind.
    ///
    /// Programmer error, like [`Self::UnknownQuestion`].
    #[error("answer kind does not match question {0}")]
    AnswerKindMismatch(QuestionId),

    /// Forward navigation blocked: the page has unanswered questions.
    #[error("page {page} has unanswered questions")]
    PageInvalid {
        /// The invalid page.
        page: usize,
    },

    /// Already on the last page.
    #[error("already on the last page")]
    AtLastPage,

    /// Already on the first page.
    #[error("already on the first page")]
    AtFirstPage,

    /// Submission attempted before the last page.
    #[error("submission requires the last page, currently on page {page}")]
    NotOnLastPage {
        /// The current page.
        page: usize,
    },

    /// Submission blocked: drafts are still unanswered somewhere.
    #[error("{count} question(s) are still unanswered")]
    UnansweredQuestions {
        /// How many drafts are unanswered across all pages.
        count: usize,
    },
}

impl ErrorCode for EngineError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotAcceptingInput { .. } => "ENGINE_NOT_ACCEPTING_INPUT",
            Self::UnknownQuestion(_) => "ENGINE_UNKNOWN_QUESTION",
            Self::AnswerKindMismatch(_) => "ENGINE_ANSWER_KIND_MISMATCH",
            Self::PageInvalid { .. } => "ENGINE_PAGE_INVALID",
            Self::AtLastPage => "ENGINE_AT_LAST_PAGE",
            Self::AtFirstPage => "ENGINE_AT_FIRST_PAGE",
            Self::NotOnLastPage { .. } => "ENGINE_NOT_ON_LAST_PAGE",
            Self::UnansweredQuestions { .. } => "ENGINE_UNANSWERED_QUESTIONS",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // The respondent can answer the missing questions or wait
            // for the in-flight operation.
            Self::NotAcceptingInput { .. }
            | Self::PageInvalid { .. }
            | Self::AtLastPage
            | Self::AtFirstPage
            | Self::NotOnLastPage { .. }
            | Self::UnansweredQuestions { .. } => true,
            // Programmer errors do not fix themselves on retry.
            Self::UnknownQuestion(_) | Self::AnswerKindMismatch(_) => false,
        }
    }
}

/// Failure fetching the question catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog provider could not be reached.
    #[error("survey catalog unavailable: {0}")]
    Unavailable(String),

    /// The customer is not known to the provider.
    #[error("unknown customer {0}")]
    UnknownCustomer(CustomerId),

    /// The question is not known to the provider.
    #[error("unknown question {0}")]
    UnknownQuestion(QuestionId),
}

impl ErrorCode for CatalogError {
    fn code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "CATALOG_UNAVAILABLE",
            Self::UnknownCustomer(_) => "CATALOG_UNKNOWN_CUSTOMER",
            Self::UnknownQuestion(_) => "CATALOG_UNKNOWN_QUESTION",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Failure submitting answers.
///
/// Always retryable: the engine keeps the drafts untouched so a retry
/// succeeds without re-entering answers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The sink rejected the submission.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The sink could not be reached.
    #[error("submission sink unreachable: {0}")]
    Unreachable(String),
}

impl ErrorCode for SubmissionError {
    fn code(&self) -> &'static str {
        match self {
            Self::Rejected(_) => "SUBMIT_REJECTED",
            Self::Unreachable(_) => "SUBMIT_UNREACHABLE",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}
