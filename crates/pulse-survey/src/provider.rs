//! Collaborator traits for the survey engine.
//!
//! The engine consumes two abstracted interfaces: the catalog that
//! defines the questionnaire, and the sink that accepts finished
//! answers. No wire format is mandated — the runtime layer provides an
//! in-memory implementation, and a networked one can slot in without
//! touching the engine.

use crate::answer::SubmittedAnswer;
use crate::error::{CatalogError, SubmissionError};
use crate::question::Question;
use pulse_types::{CustomerId, QuestionId, RespondentId, SurveyId};
use std::future::Future;
use std::sync::Arc;

/// Read side of the survey definition.
///
/// Implementations must be thread-safe (`Send + Sync`) for use across
/// async tasks.
pub trait SurveyCatalog: Send + Sync {
    /// Returns the ordered question list for a customer, with
    /// per-customer annotations already resolved.
    fn questions(
        &self,
        customer: CustomerId,
    ) -> impl Future<Output = Result<Vec<Question>, CatalogError>> + Send;

    /// Attaches (or replaces) the annotation text a customer sees on a
    /// question.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownQuestion`] or
    /// [`CatalogError::UnknownCustomer`] if either side of the pair
    /// does not exist.
    fn set_annotation(
        &self,
        question: QuestionId,
        customer: CustomerId,
        text: &str,
    ) -> impl Future<Output = Result<(), CatalogError>> + Send;
}

/// Write side of the submission boundary.
pub trait SubmissionSink: Send + Sync {
    /// Accepts the finished answers of one attempt.
    fn submit(
        &self,
        survey: SurveyId,
        respondent: RespondentId,
        answers: &[SubmittedAnswer],
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}

impl<T: SurveyCatalog> SurveyCatalog for Arc<T> {
    fn questions(
        &self,
        customer: CustomerId,
    ) -> impl Future<Output = Result<Vec<Question>, CatalogError>> + Send {
        self.as_ref().questions(customer)
    }

    fn set_annotation(
        &self,
        question: QuestionId,
        customer: CustomerId,
        text: &str,
    ) -> impl Future<Output = Result<(), CatalogError>> + Send {
        self.as_ref().set_annotation(question, customer, text)
    }
}

impl<T: SubmissionSink> SubmissionSink for Arc<T> {
    fn submit(
        &self,
        survey: SurveyId,
        respondent: RespondentId,
        answers: &[SubmittedAnswer],
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send {
        self.as_ref().submit(survey, respondent, answers)
    }
}
