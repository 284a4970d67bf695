//! Async driver around the synchronous attempt state machine.
//!
//! [`SurveyRunner`] owns one [`SurveyAttempt`] together with its two
//! collaborators and brackets each awaited call between the matching
//! `begin_*`/`complete_*` transition pair. The state machine itself
//! never awaits, so every transition stays synchronous and testable
//! without a runtime.

use crate::attempt::{AttemptPhase, SurveyAttempt};
use crate::error::EngineError;
use crate::provider::{SubmissionSink, SurveyCatalog};
use pulse_types::{CustomerId, RespondentId, SurveyId};

/// Drives one attempt against a catalog and a sink.
///
/// Dropping the runner mid-`load`/`submit` abandons the attempt; the
/// in-flight collaborator call is simply never completed, which is the
/// navigate-away semantics of the survey view.
///
/// # Example
///
/// ```no_run
/// use pulse_survey::{SurveyCatalog, SubmissionSink, SurveyRunner};
/// use pulse_types::{CustomerId, RespondentId, SurveyId};
///
/// async fn answer_first_question<C, S>(catalog: C, sink: S, customer: CustomerId)
/// where
///     C: SurveyCatalog,
///     S: SubmissionSink,
/// {
///     let mut runner =
///         SurveyRunner::new(SurveyId::new(), RespondentId::new(), customer, catalog, sink);
///     runner.load().await.expect("load");
///
///     let first = runner.attempt().questions()[0].id;
///     runner.attempt_mut().answer_rating(first, 5).expect("answer");
/// }
/// ```
#[derive(Debug)]
pub struct SurveyRunner<C, S> {
    attempt: SurveyAttempt,
    customer: CustomerId,
    catalog: C,
    sink: S,
}

impl<C: SurveyCatalog, S: SubmissionSink> SurveyRunner<C, S> {
    /// Creates a runner with a fresh attempt in the `Loading` phase.
    #[must_use]
    pub fn new(
        survey: SurveyId,
        respondent: RespondentId,
        customer: CustomerId,
        catalog: C,
        sink: S,
    ) -> Self {
        Self {
            attempt: SurveyAttempt::new(survey, respondent),
            customer,
            catalog,
            sink,
        }
    }

    /// Returns the attempt for inspection.
    #[must_use]
    pub fn attempt(&self) -> &SurveyAttempt {
        &self.attempt
    }

    /// Returns the attempt for answering and navigation.
    pub fn attempt_mut(&mut self) -> &mut SurveyAttempt {
        &mut self.attempt
    }

    /// Returns the customer whose questionnaire is being answered.
    #[must_use]
    pub fn customer(&self) -> CustomerId {
        self.customer
    }

    /// Fetches the catalog and applies the result.
    ///
    /// On `Ok`, inspect [`SurveyAttempt::phase`]: `InProgress` on a
    /// successful fetch, `LoadFailed` (with
    /// [`last_load_error`](SurveyAttempt::last_load_error) set) on a
    /// failed one. Both are retryable by calling `load` again.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotAcceptingInput`] if the attempt cannot load
    /// (already submitting or submitted).
    pub async fn load(&mut self) -> Result<AttemptPhase, EngineError> {
        let ticket = self.attempt.begin_load()?;
        let result = self.catalog.questions(self.customer).await;
        self.attempt.complete_load(ticket, result);
        Ok(self.attempt.phase())
    }

    /// Submits the finished answers and applies the result.
    ///
    /// On `Ok`, inspect [`SurveyAttempt::phase`]: `Submitted` on
    /// success, `SubmitFailed` (drafts retained,
    /// [`last_submit_error`](SurveyAttempt::last_submit_error) set) on
    /// a sink failure — call `submit` again to retry.
    ///
    /// # Errors
    ///
    /// The [`SurveyAttempt::begin_submit`] preconditions: last page,
    /// everything answered, attempt accepting input.
    pub async fn submit(&mut self) -> Result<AttemptPhase, EngineError> {
        let (ticket, answers) = self.attempt.begin_submit()?;
        let result = self
            .sink
            .submit(self.attempt.survey(), self.attempt.respondent(), &answers)
            .await;
        self.attempt.complete_submit(ticket, result);
        Ok(self.attempt.phase())
    }
}
