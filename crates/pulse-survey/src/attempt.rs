//! The survey-response state machine.
//!
//! [`SurveyAttempt`] owns one respondent's journey through a paginated
//! questionnaire. All transitions are synchronous; the two suspending
//! states (`Loading`, `Submitting`) bracket exactly one asynchronous
//! collaborator call, driven by [`SurveyRunner`](crate::SurveyRunner).
//!
//! # Generation Tickets
//!
//! `begin_load` and `begin_submit` hand out a ticket stamped with the
//! attempt's generation counter, and every `begin_*` bumps the
//! counter. A completion whose ticket no longer matches is dropped:
//! the respondent navigated away or restarted the operation, and a
//! result for the abandoned call must not be applied to the replaced
//! state.

use crate::answer::{AnswerDraft, DraftValue, SubmittedAnswer, MAX_RATING};
use crate::error::{CatalogError, EngineError, SubmissionError};
use crate::question::{Question, QuestionKind};
use pulse_types::{QuestionId, RespondentId, SurveyId};

/// Questions per page.
pub const PAGE_SIZE: usize = 10;

/// Where the attempt currently stands.
///
/// # State Categories
///
/// | Category | States | Accepts Input |
/// |----------|--------|---------------|
/// | Suspended | `Loading`, `Submitting` | No (one async op in flight) |
/// | Answering | `InProgress`, `SubmitFailed` | Yes |
/// | Terminal | `Submitted` | No |
/// | Failed | `LoadFailed` | No (retry the load) |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    /// Waiting for the question catalog.
    Loading,
    /// Answering the 1-based `page`.
    InProgress {
        /// Current page, 1-based.
        page: usize,
    },
    /// Waiting for the submission sink.
    Submitting,
    /// Terminal: answers were accepted, drafts are discarded.
    Submitted,
    /// The catalog fetch failed; the load can be retried.
    LoadFailed,
    /// The sink rejected the submission; drafts are retained so the
    /// respondent can retry (or edit) without re-entering answers.
    SubmitFailed {
        /// The page the respondent was on, always the last page.
        page: usize,
    },
}

impl AttemptPhase {
    /// Returns `true` while an asynchronous operation is in flight.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        matches!(self, Self::Loading | Self::Submitting)
    }

    /// Returns `true` once the attempt reached its terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Returns `true` while respondent input is accepted.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::InProgress { .. } | Self::SubmitFailed { .. })
    }

    /// Returns the phase name for logging and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::InProgress { .. } => "in_progress",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
            Self::LoadFailed => "load_failed",
            Self::SubmitFailed { .. } => "submit_failed",
        }
    }
}

impl std::fmt::Display for AttemptPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ticket for one in-flight catalog fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Ticket for one in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// Whether a completion was applied or dropped as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The completion matched the in-flight operation and was applied.
    Applied,
    /// The operation was superseded; the completion was dropped.
    Stale,
}

impl Completion {
    /// Returns `true` if the completion was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// One respondent's in-progress-to-submitted journey through a survey.
///
/// Exclusively owned by the view that created it; nothing is shared
/// across attempts.
#[derive(Debug)]
pub struct SurveyAttempt {
    survey: SurveyId,
    respondent: RespondentId,
    phase: AttemptPhase,
    questions: Vec<Question>,
    // One draft per question, same index as `questions`.
    drafts: Vec<AnswerDraft>,
    generation: u64,
    last_load_error: Option<CatalogError>,
    last_submit_error: Option<SubmissionError>,
}

impl SurveyAttempt {
    /// Creates an attempt in the `Loading` phase with no catalog yet.
    ///
    /// Call [`begin_load`](Self::begin_load) to obtain the ticket for
    /// the catalog fetch.
    #[must_use]
    pub fn new(survey: SurveyId, respondent: RespondentId) -> Self {
        Self {
            survey,
            respondent,
            phase: AttemptPhase::Loading,
            questions: Vec::new(),
            drafts: Vec::new(),
            generation: 0,
            last_load_error: None,
            last_submit_error: None,
        }
    }

    /// Returns the survey being answered.
    #[must_use]
    pub fn survey(&self) -> SurveyId {
        self.survey
    }

    /// Returns the respondent.
    #[must_use]
    pub fn respondent(&self) -> RespondentId {
        self.respondent
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    /// Returns the loaded catalog, ordered by display order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the drafts, one per question in catalog order.
    #[must_use]
    pub fn drafts(&self) -> &[AnswerDraft] {
        &self.drafts
    }

    /// Returns the error of the last failed load, if any.
    #[must_use]
    pub fn last_load_error(&self) -> Option<&CatalogError> {
        self.last_load_error.as_ref()
    }

    /// Returns the error of the last failed submission, if any.
    #[must_use]
    pub fn last_submit_error(&self) -> Option<&SubmissionError> {
        self.last_submit_error.as_ref()
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    /// Starts (or restarts) the catalog fetch.
    ///
    /// Allowed from every phase except `Submitting` and the terminal
    /// `Submitted`. Restarting supersedes any outstanding load: the
    /// previous ticket becomes stale. Reloading over an in-progress
    /// attempt discards its drafts once the new catalog arrives — the
    /// draft set is rebuilt from scratch, never merged.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotAcceptingInput`] while submitting or after
    /// submission.
    pub fn begin_load(&mut self) -> Result<LoadTicket, EngineError> {
        match self.phase {
            AttemptPhase::Submitting | AttemptPhase::Submitted => {
                Err(EngineError::NotAcceptingInput {
                    phase: self.phase.name(),
                })
            }
            _ => {
                self.generation += 1;
                self.phase = AttemptPhase::Loading;
                Ok(LoadTicket(self.generation))
            }
        }
    }

    /// Applies the result of the catalog fetch.
    ///
    /// A stale ticket (the load was restarted or the attempt moved on)
    /// is dropped without touching any state.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Question>, CatalogError>,
    ) -> Completion {
        if ticket.0 != self.generation || self.phase != AttemptPhase::Loading {
            tracing::debug!(
                survey = %self.survey,
                ticket = ticket.0,
                generation = self.generation,
                "dropping stale load completion"
            );
            return Completion::Stale;
        }

        match result {
            Ok(mut questions) => {
                questions.sort_by_key(|q| q.display_order);
                self.drafts = questions.iter().map(AnswerDraft::for_question).collect();
                self.questions = questions;
                self.last_load_error = None;
                self.phase = AttemptPhase::InProgress { page: 1 };
                tracing::debug!(
                    survey = %self.survey,
                    questions = self.questions.len(),
                    pages = self.total_pages(),
                    "catalog loaded"
                );
            }
            Err(err) => {
                tracing::warn!(survey = %self.survey, error = %err, "catalog load failed");
                self.last_load_error = Some(err);
                self.phase = AttemptPhase::LoadFailed;
            }
        }
        Completion::Applied
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// Returns the number of pages for the loaded catalog.
    ///
    /// An empty catalog still has one (trivially valid) page.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.questions.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Returns the current 1-based page while input is accepted.
    #[must_use]
    pub fn current_page(&self) -> Option<usize> {
        match self.phase {
            AttemptPhase::InProgress { page } | AttemptPhase::SubmitFailed { page } => Some(page),
            _ => None,
        }
    }

    /// Returns the questions on a 1-based page (empty if out of range).
    #[must_use]
    pub fn page_questions(&self, page: usize) -> &[Question] {
        let Some(range) = self.page_range(page) else {
            return &[];
        };
        &self.questions[range]
    }

    fn page_range(&self, page: usize) -> Option<std::ops::Range<usize>> {
        if page == 0 {
            return None;
        }
        let start = (page - 1) * PAGE_SIZE;
        if start >= self.questions.len() {
            // Page 1 of an empty catalog is a valid, empty page.
            if page == 1 && self.questions.is_empty() {
                return Some(0..0);
            }
            return None;
        }
        let end = (start + PAGE_SIZE).min(self.questions.len());
        Some(start..end)
    }

    /// Returns `true` if every question on the page has an answered
    /// draft.
    ///
    /// Pure function of the drafts and question kinds: re-deriving it
    /// from the same draft set always gives the same result. A rating
    /// of `0` counts as answered; blank free text does not.
    #[must_use]
    pub fn page_valid(&self, page: usize) -> bool {
        let Some(range) = self.page_range(page) else {
            return false;
        };
        self.drafts[range].iter().all(AnswerDraft::is_answered)
    }

    /// Advances to the next page.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotAcceptingInput`] while suspended or terminal
    /// - [`EngineError::PageInvalid`] if the current page has
    ///   unanswered questions
    /// - [`EngineError::AtLastPage`] on the last page
    pub fn next_page(&mut self) -> Result<usize, EngineError> {
        let page = self.require_input_phase()?;
        if page >= self.total_pages() {
            return Err(EngineError::AtLastPage);
        }
        if !self.page_valid(page) {
            return Err(EngineError::PageInvalid { page });
        }
        self.phase = AttemptPhase::InProgress { page: page + 1 };
        Ok(page + 1)
    }

    /// Retreats to the previous page.
    ///
    /// Never requires the current page to be valid.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotAcceptingInput`] while suspended or terminal
    /// - [`EngineError::AtFirstPage`] on page 1
    pub fn previous_page(&mut self) -> Result<usize, EngineError> {
        let page = self.require_input_phase()?;
        if page <= 1 {
            return Err(EngineError::AtFirstPage);
        }
        self.phase = AttemptPhase::InProgress { page: page - 1 };
        Ok(page - 1)
    }

    // ------------------------------------------------------------------
    // Answer
    // ------------------------------------------------------------------

    /// Records a rating answer, clamping into `0..=MAX_RATING`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotAcceptingInput`] while suspended or terminal
    /// - [`EngineError::UnknownQuestion`] if the id is not in the
    ///   loaded catalog
    /// - [`EngineError::AnswerKindMismatch`] for a free-text question
    pub fn answer_rating(&mut self, question: QuestionId, value: u8) -> Result<(), EngineError> {
        self.set_draft(question, QuestionKind::Rating, DraftValue::Rating(Some(value.min(MAX_RATING))))
    }

    /// Clears a rating answer back to unanswered.
    ///
    /// # Errors
    ///
    /// Same conditions as [`answer_rating`](Self::answer_rating).
    pub fn clear_rating(&mut self, question: QuestionId) -> Result<(), EngineError> {
        self.set_draft(question, QuestionKind::Rating, DraftValue::Rating(None))
    }

    /// Records a free-text answer. Whitespace-only text leaves the
    /// question unanswered.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotAcceptingInput`] while suspended or terminal
    /// - [`EngineError::UnknownQuestion`] if the id is not in the
    ///   loaded catalog
    /// - [`EngineError::AnswerKindMismatch`] for a rating question
    pub fn answer_text(
        &mut self,
        question: QuestionId,
        text: impl Into<String>,
    ) -> Result<(), EngineError> {
        self.set_draft(question, QuestionKind::FreeText, DraftValue::Text(text.into()))
    }

    fn set_draft(
        &mut self,
        question: QuestionId,
        expected: QuestionKind,
        value: DraftValue,
    ) -> Result<(), EngineError> {
        let page = self.require_input_phase()?;
        let index = self
            .questions
            .iter()
            .position(|q| q.id == question)
            .ok_or(EngineError::UnknownQuestion(question))?;
        if self.questions[index].kind != expected {
            return Err(EngineError::AnswerKindMismatch(question));
        }
        self.drafts[index].value = value;
        // Editing after a failed submission resumes normal progress.
        self.phase = AttemptPhase::InProgress { page };
        Ok(())
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    /// Starts the submission and returns the payload to send.
    ///
    /// Requires the last page and re-verifies **every** draft, not just
    /// the last page's: navigation does not re-validate pages the
    /// respondent retreated to and blanked. Still-unanswered drafts are
    /// filtered from the payload defensively; given the precondition
    /// the filter removes nothing.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotAcceptingInput`] while suspended or terminal
    /// - [`EngineError::NotOnLastPage`] before the last page
    /// - [`EngineError::UnansweredQuestions`] if any draft anywhere is
    ///   unanswered
    pub fn begin_submit(&mut self) -> Result<(SubmitTicket, Vec<SubmittedAnswer>), EngineError> {
        let page = self.require_input_phase()?;
        if page != self.total_pages() {
            return Err(EngineError::NotOnLastPage { page });
        }
        let unanswered = self.drafts.iter().filter(|d| !d.is_answered()).count();
        if unanswered > 0 {
            return Err(EngineError::UnansweredQuestions { count: unanswered });
        }

        let answers: Vec<SubmittedAnswer> = self
            .drafts
            .iter()
            .filter_map(SubmittedAnswer::from_draft)
            .collect();

        self.generation += 1;
        self.last_submit_error = None;
        self.phase = AttemptPhase::Submitting;
        Ok((SubmitTicket(self.generation), answers))
    }

    /// Applies the result of the submission call.
    ///
    /// A stale ticket is dropped without touching any state. On
    /// success the attempt becomes terminal and the drafts are
    /// discarded; on failure the drafts are retained untouched and the
    /// respondent lands back on the last page.
    pub fn complete_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<(), SubmissionError>,
    ) -> Completion {
        if ticket.0 != self.generation || self.phase != AttemptPhase::Submitting {
            tracing::debug!(
                survey = %self.survey,
                ticket = ticket.0,
                generation = self.generation,
                "dropping stale submit completion"
            );
            return Completion::Stale;
        }

        match result {
            Ok(()) => {
                tracing::info!(
                    survey = %self.survey,
                    respondent = %self.respondent,
                    answers = self.drafts.len(),
                    "survey submitted"
                );
                self.drafts.clear();
                self.phase = AttemptPhase::Submitted;
            }
            Err(err) => {
                tracing::warn!(
                    survey = %self.survey,
                    respondent = %self.respondent,
                    error = %err,
                    "submission failed, drafts retained"
                );
                self.last_submit_error = Some(err);
                self.phase = AttemptPhase::SubmitFailed {
                    page: self.total_pages(),
                };
            }
        }
        Completion::Applied
    }

    fn require_input_phase(&self) -> Result<usize, EngineError> {
        match self.phase {
            AttemptPhase::InProgress { page } | AttemptPhase::SubmitFailed { page } => Ok(page),
            _ => Err(EngineError::NotAcceptingInput {
                phase: self.phase.name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::rating(
                    QuestionId::seeded(&format!("cat-{i}")),
                    format!("Question {i}"),
                    "general",
                    i as u32,
                )
            })
            .collect()
    }

    fn loaded_attempt(n: usize) -> SurveyAttempt {
        let mut attempt = SurveyAttempt::new(SurveyId::new(), RespondentId::new());
        let ticket = attempt.begin_load().expect("begin load");
        assert!(attempt.complete_load(ticket, Ok(catalog(n))).is_applied());
        attempt
    }

    fn answer_page(attempt: &mut SurveyAttempt, page: usize) {
        let ids: Vec<QuestionId> = attempt.page_questions(page).iter().map(|q| q.id).collect();
        for id in ids {
            attempt.answer_rating(id, 3).expect("answer");
        }
    }

    #[test]
    fn load_partitions_into_pages() {
        let attempt = loaded_attempt(14);
        assert_eq!(attempt.phase(), AttemptPhase::InProgress { page: 1 });
        assert_eq!(attempt.total_pages(), 2);
        assert_eq!(attempt.page_questions(1).len(), 10);
        assert_eq!(attempt.page_questions(2).len(), 4);
        assert_eq!(attempt.drafts().len(), 14);
    }

    #[test]
    fn load_sorts_by_display_order() {
        let mut attempt = SurveyAttempt::new(SurveyId::new(), RespondentId::new());
        let ticket = attempt.begin_load().unwrap();
        let questions = vec![
            Question::rating(QuestionId::seeded("later"), "B", "c", 20),
            Question::rating(QuestionId::seeded("earlier"), "A", "c", 5),
        ];
        attempt.complete_load(ticket, Ok(questions));

        assert_eq!(attempt.questions()[0].id, QuestionId::seeded("earlier"));
        assert_eq!(attempt.drafts()[0].question, QuestionId::seeded("earlier"));
    }

    #[test]
    fn reload_rebuilds_drafts_from_scratch() {
        let mut attempt = loaded_attempt(14);
        answer_page(&mut attempt, 1);

        let ticket = attempt.begin_load().expect("reload");
        assert!(attempt.complete_load(ticket, Ok(catalog(14))).is_applied());

        assert_eq!(attempt.drafts().len(), 14);
        assert!(attempt.drafts().iter().all(|d| !d.is_answered()));
        assert_eq!(attempt.phase(), AttemptPhase::InProgress { page: 1 });
    }

    #[test]
    fn stale_load_completion_is_dropped() {
        let mut attempt = SurveyAttempt::new(SurveyId::new(), RespondentId::new());
        let first = attempt.begin_load().unwrap();
        let second = attempt.begin_load().unwrap();

        assert_eq!(attempt.complete_load(first, Ok(catalog(3))), Completion::Stale);
        assert_eq!(attempt.phase(), AttemptPhase::Loading);

        assert!(attempt.complete_load(second, Ok(catalog(5))).is_applied());
        assert_eq!(attempt.questions().len(), 5);
    }

    #[test]
    fn duplicate_load_completion_is_dropped() {
        let mut attempt = SurveyAttempt::new(SurveyId::new(), RespondentId::new());
        let ticket = attempt.begin_load().unwrap();
        assert!(attempt.complete_load(ticket, Ok(catalog(3))).is_applied());
        // Same ticket again: the attempt is no longer loading.
        assert_eq!(attempt.complete_load(ticket, Ok(catalog(9))), Completion::Stale);
        assert_eq!(attempt.questions().len(), 3);
    }

    #[test]
    fn load_failure_is_retryable() {
        let mut attempt = SurveyAttempt::new(SurveyId::new(), RespondentId::new());
        let ticket = attempt.begin_load().unwrap();
        attempt.complete_load(ticket, Err(CatalogError::Unavailable("down".to_string())));

        assert_eq!(attempt.phase(), AttemptPhase::LoadFailed);
        assert!(attempt.last_load_error().is_some());

        let retry = attempt.begin_load().expect("retry");
        assert!(attempt.complete_load(retry, Ok(catalog(2))).is_applied());
        assert_eq!(attempt.phase(), AttemptPhase::InProgress { page: 1 });
        assert!(attempt.last_load_error().is_none());
    }

    #[test]
    fn input_rejected_while_loading() {
        let mut attempt = SurveyAttempt::new(SurveyId::new(), RespondentId::new());
        let _ticket = attempt.begin_load().unwrap();

        let err = attempt.answer_rating(QuestionId::new(), 3).unwrap_err();
        assert!(matches!(err, EngineError::NotAcceptingInput { .. }));
        assert!(matches!(
            attempt.next_page().unwrap_err(),
            EngineError::NotAcceptingInput { .. }
        ));
        assert!(matches!(
            attempt.begin_submit().unwrap_err(),
            EngineError::NotAcceptingInput { .. }
        ));
    }

    #[test]
    fn rating_clamps_to_domain() {
        let mut attempt = loaded_attempt(1);
        let id = attempt.questions()[0].id;

        attempt.answer_rating(id, 250).unwrap();
        assert_eq!(
            attempt.drafts()[0].value,
            DraftValue::Rating(Some(MAX_RATING))
        );

        attempt.answer_rating(id, 0).unwrap();
        assert!(attempt.drafts()[0].is_answered());

        attempt.clear_rating(id).unwrap();
        assert!(!attempt.drafts()[0].is_answered());
    }

    #[test]
    fn unknown_question_is_rejected() {
        let mut attempt = loaded_attempt(2);
        let err = attempt.answer_rating(QuestionId::seeded("ghost"), 3).unwrap_err();
        assert!(matches!(err, EngineError::UnknownQuestion(_)));
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let mut attempt = SurveyAttempt::new(SurveyId::new(), RespondentId::new());
        let ticket = attempt.begin_load().unwrap();
        attempt.complete_load(
            ticket,
            Ok(vec![Question::free_text(QuestionId::seeded("ft"), "T", "c", 1)]),
        );

        let err = attempt.answer_rating(QuestionId::seeded("ft"), 3).unwrap_err();
        assert!(matches!(err, EngineError::AnswerKindMismatch(_)));
    }

    #[test]
    fn next_blocked_by_unanswered_question() {
        let mut attempt = loaded_attempt(14);
        // Answer all of page 1 except the third question.
        let ids: Vec<QuestionId> = attempt.page_questions(1).iter().map(|q| q.id).collect();
        for (i, id) in ids.iter().enumerate() {
            if i != 2 {
                attempt.answer_rating(*id, 4).unwrap();
            }
        }

        assert!(!attempt.page_valid(1));
        let err = attempt.next_page().unwrap_err();
        assert!(matches!(err, EngineError::PageInvalid { page: 1 }));

        attempt.answer_rating(ids[2], 0).unwrap();
        assert!(attempt.page_valid(1));
        assert_eq!(attempt.next_page().unwrap(), 2);
        assert_eq!(attempt.current_page(), Some(2));
    }

    #[test]
    fn previous_allowed_without_validity() {
        let mut attempt = loaded_attempt(14);
        answer_page(&mut attempt, 1);
        attempt.next_page().unwrap();

        // Page 2 untouched, retreat is still allowed.
        assert!(!attempt.page_valid(2));
        assert_eq!(attempt.previous_page().unwrap(), 1);
        assert!(matches!(
            attempt.previous_page().unwrap_err(),
            EngineError::AtFirstPage
        ));
    }

    #[test]
    fn next_on_last_page_is_rejected() {
        let mut attempt = loaded_attempt(4);
        answer_page(&mut attempt, 1);
        assert!(matches!(attempt.next_page().unwrap_err(), EngineError::AtLastPage));
    }

    #[test]
    fn submit_requires_last_page() {
        let mut attempt = loaded_attempt(14);
        answer_page(&mut attempt, 1);
        let err = attempt.begin_submit().unwrap_err();
        assert!(matches!(err, EngineError::NotOnLastPage { page: 1 }));
    }

    #[test]
    fn submit_reverifies_all_pages() {
        let mut attempt = loaded_attempt(14);
        answer_page(&mut attempt, 1);
        attempt.next_page().unwrap();
        answer_page(&mut attempt, 2);

        // Retreat and blank an answer on page 1, then return.
        attempt.previous_page().unwrap();
        let first = attempt.questions()[0].id;
        attempt.clear_rating(first).unwrap();
        attempt.next_page().unwrap_err(); // page 1 invalid again
        attempt.answer_rating(first, 2).unwrap();
        attempt.next_page().unwrap();

        // Blanking a prior-page answer does not re-block Next, but
        // submission still catches it.
        attempt.clear_rating(first).unwrap();
        let err = attempt.begin_submit().unwrap_err();
        assert!(matches!(err, EngineError::UnansweredQuestions { count: 1 }));
    }

    #[test]
    fn submit_emits_all_answers() {
        let mut attempt = loaded_attempt(14);
        answer_page(&mut attempt, 1);
        attempt.next_page().unwrap();
        answer_page(&mut attempt, 2);

        let (ticket, answers) = attempt.begin_submit().expect("begin submit");
        assert_eq!(answers.len(), 14);
        assert_eq!(attempt.phase(), AttemptPhase::Submitting);

        // Input rejected while submitting.
        let first = attempt.questions()[0].id;
        assert!(matches!(
            attempt.answer_rating(first, 1).unwrap_err(),
            EngineError::NotAcceptingInput { .. }
        ));

        assert!(attempt.complete_submit(ticket, Ok(())).is_applied());
        assert_eq!(attempt.phase(), AttemptPhase::Submitted);
        assert!(attempt.drafts().is_empty());

        // Terminal: nothing more is accepted.
        assert!(attempt.begin_load().is_err());
        assert!(attempt.begin_submit().is_err());
    }

    #[test]
    fn failed_submit_retains_drafts_and_allows_retry() {
        let mut attempt = loaded_attempt(4);
        answer_page(&mut attempt, 1);

        let (ticket, answers) = attempt.begin_submit().unwrap();
        let before = attempt.drafts().to_vec();
        attempt.complete_submit(
            ticket,
            Err(SubmissionError::Unreachable("gateway timeout".to_string())),
        );

        assert_eq!(attempt.phase(), AttemptPhase::SubmitFailed { page: 1 });
        assert_eq!(attempt.drafts(), before.as_slice());
        assert!(attempt.last_submit_error().is_some());

        // Retry without re-entering anything.
        let (retry, retry_answers) = attempt.begin_submit().expect("retry");
        assert_eq!(retry_answers, answers);
        assert!(attempt.complete_submit(retry, Ok(())).is_applied());
        assert_eq!(attempt.phase(), AttemptPhase::Submitted);
        assert!(attempt.last_submit_error().is_none());
    }

    #[test]
    fn stale_submit_completion_is_dropped() {
        let mut attempt = loaded_attempt(4);
        answer_page(&mut attempt, 1);

        let (ticket, _) = attempt.begin_submit().unwrap();
        attempt.complete_submit(ticket, Err(SubmissionError::Rejected("dup".to_string())));

        // A late success for the superseded call must not submit.
        let (retry, _) = attempt.begin_submit().unwrap();
        assert_eq!(attempt.complete_submit(ticket, Ok(())), Completion::Stale);
        assert_eq!(attempt.phase(), AttemptPhase::Submitting);

        assert!(attempt.complete_submit(retry, Ok(())).is_applied());
        assert_eq!(attempt.phase(), AttemptPhase::Submitted);
    }

    #[test]
    fn editing_after_failed_submit_resumes_progress() {
        let mut attempt = loaded_attempt(4);
        answer_page(&mut attempt, 1);

        let (ticket, _) = attempt.begin_submit().unwrap();
        attempt.complete_submit(ticket, Err(SubmissionError::Rejected("nope".to_string())));

        let id = attempt.questions()[0].id;
        attempt.answer_rating(id, 6).unwrap();
        assert_eq!(attempt.phase(), AttemptPhase::InProgress { page: 1 });
    }

    #[test]
    fn empty_catalog_has_one_valid_page() {
        let attempt = loaded_attempt(0);
        assert_eq!(attempt.total_pages(), 1);
        assert!(attempt.page_valid(1));
    }

    #[test]
    fn phase_predicates() {
        assert!(AttemptPhase::Loading.is_suspended());
        assert!(AttemptPhase::Submitting.is_suspended());
        assert!(!AttemptPhase::InProgress { page: 1 }.is_suspended());

        assert!(AttemptPhase::Submitted.is_terminal());
        assert!(!AttemptPhase::LoadFailed.is_terminal());

        assert!(AttemptPhase::InProgress { page: 2 }.accepts_input());
        assert!(AttemptPhase::SubmitFailed { page: 2 }.accepts_input());
        assert!(!AttemptPhase::Loading.accepts_input());
        assert!(!AttemptPhase::Submitted.accepts_input());

        assert_eq!(AttemptPhase::Submitting.to_string(), "submitting");
        assert_eq!(AttemptPhase::SubmitFailed { page: 2 }.to_string(), "submit_failed");
    }

    #[test]
    fn double_load_is_idempotent_in_shape() {
        let mut attempt = loaded_attempt(14);
        let first_shape: Vec<QuestionId> =
            attempt.drafts().iter().map(|d| d.question).collect();

        let ticket = attempt.begin_load().unwrap();
        attempt.complete_load(ticket, Ok(catalog(14)));
        let second_shape: Vec<QuestionId> =
            attempt.drafts().iter().map(|d| d.question).collect();

        assert_eq!(first_shape, second_shape);
        assert_eq!(attempt.drafts().len(), 14);
    }
}
