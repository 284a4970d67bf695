//! Survey catalog types and the survey-response state machine.
//!
//! The heart of this crate is [`SurveyAttempt`] — a synchronous state
//! machine over one respondent's journey through a paginated
//! questionnaire — and [`SurveyRunner`], the thin async driver that
//! connects it to the catalog and submission collaborators.
//!
//! # Attempt Lifecycle
//!
//! ```text
//! Loading ──► InProgress(page) ──► Submitting ──► Submitted
//!    │              ▲    │              │
//!    ▼              │    ▼              ▼
//! LoadFailed        └─ (Next/Previous) SubmitFailed(last page)
//!                                       │  drafts retained
//!                                       └──► (retry submit)
//! ```
//!
//! `Loading` and `Submitting` are the only suspending states: exactly
//! one asynchronous operation is in flight while the attempt sits in
//! one of them, and every respondent-initiated operation is rejected
//! until the completion lands. Completions carry a generation ticket;
//! a completion for a superseded operation is dropped, never applied
//! to the replaced state.
//!
//! # Pagination & Validation
//!
//! Questions partition into fixed pages of [`PAGE_SIZE`]. A page is
//! valid when every question on it has an answered draft (a rating —
//! including the explicit "not applicable" value `0` — or non-blank
//! free text). Validity gates forward navigation and submission;
//! retreating is always allowed. Submission re-verifies every draft,
//! because retreating and blanking an answer does not re-block pages
//! that were already passed.
//!
//! # Example
//!
//! ```
//! use pulse_survey::{Question, SurveyAttempt};
//! use pulse_types::{QuestionId, RespondentId, SurveyId};
//!
//! let questions = vec![
//!     Question::rating(QuestionId::seeded("q1"), "Workload is sustainable", "workload", 1),
//!     Question::free_text(QuestionId::seeded("q2"), "Anything else?", "open", 2),
//! ];
//!
//! let mut attempt = SurveyAttempt::new(SurveyId::new(), RespondentId::new());
//! let ticket = attempt.begin_load().unwrap();
//! attempt.complete_load(ticket, Ok(questions));
//!
//! assert_eq!(attempt.total_pages(), 1);
//! assert!(!attempt.page_valid(1));
//!
//! attempt.answer_rating(QuestionId::seeded("q1"), 4).unwrap();
//! attempt.answer_text(QuestionId::seeded("q2"), "More plants").unwrap();
//! assert!(attempt.page_valid(1));
//! ```

mod answer;
mod attempt;
mod error;
mod provider;
mod question;
mod runner;

pub use answer::{AnswerDraft, AnswerValue, DraftValue, SubmittedAnswer, MAX_RATING};
pub use attempt::{AttemptPhase, Completion, LoadTicket, SubmitTicket, SurveyAttempt, PAGE_SIZE};
pub use error::{CatalogError, EngineError, SubmissionError};
pub use provider::{SubmissionSink, SurveyCatalog};
pub use question::{annotation_numbers, Question, QuestionKind};
pub use runner::SurveyRunner;
