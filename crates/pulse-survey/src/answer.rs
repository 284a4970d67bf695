//! Answer drafts and submitted answers.
//!
//! A draft holds one respondent's in-progress answer to one question.
//! Drafts begin unanswered, mutate in place as the respondent works,
//! and are converted to [`SubmittedAnswer`]s at submission time —
//! unanswered drafts never leave the engine.

use crate::question::{Question, QuestionKind};
use pulse_types::QuestionId;
use serde::{Deserialize, Serialize};

/// Upper bound of the rating scale (inclusive).
///
/// The full domain is `0..=MAX_RATING`, where `0` is the explicit
/// "not applicable" answer. "Unanswered" is not part of the domain:
/// it is modeled as `None` in [`DraftValue::Rating`].
pub const MAX_RATING: u8 = 6;

/// The value held by one in-progress draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftValue {
    /// Rating answer; `None` until the respondent picks a value.
    Rating(Option<u8>),
    /// Free-text answer; blank until the respondent types one.
    Text(String),
}

impl DraftValue {
    /// Returns `true` once the respondent has answered.
    ///
    /// A rating of `0` ("not applicable") counts as answered;
    /// whitespace-only text does not.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Rating(value) => value.is_some(),
            Self::Text(text) => !text.trim().is_empty(),
        }
    }
}

/// One respondent's in-progress answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDraft {
    /// The question this draft answers.
    pub question: QuestionId,
    /// The current value.
    pub value: DraftValue,
}

impl AnswerDraft {
    /// Creates the initial, unanswered draft for a question.
    #[must_use]
    pub fn for_question(question: &Question) -> Self {
        let value = match question.kind {
            QuestionKind::Rating => DraftValue::Rating(None),
            QuestionKind::FreeText => DraftValue::Text(String::new()),
        };
        Self {
            question: question.id,
            value,
        }
    }

    /// Returns `true` once the respondent has answered.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.value.is_answered()
    }
}

/// A finalized answer value as emitted to the submission sink.
///
/// Serializes untagged: ratings as numbers, free text as strings, so
/// the payload entry is `{ "question": …, "value": 4 }` or
/// `{ "question": …, "value": "…" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Rating in `0..=MAX_RATING`.
    Rating(u8),
    /// Non-blank free text.
    Text(String),
}

/// One entry of the submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    /// The answered question.
    pub question: QuestionId,
    /// The finalized value.
    pub value: AnswerValue,
}

impl SubmittedAnswer {
    /// Converts an answered draft; returns `None` for unanswered ones.
    ///
    /// # Example
    ///
    /// ```
    /// use pulse_survey::{AnswerDraft, DraftValue, SubmittedAnswer};
    /// use pulse_types::QuestionId;
    ///
    /// let unanswered = AnswerDraft {
    ///     question: QuestionId::new(),
    ///     value: DraftValue::Rating(None),
    /// };
    /// assert!(SubmittedAnswer::from_draft(&unanswered).is_none());
    ///
    /// let answered = AnswerDraft {
    ///     question: QuestionId::new(),
    ///     value: DraftValue::Rating(Some(0)),
    /// };
    /// assert!(SubmittedAnswer::from_draft(&answered).is_some());
    /// ```
    #[must_use]
    pub fn from_draft(draft: &AnswerDraft) -> Option<Self> {
        let value = match &draft.value {
            DraftValue::Rating(Some(v)) => AnswerValue::Rating(*v),
            DraftValue::Rating(None) => return None,
            DraftValue::Text(text) => {
                if text.trim().is_empty() {
                    return None;
                }
                AnswerValue::Text(text.clone())
            }
        };
        Some(Self {
            question: draft.question,
            value,
        })
    }
}
