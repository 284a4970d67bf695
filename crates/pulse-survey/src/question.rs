//! Question catalog types.
//!
//! A [`Question`] is an immutable catalog entry owned by the survey
//! definition provider. The per-customer annotation is resolved by the
//! provider at read time; it is never part of the question's identity.

use pulse_types::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Rating on the 0..=6 scale, where 0 is explicit "not applicable".
    Rating,
    /// Free-form text.
    FreeText,
}

/// One catalog question, with its annotation already resolved for the
/// customer the catalog was read for.
///
/// # Example
///
/// ```
/// use pulse_survey::{Question, QuestionKind};
/// use pulse_types::QuestionId;
///
/// let q = Question::rating(QuestionId::seeded("w1"), "Workload is fair", "workload", 3)
///     .with_annotation("Consider the last quarter only");
///
/// assert_eq!(q.kind, QuestionKind::Rating);
/// assert!(q.has_annotation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Catalog identity.
    pub id: QuestionId,
    /// The question text shown to the respondent.
    pub text: String,
    /// Answer mode.
    pub kind: QuestionKind,
    /// Grouping category for reports.
    pub category: String,
    /// Position in the questionnaire; the catalog is ordered by this.
    pub display_order: u32,
    /// Customer-specific clarifying note, attached at read time.
    pub annotation: Option<String>,
}

impl Question {
    /// Creates a rating question without an annotation.
    #[must_use]
    pub fn rating(
        id: QuestionId,
        text: impl Into<String>,
        category: impl Into<String>,
        display_order: u32,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            kind: QuestionKind::Rating,
            category: category.into(),
            display_order,
            annotation: None,
        }
    }

    /// Creates a free-text question without an annotation.
    #[must_use]
    pub fn free_text(
        id: QuestionId,
        text: impl Into<String>,
        category: impl Into<String>,
        display_order: u32,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            kind: QuestionKind::FreeText,
            category: category.into(),
            display_order,
            annotation: None,
        }
    }

    /// Sets the annotation.
    #[must_use]
    pub fn with_annotation(mut self, text: impl Into<String>) -> Self {
        self.annotation = Some(text.into());
        self
    }

    /// Returns `true` if the question carries a non-blank annotation.
    #[must_use]
    pub fn has_annotation(&self) -> bool {
        self.annotation
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty())
    }
}

/// Computes the display numbering of annotated questions.
///
/// Questions bearing a non-blank annotation are numbered 1-based by
/// ascending `display_order` **among the annotated questions only** —
/// the numbering skips unannotated questions entirely. This is a
/// display-only projection, recomputed from the full list on demand
/// and never stored.
///
/// # Example
///
/// ```
/// use pulse_survey::{annotation_numbers, Question};
/// use pulse_types::QuestionId;
///
/// let questions = vec![
///     Question::rating(QuestionId::seeded("a"), "A", "c", 1),
///     Question::rating(QuestionId::seeded("b"), "B", "c", 2).with_annotation("see handbook"),
///     Question::rating(QuestionId::seeded("c"), "C", "c", 3),
///     Question::rating(QuestionId::seeded("d"), "D", "c", 4).with_annotation("per site"),
/// ];
///
/// let numbers = annotation_numbers(&questions);
/// assert_eq!(numbers.get(&QuestionId::seeded("b")), Some(&1));
/// assert_eq!(numbers.get(&QuestionId::seeded("d")), Some(&2));
/// assert_eq!(numbers.get(&QuestionId::seeded("a")), None);
/// ```
#[must_use]
pub fn annotation_numbers(questions: &[Question]) -> HashMap<QuestionId, usize> {
    let mut annotated: Vec<&Question> = questions.iter().filter(|q| q.has_annotation()).collect();
    annotated.sort_by_key(|q| q.display_order);
    annotated
        .iter()
        .enumerate()
        .map(|(i, q)| (q.id, i + 1))
        .collect()
}
