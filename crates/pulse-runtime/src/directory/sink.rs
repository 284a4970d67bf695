//! Recording submission sink.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use pulse_survey::{SubmissionError, SubmissionSink, SubmittedAnswer};
use pulse_types::{RespondentId, SurveyId};
use std::collections::VecDeque;

/// One accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSubmission {
    /// The survey that was answered.
    pub survey: SurveyId,
    /// Who answered.
    pub respondent: RespondentId,
    /// The accepted payload.
    pub answers: Vec<SubmittedAnswer>,
    /// When the sink accepted it.
    pub received_at: DateTime<Utc>,
}

/// Submission sink that records accepted payloads in memory.
///
/// Failures can be queued to simulate an unreliable backend: each
/// queued error fails exactly one `submit` call, then the sink goes
/// back to accepting.
///
/// # Example
///
/// ```
/// use pulse_runtime::directory::RecordingSink;
/// use pulse_survey::{SubmissionError, SubmissionSink};
/// use pulse_types::{RespondentId, SurveyId};
///
/// # async fn example() {
/// let sink = RecordingSink::new();
/// sink.queue_failure(SubmissionError::Unreachable("outage".to_string()));
///
/// let survey = SurveyId::new();
/// let respondent = RespondentId::new();
/// assert!(sink.submit(survey, respondent, &[]).await.is_err());
/// assert!(sink.submit(survey, respondent, &[]).await.is_ok());
/// assert_eq!(sink.submission_count(), 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<RecordedSubmission>>,
    failures: Mutex<VecDeque<SubmissionError>>,
}

impl RecordingSink {
    /// Creates an accepting sink with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an error that will fail the next `submit` call.
    pub fn queue_failure(&self, error: SubmissionError) {
        self.failures.lock().push_back(error);
    }

    /// Returns everything accepted so far.
    #[must_use]
    pub fn submissions(&self) -> Vec<RecordedSubmission> {
        self.received.lock().clone()
    }

    /// Returns how many submissions were accepted.
    #[must_use]
    pub fn submission_count(&self) -> usize {
        self.received.lock().len()
    }
}

impl SubmissionSink for RecordingSink {
    async fn submit(
        &self,
        survey: SurveyId,
        respondent: RespondentId,
        answers: &[SubmittedAnswer],
    ) -> Result<(), SubmissionError> {
        if let Some(error) = self.failures.lock().pop_front() {
            return Err(error);
        }

        self.received.lock().push(RecordedSubmission {
            survey,
            respondent,
            answers: answers.to_vec(),
            received_at: Utc::now(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_survey::AnswerValue;
    use pulse_types::QuestionId;

    #[tokio::test]
    async fn records_accepted_submissions() {
        let sink = RecordingSink::new();
        let survey = SurveyId::new();
        let respondent = RespondentId::new();
        let answers = vec![SubmittedAnswer {
            question: QuestionId::seeded("sk1"),
            value: AnswerValue::Rating(5),
        }];

        sink.submit(survey, respondent, &answers).await.unwrap();

        let recorded = sink.submissions();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].survey, survey);
        assert_eq!(recorded[0].respondent, respondent);
        assert_eq!(recorded[0].answers, answers);
    }

    #[tokio::test]
    async fn queued_failures_fail_one_call_each() {
        let sink = RecordingSink::new();
        sink.queue_failure(SubmissionError::Unreachable("one".to_string()));
        sink.queue_failure(SubmissionError::Rejected("two".to_string()));

        let survey = SurveyId::new();
        let respondent = RespondentId::new();

        assert!(matches!(
            sink.submit(survey, respondent, &[]).await.unwrap_err(),
            SubmissionError::Unreachable(_)
        ));
        assert!(matches!(
            sink.submit(survey, respondent, &[]).await.unwrap_err(),
            SubmissionError::Rejected(_)
        ));
        assert!(sink.submit(survey, respondent, &[]).await.is_ok());
        assert_eq!(sink.submission_count(), 1);
    }
}
