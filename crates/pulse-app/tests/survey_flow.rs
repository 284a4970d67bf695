//! End-to-end survey flow: pagination, validation gates, submission,
//! and retry after a sink failure.

mod common;

use common::{app, plant1, EMPLOYEE_EMAIL, PASSWORD};
use pulse_app::{AttemptPhase, Credentials, Navigation, Route};
use pulse_survey::{AnswerValue, EngineError, QuestionKind};
use pulse_types::QuestionId;

/// Answers every question on the given page with rating 4 / short text.
fn answer_page(
    runner: &mut pulse_app::SurveyRunner<
        std::sync::Arc<pulse_app::Directory>,
        std::sync::Arc<pulse_app::RecordingSink>,
    >,
    page: usize,
) {
    let questions: Vec<(QuestionId, QuestionKind)> = runner
        .attempt()
        .page_questions(page)
        .iter()
        .map(|q| (q.id, q.kind))
        .collect();
    for (id, kind) in questions {
        match kind {
            QuestionKind::Rating => runner.attempt_mut().answer_rating(id, 4).unwrap(),
            QuestionKind::FreeText => runner
                .attempt_mut()
                .answer_text(id, "could be better")
                .unwrap(),
        }
    }
}

#[tokio::test]
async fn fourteen_questions_paginate_and_gate_navigation() {
    // Scenario: a 14-question catalog paginates into 10 + 4; `Next` is
    // rejected while question 3 of page 1 is unanswered and succeeds
    // once the page is complete.
    let mut app = app();
    app.login(&Credentials::new(EMPLOYEE_EMAIL, PASSWORD))
        .await
        .expect("login");
    assert_eq!(
        app.navigate("/survey"),
        Navigation::Proceed {
            route: Route::Survey,
            restriction_notice: false,
        }
    );

    let mut runner = app.start_survey(plant1()).expect("start survey");
    let phase = runner.load().await.expect("load");
    assert_eq!(phase, AttemptPhase::InProgress { page: 1 });
    assert_eq!(runner.attempt().total_pages(), 2);
    assert_eq!(runner.attempt().page_questions(1).len(), 10);
    assert_eq!(runner.attempt().page_questions(2).len(), 4);

    // Answer everything on page 1 except the third question.
    let page1: Vec<(QuestionId, QuestionKind)> = runner
        .attempt()
        .page_questions(1)
        .iter()
        .map(|q| (q.id, q.kind))
        .collect();
    for (i, (id, kind)) in page1.iter().enumerate() {
        if i == 2 {
            continue;
        }
        match kind {
            QuestionKind::Rating => runner.attempt_mut().answer_rating(*id, 5).unwrap(),
            QuestionKind::FreeText => runner.attempt_mut().answer_text(*id, "fine").unwrap(),
        }
    }

    let err = runner.attempt_mut().next_page().unwrap_err();
    assert!(matches!(err, EngineError::PageInvalid { page: 1 }));

    // Complete the page: an explicit "not applicable" (0) counts.
    runner.attempt_mut().answer_rating(page1[2].0, 0).unwrap();
    assert_eq!(runner.attempt_mut().next_page().unwrap(), 2);
    assert_eq!(runner.attempt().current_page(), Some(2));
}

#[tokio::test]
async fn submission_emits_every_answer() {
    // Scenario: on the final page, `Submit` with all pages valid ends
    // in `Submitted` and the emitted answer list covers every question
    // with no unanswered entries.
    let mut app = app();
    app.login(&Credentials::new(EMPLOYEE_EMAIL, PASSWORD))
        .await
        .expect("login");

    let mut runner = app.start_survey(plant1()).expect("start survey");
    runner.load().await.expect("load");

    answer_page(&mut runner, 1);
    runner.attempt_mut().next_page().expect("to page 2");
    answer_page(&mut runner, 2);

    let phase = runner.submit().await.expect("submit");
    assert_eq!(phase, AttemptPhase::Submitted);
    assert!(runner.attempt().drafts().is_empty());

    let submissions = app.sink().submissions();
    assert_eq!(submissions.len(), 1);
    let submission = &submissions[0];
    assert_eq!(submission.answers.len(), 14);

    // The respondent resolved to Sam's employee record.
    assert_eq!(
        submission.respondent,
        pulse_types::RespondentId::seeded("sam")
    );

    // No unanswered values made it out.
    for answer in &submission.answers {
        match &answer.value {
            AnswerValue::Rating(v) => assert!(*v <= pulse_survey::MAX_RATING),
            AnswerValue::Text(t) => assert!(!t.trim().is_empty()),
        }
    }
}

#[tokio::test]
async fn failed_submission_preserves_drafts_for_retry() {
    // Scenario: the sink reports a failure; the drafts survive
    // untouched and a retry succeeds without re-entering answers.
    let mut app = app();
    app.login(&Credentials::new(EMPLOYEE_EMAIL, PASSWORD))
        .await
        .expect("login");

    let mut runner = app.start_survey(plant1()).expect("start survey");
    runner.load().await.expect("load");
    answer_page(&mut runner, 1);
    runner.attempt_mut().next_page().expect("to page 2");
    answer_page(&mut runner, 2);

    app.sink().queue_failure(pulse_survey::SubmissionError::Unreachable(
        "gateway timeout".to_string(),
    ));

    let drafts_before = runner.attempt().drafts().to_vec();
    let phase = runner.submit().await.expect("submit call");
    assert_eq!(phase, AttemptPhase::SubmitFailed { page: 2 });
    assert_eq!(runner.attempt().drafts(), drafts_before.as_slice());
    assert!(runner.attempt().last_submit_error().is_some());
    assert_eq!(app.sink().submission_count(), 0);

    let phase = runner.submit().await.expect("retry");
    assert_eq!(phase, AttemptPhase::Submitted);
    assert_eq!(app.sink().submission_count(), 1);
    assert_eq!(app.sink().submissions()[0].answers.len(), 14);
}

#[tokio::test]
async fn annotations_reach_the_respondent() {
    // Staff annotate a question for Plant 1; the employee's loaded
    // catalog carries the text, and the annotation numbering counts
    // only annotated questions.
    let mut app = app();
    app.login(&Credentials::new(common::ADMIN_EMAIL, PASSWORD))
        .await
        .expect("admin login");

    app.annotate_question(common::question_id(3), plant1(), "night shift too")
        .await
        .expect("annotate");
    app.annotate_question(common::question_id(9), plant1(), "per site")
        .await
        .expect("annotate");

    app.login(&Credentials::new(EMPLOYEE_EMAIL, PASSWORD))
        .await
        .expect("employee login");
    let mut runner = app.start_survey(plant1()).expect("start survey");
    runner.load().await.expect("load");

    let questions = runner.attempt().questions();
    let annotated: Vec<_> = questions.iter().filter(|q| q.has_annotation()).collect();
    assert_eq!(annotated.len(), 2);

    let numbers = pulse_survey::annotation_numbers(questions);
    assert_eq!(numbers[&common::question_id(3)], 1);
    assert_eq!(numbers[&common::question_id(9)], 2);
}
