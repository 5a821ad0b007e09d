use super::common::*;
use crate::assessments::questionnaire::{Answer, AnswerError, QuestionnaireRunner, StepOutcome};
use crate::assessments::tools::ToolKind;

#[test]
fn starts_on_first_question_with_empty_record() {
    let runner = QuestionnaireRunner::new(ToolKind::ProjectScorer.assessment());

    assert_eq!(runner.step(), 1);
    assert_eq!(runner.total_steps(), 7);
    assert!(runner.answers().is_empty());
    assert_eq!(
        runner.current_question().map(|question| question.id),
        Some("project_idea")
    );
}

#[test]
fn advance_is_refused_until_current_question_is_answered() {
    let mut runner = QuestionnaireRunner::new(ToolKind::ProjectScorer.assessment());

    assert_eq!(runner.advance(), StepOutcome::Blocked);
    assert_eq!(runner.step(), 1);

    runner
        .set_answer("target_customer", "Freelance developers")
        .expect("valid answer");
    assert_eq!(
        runner.advance(),
        StepOutcome::Blocked,
        "answering a later question does not unlock the current one"
    );

    runner
        .answer_current("Invoice tracker for freelancers")
        .expect("valid answer");
    assert_eq!(runner.advance(), StepOutcome::Advanced(2));
}

#[test]
fn blank_free_text_is_rejected_and_does_not_unlock_advance() {
    let mut runner = QuestionnaireRunner::new(ToolKind::CustomerPlan.assessment());

    assert_eq!(
        runner.answer_current("   "),
        Err(AnswerError::Blank {
            question: "offer".to_string()
        })
    );
    assert!(!runner.can_advance());
}

#[test]
fn free_text_is_stored_trimmed() {
    let mut runner = QuestionnaireRunner::new(ToolKind::CustomerPlan.assessment());
    runner
        .set_answer("offer", "  Bookkeeping for bakeries \n")
        .expect("valid answer");

    assert_eq!(
        runner.answers().get("offer"),
        Some(&Answer::Text("Bookkeeping for bakeries".to_string()))
    );
}

#[test]
fn undeclared_options_and_unknown_questions_are_rejected() {
    let mut runner = QuestionnaireRunner::new(ToolKind::LaunchDiagnostic.assessment());

    assert!(matches!(
        runner.set_answer("audience_size", "millions"),
        Err(AnswerError::UndeclaredOption { .. })
    ));
    assert!(matches!(
        runner.set_answer("favourite_colour", "blue"),
        Err(AnswerError::UnknownQuestion(_))
    ));
    assert!(runner.answers().is_empty());
}

#[test]
fn later_answers_overwrite_earlier_ones() {
    let mut runner = QuestionnaireRunner::new(ToolKind::LaunchDiagnostic.assessment());
    runner.set_answer("waitlist", "small").expect("valid");
    runner.set_answer("waitlist", "large").expect("valid");

    assert_eq!(runner.answers().len(), 1);
    assert_eq!(runner.answers().choice("waitlist"), Some("large"));
}

#[test]
fn retreat_keeps_answers_and_stops_at_first_step() {
    let mut runner = QuestionnaireRunner::new(ToolKind::LaunchDiagnostic.assessment());

    assert!(!runner.retreat());
    runner.answer_current("under_100").expect("valid");
    assert_eq!(runner.advance(), StepOutcome::Advanced(2));

    assert!(runner.retreat());
    assert_eq!(runner.step(), 1);
    assert_eq!(runner.answers().choice("audience_size"), Some("under_100"));
    assert!(runner.can_advance());
}

#[test]
fn final_advance_evaluates_and_matches_direct_evaluation() {
    let assessment = ToolKind::LaunchDiagnostic.assessment();
    let mut runner = QuestionnaireRunner::new(assessment);
    let expected = extreme_answers(ToolKind::LaunchDiagnostic, true);

    let mut outcome = StepOutcome::Blocked;
    while !runner.is_complete() {
        let question = runner.current_question().expect("question on screen");
        let value = expected.choice(question.id).expect("fixture covers every question");
        runner.answer_current(value).expect("valid");
        outcome = runner.advance();
    }

    assert_eq!(runner.step(), runner.total_steps() + 1);
    match outcome {
        StepOutcome::Completed(result) => {
            assert_eq!(result, assessment.evaluate(runner.answers()));
            assert_eq!(result.percentage, 100);
        }
        other => panic!("expected completion, got {other:?}"),
    }

    assert_eq!(runner.advance(), StepOutcome::Blocked, "no advancing past completion");
    assert!(runner.current_question().is_none());
}
