//! Question definitions, typed answer records, and the step-by-step runner.

mod domain;
mod runner;

pub use domain::{
    Answer, AnswerError, AnswerRecord, ChoiceOption, QuestionDefinition, QuestionKind,
    Questionnaire,
};
pub use runner::{QuestionnaireRunner, StepOutcome};
