//! Interactive self-assessment tools: question definitions, the step runner, the pure
//! scoring evaluator, and the HTTP/service layer that wraps them.
//!
//! Evaluation never touches the clock, randomness, or the backend. Storage of completed
//! runs happens in `service` after the result is computed.

pub mod questionnaire;
pub mod router;
pub mod scoring;
pub mod service;
pub mod tools;

#[cfg(test)]
mod tests;

pub use questionnaire::{
    Answer, AnswerError, AnswerRecord, ChoiceOption, QuestionDefinition, QuestionKind, Questionnaire,
    QuestionnaireRunner, StepOutcome,
};
pub use router::assessment_router;
pub use scoring::{ScoreBounds, ScoreMetric, ScoringResult};
pub use service::{
    AssessmentRequest, AssessmentResponse, AssessmentService, AssessmentServiceError,
    SubmissionId, SubmissionRecord, SubmissionSummary,
};
pub use tools::{Assessment, CustomerPlan, LaunchDiagnostic, ProjectScorer, ToolKind};
