use super::domain::{AnswerError, AnswerRecord, QuestionDefinition};
use crate::assessments::scoring::ScoringResult;
use crate::assessments::tools::Assessment;

/// Result of asking the runner to move forward.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Moved to the given 1-based step.
    Advanced(usize),
    /// Final question answered; the record was evaluated.
    Completed(ScoringResult),
    /// Current question is unanswered (or the run already finished); nothing changed.
    Blocked,
}

/// Drives one session through an assessment's questions in order.
pub struct QuestionnaireRunner<'a> {
    assessment: &'a dyn Assessment,
    step: usize,
    answers: AnswerRecord,
}

impl<'a> QuestionnaireRunner<'a> {
    pub fn new(assessment: &'a dyn Assessment) -> Self {
        Self {
            assessment,
            step: 1,
            answers: AnswerRecord::default(),
        }
    }

    /// Current 1-based step; `total_steps() + 1` once complete.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.assessment.questionnaire().len()
    }

    pub fn is_complete(&self) -> bool {
        self.step > self.total_steps()
    }

    pub fn current_question(&self) -> Option<&'static QuestionDefinition> {
        self.assessment
            .questionnaire()
            .questions
            .get(self.step.checked_sub(1)?)
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn into_answers(self) -> AnswerRecord {
        self.answers
    }

    pub fn set_answer(&mut self, question_id: &str, value: &str) -> Result<(), AnswerError> {
        let question = self
            .assessment
            .questionnaire()
            .question(question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.to_string()))?;
        let answer = question.parse_answer(value)?;
        self.answers.insert(question.id, answer);
        Ok(())
    }

    /// Answer whatever question is on screen.
    pub fn answer_current(&mut self, value: &str) -> Result<(), AnswerError> {
        match self.current_question() {
            Some(question) => self.set_answer(question.id, value),
            None => Err(AnswerError::UnknownQuestion(format!("step {}", self.step))),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.current_question()
            .map(|question| self.answers.is_answered(question.id))
            .unwrap_or(false)
    }

    pub fn advance(&mut self) -> StepOutcome {
        if !self.can_advance() {
            return StepOutcome::Blocked;
        }

        self.step += 1;
        if self.is_complete() {
            StepOutcome::Completed(self.assessment.evaluate(&self.answers))
        } else {
            StepOutcome::Advanced(self.step)
        }
    }

    /// Step back one question, keeping every recorded answer. Returns false on the first step.
    pub fn retreat(&mut self) -> bool {
        if self.step <= 1 {
            return false;
        }
        self.step -= 1;
        true
    }
}
