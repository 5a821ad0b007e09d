use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One selectable answer for a single-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub weight: i32,
}

/// Input mode of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice { options: &'static [ChoiceOption] },
    FreeText { placeholder: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionDefinition {
    pub id: &'static str,
    pub prompt: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl QuestionDefinition {
    pub const fn choice(
        id: &'static str,
        prompt: &'static str,
        options: &'static [ChoiceOption],
    ) -> Self {
        Self {
            id,
            prompt,
            kind: QuestionKind::SingleChoice { options },
        }
    }

    pub const fn free_text(id: &'static str, prompt: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            prompt,
            kind: QuestionKind::FreeText { placeholder },
        }
    }

    pub fn option(&self, value: &str) -> Option<&'static ChoiceOption> {
        match self.kind {
            QuestionKind::SingleChoice { options } => {
                options.iter().find(|option| option.value == value)
            }
            QuestionKind::FreeText { .. } => None,
        }
    }

    /// Highest weight any option contributes; free-text questions contribute nothing.
    pub fn max_weight(&self) -> i32 {
        match self.kind {
            QuestionKind::SingleChoice { options } => options
                .iter()
                .map(|option| option.weight)
                .max()
                .unwrap_or(0)
                .max(0),
            QuestionKind::FreeText { .. } => 0,
        }
    }

    /// Weight of the recorded answer, zero when unset, free text, or undeclared.
    pub fn weight_of(&self, answer: Option<&Answer>) -> i32 {
        match answer {
            Some(Answer::Choice(value)) => self.option(value).map(|option| option.weight).unwrap_or(0),
            _ => 0,
        }
    }

    /// Validate and normalize a raw value for this question.
    pub fn parse_answer(&self, raw: &str) -> Result<Answer, AnswerError> {
        match self.kind {
            QuestionKind::SingleChoice { .. } => match self.option(raw.trim()) {
                Some(option) => Ok(Answer::Choice(option.value.to_string())),
                None => Err(AnswerError::UndeclaredOption {
                    question: self.id.to_string(),
                    value: raw.to_string(),
                }),
            },
            QuestionKind::FreeText { .. } => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Err(AnswerError::Blank {
                        question: self.id.to_string(),
                    })
                } else {
                    Ok(Answer::Text(trimmed.to_string()))
                }
            }
        }
    }
}

/// Static, ordered list of questions making up one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    pub questions: &'static [QuestionDefinition],
}

impl Questionnaire {
    pub const fn new(questions: &'static [QuestionDefinition]) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &str) -> Option<&'static QuestionDefinition> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Sum of each question's highest weight.
    pub fn max_score(&self) -> i32 {
        self.questions.iter().map(QuestionDefinition::max_weight).sum()
    }

    /// Build a typed record from loosely-typed `id -> value` pairs (JSON bodies, answer files).
    pub fn record_from_raw(
        &self,
        raw: &BTreeMap<String, String>,
    ) -> Result<AnswerRecord, AnswerError> {
        let mut record = AnswerRecord::default();
        for (id, value) in raw {
            let question = self
                .question(id)
                .ok_or_else(|| AnswerError::UnknownQuestion(id.clone()))?;
            record.insert(question.id, question.parse_answer(value)?);
        }
        Ok(record)
    }
}

/// Answer captured for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Choice(String),
    Text(String),
}

impl Answer {
    pub fn as_str(&self) -> &str {
        match self {
            Answer::Choice(value) | Answer::Text(value) => value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

/// Answers collected during one questionnaire session, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord {
    answers: BTreeMap<String, Answer>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: &str, answer: Answer) {
        self.answers.insert(question.to_string(), answer);
    }

    pub fn get(&self, question: &str) -> Option<&Answer> {
        self.answers.get(question)
    }

    pub fn text(&self, question: &str) -> Option<&str> {
        self.get(question).map(Answer::as_str)
    }

    pub fn choice(&self, question: &str) -> Option<&str> {
        match self.get(question) {
            Some(Answer::Choice(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_answered(&self, question: &str) -> bool {
        self.get(question).map(|answer| !answer.is_blank()).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers.iter().map(|(id, answer)| (id.as_str(), answer))
    }
}

impl FromIterator<(&'static str, Answer)> for AnswerRecord {
    fn from_iter<T: IntoIterator<Item = (&'static str, Answer)>>(iter: T) -> Self {
        let mut record = AnswerRecord::default();
        for (question, answer) in iter {
            record.insert(question, answer);
        }
        record
    }
}

/// Rejected answer input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("'{value}' is not an option for question '{question}'")]
    UndeclaredOption { question: String, value: String },
    #[error("question '{question}' requires a non-empty answer")]
    Blank { question: String },
}
