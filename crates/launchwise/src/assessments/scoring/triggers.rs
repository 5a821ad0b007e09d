use serde::Serialize;

use crate::assessments::questionnaire::AnswerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    Red,
    Green,
}

/// Phrase check on a free-text answer. Fires at most once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextTrigger {
    pub key: &'static str,
    pub question: &'static str,
    pub phrases: &'static [&'static str],
    pub kind: FlagKind,
    pub adjustment: i32,
    pub message: &'static str,
}

impl TextTrigger {
    /// Case-insensitive substring match against the recorded text.
    pub fn fires(&self, answers: &AnswerRecord) -> bool {
        let Some(text) = answers.text(self.question) else {
            return false;
        };
        let haystack = text.to_lowercase();
        self.phrases
            .iter()
            .any(|phrase| haystack.contains(&phrase.to_lowercase()))
    }
}

/// Fixed flag raised by a specific option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerFlag {
    pub question: &'static str,
    pub value: &'static str,
    pub kind: FlagKind,
    pub message: &'static str,
}

impl AnswerFlag {
    pub fn applies(&self, answers: &AnswerRecord) -> bool {
        answers.choice(self.question) == Some(self.value)
    }
}
