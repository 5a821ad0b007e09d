use std::collections::BTreeMap;
use std::sync::Arc;

use crate::assessments::questionnaire::{AnswerRecord, QuestionKind};
use crate::assessments::service::AssessmentService;
use crate::assessments::tools::ToolKind;
use crate::config::AssessmentSettings;

pub(super) use crate::test_support::{read_json_body, MemoryBackend, UnavailableBackend};

/// Free text that trips none of the phrase triggers.
pub(super) const NEUTRAL_TEXT: &str = "Independent bookshops in Leeds";

pub(super) fn answers(tool: ToolKind, pairs: &[(&str, &str)]) -> AnswerRecord {
    let raw: BTreeMap<String, String> = pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect();
    tool.assessment()
        .questionnaire()
        .record_from_raw(&raw)
        .expect("fixture answers are valid")
}

/// Every choice question answered with its highest (or lowest) weighted option.
pub(super) fn extreme_answers(tool: ToolKind, highest: bool) -> AnswerRecord {
    let pairs: Vec<(&str, &str)> = tool
        .assessment()
        .questionnaire()
        .questions
        .iter()
        .map(|question| match question.kind {
            QuestionKind::SingleChoice { options } => {
                let pick = if highest {
                    options.iter().max_by_key(|option| option.weight)
                } else {
                    options.iter().min_by_key(|option| option.weight)
                };
                (question.id, pick.expect("options declared").value)
            }
            QuestionKind::FreeText { .. } => (question.id, NEUTRAL_TEXT),
        })
        .collect();
    answers(tool, &pairs)
}

pub(super) fn raw_answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect()
}

pub(super) fn build_service() -> (AssessmentService<MemoryBackend>, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::default());
    let service = AssessmentService::new(backend.clone(), AssessmentSettings::default());
    (service, backend)
}
