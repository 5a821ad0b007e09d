use super::bands::BandTable;
use super::triggers::{AnswerFlag, FlagKind, TextTrigger};
use super::{ScoreBounds, ScoringResult};
use crate::assessments::questionnaire::{AnswerRecord, Questionnaire};
use crate::assessments::tools::ToolKind;

/// Fixed rule table for one tool.
#[derive(Debug, Clone, Copy)]
pub struct RuleBook {
    pub tool: ToolKind,
    pub questionnaire: Questionnaire,
    pub bands: BandTable,
    pub triggers: &'static [TextTrigger],
    pub answer_flags: &'static [AnswerFlag],
    pub bounds: ScoreBounds,
}

impl RuleBook {
    pub fn evaluate(&self, answers: &AnswerRecord) -> ScoringResult {
        let mut red_flags = Vec::new();
        let mut green_flags = Vec::new();

        let mut raw_score: i32 = self
            .questionnaire
            .questions
            .iter()
            .map(|question| question.weight_of(answers.get(question.id)))
            .sum();

        for trigger in self.triggers.iter().filter(|trigger| trigger.fires(answers)) {
            raw_score += trigger.adjustment;
            push_flag(&mut red_flags, &mut green_flags, trigger.kind, trigger.message);
        }

        let max_score = self.questionnaire.max_score();
        let percentage = percentage_of(raw_score, max_score);
        let band = self.bands.select(percentage);

        for flag in self.answer_flags.iter().filter(|flag| flag.applies(answers)) {
            push_flag(&mut red_flags, &mut green_flags, flag.kind, flag.message);
        }

        ScoringResult {
            tool: self.tool,
            raw_score,
            max_score,
            score: self.bounds.scale(percentage),
            bounds: self.bounds,
            percentage,
            band: band.label.to_string(),
            verdict: band.verdict.to_string(),
            tags: vec![band.verdict.to_string(), band.label.to_string()],
            insights: band.insights.iter().map(|line| line.to_string()).collect(),
            recommendations: band
                .recommendations
                .iter()
                .map(|line| line.to_string())
                .collect(),
            red_flags,
            green_flags,
            metrics: Vec::new(),
        }
    }
}

fn push_flag(
    red_flags: &mut Vec<String>,
    green_flags: &mut Vec<String>,
    kind: FlagKind,
    message: &str,
) {
    match kind {
        FlagKind::Red => red_flags.push(message.to_string()),
        FlagKind::Green => green_flags.push(message.to_string()),
    }
}

/// Clamp the raw score into `[0, max]` and express it as a rounded percentage.
fn percentage_of(raw_score: i32, max_score: i32) -> u8 {
    if max_score <= 0 {
        return 0;
    }
    let clamped = raw_score.clamp(0, max_score) as i64;
    let max = max_score as i64;
    ((clamped * 100 + max / 2) / max).clamp(0, 100) as u8
}
