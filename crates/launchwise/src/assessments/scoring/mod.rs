//! Pure evaluation of answer records against a tool's fixed rule book.

mod bands;
mod rule_book;
mod triggers;

pub use bands::{Band, BandTable};
pub use rule_book::RuleBook;
pub use triggers::{AnswerFlag, FlagKind, TextTrigger};

use serde::{Deserialize, Serialize};

use super::tools::ToolKind;

/// Inclusive range the headline score is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBounds {
    pub min: u8,
    pub max: u8,
}

impl ScoreBounds {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: i32) -> u8 {
        value.clamp(self.min as i32, self.max as i32) as u8
    }

    /// Map a 0-100 percentage onto the bounds, rounding half up.
    pub fn scale(&self, percentage: u8) -> u8 {
        let span = self.max.saturating_sub(self.min) as i32;
        let offset = (percentage.min(100) as i32 * span + 50) / 100;
        self.clamp(self.min as i32 + offset)
    }
}

/// Secondary named score reported next to the headline result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMetric {
    pub key: String,
    pub label: String,
    pub value: u8,
    pub bounds: ScoreBounds,
}

/// Evaluator output for one completed answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub tool: ToolKind,
    pub raw_score: i32,
    pub max_score: i32,
    pub score: u8,
    pub bounds: ScoreBounds,
    pub percentage: u8,
    pub band: String,
    pub verdict: String,
    pub tags: Vec<String>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub red_flags: Vec<String>,
    pub green_flags: Vec<String>,
    pub metrics: Vec<ScoreMetric>,
}

impl ScoringResult {
    pub fn metric(&self, key: &str) -> Option<&ScoreMetric> {
        self.metrics.iter().find(|metric| metric.key == key)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} {}/{} ({}%): {}",
            self.tool.title(),
            self.score,
            self.bounds.max,
            self.percentage,
            self.band
        )
    }
}
