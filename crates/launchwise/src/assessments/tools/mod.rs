mod customer_plan;
mod launch_diagnostic;
mod project_scorer;

pub use customer_plan::CustomerPlan;
pub use launch_diagnostic::LaunchDiagnostic;
pub use project_scorer::ProjectScorer;

use serde::{Deserialize, Serialize};

use super::questionnaire::{AnswerRecord, Questionnaire};
use super::scoring::{BandTable, RuleBook, ScoringResult};

/// A self-assessment tool: fixed questions plus a pure evaluator.
pub trait Assessment: Send + Sync {
    fn rule_book(&self) -> &RuleBook;

    fn kind(&self) -> ToolKind {
        self.rule_book().tool
    }

    fn questionnaire(&self) -> &Questionnaire {
        &self.rule_book().questionnaire
    }

    fn evaluate(&self, answers: &AnswerRecord) -> ScoringResult {
        self.rule_book().evaluate(answers)
    }
}

/// The interactive tools published on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    ProjectScorer,
    LaunchDiagnostic,
    CustomerPlan,
}

static PROJECT_SCORER: ProjectScorer = ProjectScorer;
static LAUNCH_DIAGNOSTIC: LaunchDiagnostic = LaunchDiagnostic;
static CUSTOMER_PLAN: CustomerPlan = CustomerPlan;

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [
        ToolKind::ProjectScorer,
        ToolKind::LaunchDiagnostic,
        ToolKind::CustomerPlan,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            ToolKind::ProjectScorer => "project-scorer",
            ToolKind::LaunchDiagnostic => "launch-diagnostic",
            ToolKind::CustomerPlan => "customer-plan",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            ToolKind::ProjectScorer => "Project Scorer",
            ToolKind::LaunchDiagnostic => "Launch Diagnostic",
            ToolKind::CustomerPlan => "Customer Plan",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ToolKind::ProjectScorer => {
                "Score a side project idea on demand, reach, and how hard customers are to win."
            }
            ToolKind::LaunchDiagnostic => {
                "Estimate the odds that your next launch lands its first paying customers."
            }
            ToolKind::CustomerPlan => {
                "Check whether you are ready to go find your first ten customers."
            }
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(slug.trim()))
    }

    pub fn assessment(self) -> &'static dyn Assessment {
        match self {
            ToolKind::ProjectScorer => &PROJECT_SCORER,
            ToolKind::LaunchDiagnostic => &LAUNCH_DIAGNOSTIC,
            ToolKind::CustomerPlan => &CUSTOMER_PLAN,
        }
    }

    pub fn summary(self) -> ToolSummary {
        ToolSummary {
            slug: self.slug(),
            title: self.title(),
            description: self.description(),
            question_count: self.assessment().questionnaire().len(),
        }
    }

    pub fn definition(self) -> ToolDefinition {
        let rule_book = self.assessment().rule_book();
        ToolDefinition {
            summary: self.summary(),
            questionnaire: rule_book.questionnaire,
            bands: rule_book.bands,
        }
    }
}

/// Listing entry for the tools index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub question_count: usize,
}

/// Everything a client needs to render a tool's questions and possible outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    #[serde(flatten)]
    pub summary: ToolSummary,
    #[serde(flatten)]
    pub questionnaire: Questionnaire,
    pub bands: BandTable,
}
