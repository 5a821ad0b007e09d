use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::questionnaire::{AnswerError, AnswerRecord};
use super::scoring::ScoringResult;
use super::tools::ToolKind;
use crate::backend::{self, BackendClient, BackendError, Filter, SortOrder, SUBMISSIONS_TABLE};
use crate::config::AssessmentSettings;

/// Identifier wrapper for stored tool runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    /// Random v4 id, unique across restarts and replicas sharing one store.
    pub fn generate() -> Self {
        Self(format!("sub-{}", Uuid::new_v4().simple()))
    }
}

/// Inbound payload for a completed tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Evaluated run returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub result: ScoringResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<SubmissionId>,
}

/// Stored row for a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub tool: ToolKind,
    pub email: String,
    pub percentage: u8,
    pub band: String,
    pub answers: AnswerRecord,
    pub result: ScoringResult,
    pub submitted_at: DateTime<Utc>,
}

/// Public listing entry for a stored run; leaves out who submitted it and what they answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionSummary {
    pub id: SubmissionId,
    pub tool: ToolKind,
    pub percentage: u8,
    pub band: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<SubmissionRecord> for SubmissionSummary {
    fn from(record: SubmissionRecord) -> Self {
        Self {
            id: record.id,
            tool: record.tool,
            percentage: record.percentage,
            band: record.band,
            submitted_at: record.submitted_at,
        }
    }
}

/// Service wrapping the pure evaluators with input validation and optional storage.
pub struct AssessmentService<B> {
    backend: Arc<B>,
    settings: AssessmentSettings,
}

impl<B> AssessmentService<B>
where
    B: BackendClient + 'static,
{
    pub fn new(backend: Arc<B>, settings: AssessmentSettings) -> Self {
        Self { backend, settings }
    }

    pub fn resolve(&self, slug: &str) -> Result<ToolKind, AssessmentServiceError> {
        ToolKind::from_slug(slug).ok_or_else(|| AssessmentServiceError::UnknownTool(slug.to_string()))
    }

    /// Validate the answers, evaluate them, and store the run when an email is attached.
    pub fn run(
        &self,
        tool: ToolKind,
        request: AssessmentRequest,
    ) -> Result<AssessmentResponse, AssessmentServiceError> {
        let assessment = tool.assessment();
        let answers = assessment.questionnaire().record_from_raw(&request.answers)?;
        let result = assessment.evaluate(&answers);

        info!(
            tool = tool.slug(),
            percentage = result.percentage,
            band = %result.band,
            "assessment evaluated"
        );

        let email = request
            .email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty());

        let submission_id = match email {
            Some(email) if self.settings.store_submissions => {
                Some(self.store(tool, email, answers, &result)?)
            }
            _ => None,
        };

        Ok(AssessmentResponse {
            result,
            submission_id,
        })
    }

    fn store(
        &self,
        tool: ToolKind,
        email: &str,
        answers: AnswerRecord,
        result: &ScoringResult,
    ) -> Result<SubmissionId, AssessmentServiceError> {
        let record = SubmissionRecord {
            id: SubmissionId::generate(),
            tool,
            email: email.to_ascii_lowercase(),
            percentage: result.percentage,
            band: result.band.clone(),
            answers,
            result: result.clone(),
            submitted_at: Utc::now(),
        };

        let row = backend::to_row(&record)?;
        if let Err(err) = self.backend.insert(SUBMISSIONS_TABLE, row) {
            warn!(tool = tool.slug(), error = %err, "failed to store tool submission");
            return Err(err.into());
        }
        Ok(record.id)
    }

    /// Stored runs for one tool, newest first.
    pub fn submissions(
        &self,
        tool: ToolKind,
    ) -> Result<Vec<SubmissionRecord>, AssessmentServiceError> {
        let filter = Filter::new()
            .eq("tool", tool.slug())
            .order_by("submitted_at", SortOrder::Descending);
        Ok(backend::select_as(&*self.backend, SUBMISSIONS_TABLE, &filter)?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),
    #[error(transparent)]
    Answers(#[from] AnswerError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}
