//! Chat-turn request and response records.

use serde::{Deserialize, Serialize};

use garage_calibration::CalibratedConfidence;
use garage_core::errors::DiagnosticResult;
use garage_core::models::{
    ClassificationOutcome, HistoricalMatch, OutcomePayload, PartsDependency, RetrievalAudit,
};
use garage_taxonomy::DiagnosisCandidate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Continue this session; a new one is created when absent or unknown.
    #[serde(default)]
    pub session_id: Option<String>,
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            session_id: None,
            message: message.into(),
        }
    }

    pub fn in_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    /// Assistant text for this turn.
    pub message: String,
    pub outcome: ClassificationOutcome,
    pub diagnosis: Option<DiagnosisCandidate>,
    pub calibration: Option<CalibratedConfidence>,
    pub similar_cases: Vec<HistoricalMatch>,
    pub parts: Option<PartsDependency>,
    pub retrieval_audit: Option<RetrievalAudit>,
    pub loop_count: u32,
    pub needs_input: bool,
    pub is_complete: bool,
}

impl ChatResponse {
    /// A response carrying only a terminal outcome, for turns that never ran the workflow.
    pub(crate) fn bare(
        session_id: String,
        message: String,
        outcome: ClassificationOutcome,
        loop_count: u32,
    ) -> Self {
        Self {
            session_id,
            message,
            outcome,
            diagnosis: None,
            calibration: None,
            similar_cases: Vec::new(),
            parts: None,
            retrieval_audit: None,
            loop_count,
            needs_input: false,
            is_complete: true,
        }
    }

    /// Flat outcome record for the boundary.
    pub fn payload(&self) -> OutcomePayload {
        self.outcome.to_payload()
    }

    pub fn to_json(&self) -> DiagnosticResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
