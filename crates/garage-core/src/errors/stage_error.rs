use serde::{Deserialize, Serialize};
use std::fmt;

use super::ErrorCode;

/// External collaborator stage a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    SymptomExtraction,
    HistoricalMatch,
    KnowledgeRetrieval,
    DiagnosisProposal,
    PartsLookup,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SymptomExtraction => "symptom_extraction",
            Self::HistoricalMatch => "historical_match",
            Self::KnowledgeRetrieval => "knowledge_retrieval",
            Self::DiagnosisProposal => "diagnosis_proposal",
            Self::PartsLookup => "parts_lookup",
        }
    }

    /// Warning code used when this stage degrades.
    pub fn failure_code(self) -> ErrorCode {
        match self {
            Self::SymptomExtraction => ErrorCode::ExtractionFailed,
            Self::HistoricalMatch | Self::KnowledgeRetrieval | Self::PartsLookup => {
                ErrorCode::RetrievalFailed
            }
            Self::DiagnosisProposal => ErrorCode::ProposalFailed,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of an external collaborator call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StageError {
    #[error("{stage} failed: {reason}")]
    Failed { stage: Stage, reason: String },

    #[error("{stage} timed out after {after_ms}ms")]
    Timeout { stage: Stage, after_ms: u64 },

    #[error("{stage} panicked")]
    Panicked { stage: Stage },
}

impl StageError {
    pub fn failed(stage: Stage, reason: impl Into<String>) -> Self {
        Self::Failed {
            stage,
            reason: reason.into(),
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Self::Failed { stage, .. } | Self::Timeout { stage, .. } | Self::Panicked { stage } => {
                *stage
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.stage().failure_code()
    }

    /// Render as a `CODE: message` warning line.
    pub fn to_warning(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}
