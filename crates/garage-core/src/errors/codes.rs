use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable error codes surfaced in outcome warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A proposed (system, component, failure_mode) triple is not in the taxonomy.
    InvalidOntologyPath,
    /// Symptom extraction failed; the workflow continues without symptoms.
    ExtractionFailed,
    /// Historical matching or knowledge retrieval failed.
    RetrievalFailed,
    /// The diagnosis proposer failed.
    ProposalFailed,
    /// No valid candidates survived validation.
    ProposalEmpty,
    /// Unhandled failure anywhere in the workflow.
    WorkflowError,
    /// The complaint text was empty after trimming.
    EmptyInput,
    /// Informational: intake rewrote abbreviations or typos in the complaint.
    Normalized,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidOntologyPath => "INVALID_ONTOLOGY_PATH",
            Self::ExtractionFailed => "EXTRACTION_FAILED",
            Self::RetrievalFailed => "RETRIEVAL_FAILED",
            Self::ProposalFailed => "PROPOSAL_FAILED",
            Self::ProposalEmpty => "PROPOSAL_EMPTY",
            Self::WorkflowError => "WORKFLOW_ERROR",
            Self::EmptyInput => "EMPTY_INPUT",
            Self::Normalized => "NORMALIZED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
