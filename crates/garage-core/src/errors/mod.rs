mod codes;
mod stage_error;

pub use codes::ErrorCode;
pub use stage_error::{Stage, StageError};

/// Top-level error type for the diagnostic core.
///
/// None of these ever reach a caller as a raw error: the orchestrator maps them
/// to a well-formed outcome at its outermost boundary.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticError {
    #[error("invalid ontology path: {system} -> {component} -> {failure_mode}")]
    InvalidOntologyPath {
        system: String,
        component: String,
        failure_mode: String,
    },

    #[error(transparent)]
    Stage(#[from] StageError),

    #[error("no valid diagnosis candidates survived validation")]
    ProposalEmpty,

    #[error("session not found: {id}")]
    SessionNotFound { id: String },

    #[error("workflow invariant violated: {details}")]
    InvariantViolation { details: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl DiagnosticError {
    /// Stable code used in outcome warnings and log fields.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidOntologyPath { .. } => ErrorCode::InvalidOntologyPath,
            Self::Stage(e) => e.code(),
            Self::ProposalEmpty => ErrorCode::ProposalEmpty,
            Self::SessionNotFound { .. }
            | Self::InvariantViolation { .. }
            | Self::ConfigError(_)
            | Self::SerializationError(_) => ErrorCode::WorkflowError,
        }
    }

    /// Render as a `CODE: message` warning line.
    pub fn to_warning(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}

/// Convenience alias.
pub type DiagnosticResult<T> = Result<T, DiagnosticError>;

/// Result type returned by external collaborators.
pub type StageResult<T> = Result<T, StageError>;
