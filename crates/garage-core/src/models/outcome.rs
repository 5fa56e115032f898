use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Intent, Triage};

/// Terminal status of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassificationStatus {
    Confirmed,
    Ambiguous,
    OutOfScope,
    SystemError,
    ValidationFailed,
}

impl ClassificationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Ambiguous => "AMBIGUOUS",
            Self::OutOfScope => "OUT_OF_SCOPE",
            Self::SystemError => "SYSTEM_ERROR",
            Self::ValidationFailed => "VALIDATION_FAILED",
        }
    }
}

impl fmt::Display for ClassificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of classifying a complaint. Each status carries exactly the
/// fields that are meaningful for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassificationOutcome {
    Confirmed {
        intent: Intent,
        triage: Triage,
        #[serde(default)]
        warnings: Vec<String>,
    },
    Ambiguous {
        #[serde(default)]
        intent: Option<Intent>,
        follow_up_questions: Vec<String>,
        #[serde(default)]
        warnings: Vec<String>,
    },
    OutOfScope {
        #[serde(default)]
        warnings: Vec<String>,
    },
    SystemError {
        #[serde(default)]
        warnings: Vec<String>,
    },
    ValidationFailed {
        #[serde(default)]
        warnings: Vec<String>,
    },
}

impl ClassificationOutcome {
    pub fn status(&self) -> ClassificationStatus {
        match self {
            Self::Confirmed { .. } => ClassificationStatus::Confirmed,
            Self::Ambiguous { .. } => ClassificationStatus::Ambiguous,
            Self::OutOfScope { .. } => ClassificationStatus::OutOfScope,
            Self::SystemError { .. } => ClassificationStatus::SystemError,
            Self::ValidationFailed { .. } => ClassificationStatus::ValidationFailed,
        }
    }

    pub fn system_error(warning: impl Into<String>) -> Self {
        Self::SystemError {
            warnings: vec![warning.into()],
        }
    }

    pub fn validation_failed(warning: impl Into<String>) -> Self {
        Self::ValidationFailed {
            warnings: vec![warning.into()],
        }
    }

    pub fn intent(&self) -> Option<&Intent> {
        match self {
            Self::Confirmed { intent, .. } => Some(intent),
            Self::Ambiguous { intent, .. } => intent.as_ref(),
            _ => None,
        }
    }

    pub fn triage(&self) -> Option<&Triage> {
        match self {
            Self::Confirmed { triage, .. } => Some(triage),
            _ => None,
        }
    }

    pub fn follow_up_questions(&self) -> &[String] {
        match self {
            Self::Ambiguous {
                follow_up_questions,
                ..
            } => follow_up_questions,
            _ => &[],
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            Self::Confirmed { warnings, .. }
            | Self::Ambiguous { warnings, .. }
            | Self::OutOfScope { warnings }
            | Self::SystemError { warnings }
            | Self::ValidationFailed { warnings } => warnings,
        }
    }

    /// Append warnings in order, regardless of variant.
    pub fn extend_warnings(&mut self, extra: impl IntoIterator<Item = String>) {
        match self {
            Self::Confirmed { warnings, .. }
            | Self::Ambiguous { warnings, .. }
            | Self::OutOfScope { warnings }
            | Self::SystemError { warnings }
            | Self::ValidationFailed { warnings } => warnings.extend(extra),
        }
    }

    /// Flatten into the boundary payload.
    pub fn to_payload(&self) -> OutcomePayload {
        OutcomePayload {
            status: self.status(),
            intent: self.intent().cloned(),
            triage: self.triage().cloned(),
            follow_up_questions: self.follow_up_questions().to_vec(),
            warnings: self.warnings().to_vec(),
        }
    }
}

/// Flat outcome record exchanged with callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomePayload {
    pub status: ClassificationStatus,
    #[serde(default)]
    pub intent: Option<Intent>,
    #[serde(default)]
    pub triage: Option<Triage>,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl From<&ClassificationOutcome> for OutcomePayload {
    fn from(outcome: &ClassificationOutcome) -> Self {
        outcome.to_payload()
    }
}
