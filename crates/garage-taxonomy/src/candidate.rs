use serde::Serialize;

use garage_core::models::{Intent, TaxonomyPath};
use garage_core::Confidence;

/// A diagnosis whose path is known to exist in the taxonomy.
///
/// Fields are private and the only constructor lives in the validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisCandidate {
    path: TaxonomyPath,
    confidence: Confidence,
    reasoning: String,
    evidence_refs: Vec<String>,
}

impl DiagnosisCandidate {
    pub(crate) fn new(
        path: TaxonomyPath,
        confidence: Confidence,
        reasoning: String,
        evidence_refs: Vec<String>,
    ) -> Self {
        Self {
            path,
            confidence,
            reasoning,
            evidence_refs,
        }
    }

    pub fn path(&self) -> &TaxonomyPath {
        &self.path
    }

    pub fn system(&self) -> &str {
        &self.path.system
    }

    pub fn component(&self) -> &str {
        &self.path.component
    }

    pub fn failure_mode(&self) -> &str {
        &self.path.failure_mode
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn evidence_refs(&self) -> &[String] {
        &self.evidence_refs
    }

    /// Same candidate with a recalibrated confidence. The path is untouched.
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn to_intent(&self, vmrs_code: Option<String>) -> Intent {
        Intent {
            system: self.path.system.clone(),
            component: self.path.component.clone(),
            failure_mode: self.path.failure_mode.clone(),
            confidence: self.confidence,
            vmrs_code,
        }
    }
}
