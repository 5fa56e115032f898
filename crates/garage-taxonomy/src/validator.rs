//! DiagnosisValidator: the only way to obtain a [`DiagnosisCandidate`].

use std::sync::Arc;

use garage_core::errors::{DiagnosticError, DiagnosticResult, ErrorCode};
use garage_core::models::{HistoricalMatch, RawProposal};
use garage_core::Confidence;
use garage_observability::tracing_setup::events;

use crate::candidate::DiagnosisCandidate;
use crate::registry::TaxonomyRegistry;

/// A proposal that failed the path check, kept for audit and warnings.
#[derive(Debug, Clone)]
pub struct RejectedProposal {
    pub proposal: RawProposal,
    pub error: String,
}

/// Result of validating a batch of proposals.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub accepted: Vec<DiagnosisCandidate>,
    pub rejected: Vec<RejectedProposal>,
}

impl ValidationReport {
    /// `CODE: message` lines for every rejected proposal.
    pub fn warnings(&self) -> Vec<String> {
        self.rejected
            .iter()
            .map(|r| format!("{}: {}", ErrorCode::InvalidOntologyPath, r.error))
            .collect()
    }
}

/// Checks proposals against the taxonomy. Invalid paths are dropped, never fatal.
#[derive(Debug, Clone)]
pub struct DiagnosisValidator {
    registry: Arc<TaxonomyRegistry>,
}

impl DiagnosisValidator {
    pub fn new(registry: Arc<TaxonomyRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TaxonomyRegistry {
        &self.registry
    }

    /// Validate a single proposal. Segments are trimmed and upper-cased first.
    pub fn validate(&self, proposal: &RawProposal) -> DiagnosticResult<DiagnosisCandidate> {
        let path = self
            .registry
            .canonicalize(&proposal.system, &proposal.component, &proposal.failure_mode)
            .ok_or_else(|| DiagnosticError::InvalidOntologyPath {
                system: proposal.system.clone(),
                component: proposal.component.clone(),
                failure_mode: proposal.failure_mode.clone(),
            })?;

        Ok(DiagnosisCandidate::new(
            path,
            Confidence::new(proposal.confidence),
            proposal.reasoning.clone(),
            Vec::new(),
        ))
    }

    /// Validate every proposal, keeping input order among the accepted ones.
    pub fn validate_batch(&self, proposals: &[RawProposal]) -> ValidationReport {
        let mut report = ValidationReport::default();
        for proposal in proposals {
            match self.validate(proposal) {
                Ok(candidate) => report.accepted.push(candidate),
                Err(e) => {
                    events::invalid_path_dropped(
                        &proposal.system,
                        &proposal.component,
                        &proposal.failure_mode,
                    );
                    report.rejected.push(RejectedProposal {
                        proposal: proposal.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
        report
    }

    /// Admit a historical match as a candidate, with its primary confidence capped.
    pub fn validate_historical(
        &self,
        matched: &HistoricalMatch,
        cap: f64,
    ) -> DiagnosticResult<DiagnosisCandidate> {
        let path = self
            .registry
            .canonicalize(&matched.system, &matched.component, &matched.failure_mode)
            .ok_or_else(|| DiagnosticError::InvalidOntologyPath {
                system: matched.system.clone(),
                component: matched.component.clone(),
                failure_mode: matched.failure_mode.clone(),
            })?;

        Ok(DiagnosisCandidate::new(
            path,
            Confidence::new(matched.score.min(cap)),
            format!("Based on similar ticket: {}", matched.id),
            vec![matched.id.clone()],
        ))
    }

    /// Re-check a candidate's path. Used as a last guard before a confirmed outcome.
    pub fn recheck(&self, candidate: &DiagnosisCandidate) -> bool {
        self.registry.contains(candidate.path())
    }
}
