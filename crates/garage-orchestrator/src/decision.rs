//! Turns ranked candidates and their resolution into a terminal outcome.

use garage_core::errors::DiagnosticError;
use garage_core::models::ClassificationOutcome;
use garage_resolution::Resolution;
use garage_taxonomy::{DiagnosisCandidate, DiagnosisValidator, VmrsMapper};
use garage_triage::TriageEngine;

pub(crate) struct OutcomeRules {
    validator: DiagnosisValidator,
    triage: TriageEngine,
    vmrs: VmrsMapper,
}

impl OutcomeRules {
    pub(crate) fn new(validator: DiagnosisValidator) -> Self {
        Self {
            validator,
            triage: TriageEngine::new(),
            vmrs: VmrsMapper::new(),
        }
    }

    pub(crate) fn validator(&self) -> &DiagnosisValidator {
        &self.validator
    }

    /// `ranked` must be in rank order and `resolution` computed from it.
    pub(crate) fn decide(
        &self,
        ranked: &[DiagnosisCandidate],
        resolution: &Resolution,
        out_of_scope: bool,
        mut warnings: Vec<String>,
    ) -> ClassificationOutcome {
        let Some(top) = ranked.first() else {
            if out_of_scope {
                return ClassificationOutcome::OutOfScope { warnings };
            }
            return ClassificationOutcome::Ambiguous {
                intent: None,
                follow_up_questions: resolution.follow_up_questions().to_vec(),
                warnings,
            };
        };

        if !self.validator.recheck(top) {
            let path = top.path();
            warnings.push(
                DiagnosticError::InvalidOntologyPath {
                    system: path.system.clone(),
                    component: path.component.clone(),
                    failure_mode: path.failure_mode.clone(),
                }
                .to_warning(),
            );
            return ClassificationOutcome::ValidationFailed { warnings };
        }

        let intent = top.to_intent(self.vmrs.code_for(top.path()).map(|v| v.code));
        match resolution {
            Resolution::Confirmed => ClassificationOutcome::Confirmed {
                intent,
                triage: self.triage.assess(top.path()),
                warnings,
            },
            Resolution::Ambiguous {
                follow_up_questions,
            } => ClassificationOutcome::Ambiguous {
                intent: Some(intent),
                follow_up_questions: follow_up_questions.clone(),
                warnings,
            },
        }
    }
}

/// Append a warning unless the turn already carries it.
pub(crate) fn push_warning(warnings: &mut Vec<String>, warning: String) {
    if !warnings.contains(&warning) {
        warnings.push(warning);
    }
}
