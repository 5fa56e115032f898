use crate::errors::StageResult;
use crate::models::{EvidenceBundle, ProposalBatch};

/// Produces candidate classifications from an evidence bundle.
///
/// Output is untrusted: every proposal is validated against the taxonomy.
pub trait IDiagnosisProposer: Send + Sync {
    fn propose(&self, bundle: &EvidenceBundle) -> StageResult<ProposalBatch>;
}
