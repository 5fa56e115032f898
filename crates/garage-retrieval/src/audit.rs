use chrono::{DateTime, Utc};
use garage_core::models::{AuditedSource, RetrievalAudit};

use crate::hierarchy::RankedEvidence;

/// Build the audit record for one re-ranking pass.
pub fn build_audit(
    retrieved_count: usize,
    retained: &[RankedEvidence],
    timestamp: DateTime<Utc>,
) -> RetrievalAudit {
    RetrievalAudit {
        retrieved_count,
        retained_count: retained.len(),
        sources: retained
            .iter()
            .map(|r| AuditedSource {
                source_type: r.item.source_type,
                priority: r.priority,
                is_override: r.is_override,
            })
            .collect(),
        timestamp,
    }
}
