use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SourceType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditedSource {
    pub source_type: SourceType,
    pub priority: f64,
    pub is_override: bool,
}

/// Record of one knowledge re-ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalAudit {
    /// Items handed to the re-ranker.
    pub retrieved_count: usize,
    /// Items left after deduplication.
    pub retained_count: usize,
    pub sources: Vec<AuditedSource>,
    pub timestamp: DateTime<Utc>,
}
