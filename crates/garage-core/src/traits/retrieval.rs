use crate::errors::StageResult;
use crate::models::{EvidenceItem, HistoricalMatch};

/// Similarity search over previously resolved cases.
pub trait IHistoricalMatcher: Send + Sync {
    /// Up to `k` matches, most similar first.
    fn match_historical(&self, text: &str, k: usize) -> StageResult<Vec<HistoricalMatch>>;
}

/// Retrieval over manuals, bulletins, recalls, and community knowledge.
pub trait IKnowledgeRetriever: Send + Sync {
    /// Up to `k` items in retrieval order. Authority ranking happens downstream.
    fn retrieve(&self, text: &str, k: usize) -> StageResult<Vec<EvidenceItem>>;
}
