//! KnowledgeHierarchy: authority-first ordering of retrieved knowledge.
//!
//! Pipeline: priority → stable sort → deduplicate → override marking → audit.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use garage_core::models::{EvidenceItem, RetrievalAudit, SourceType};

use crate::{audit, dedup, priority, supersession};

/// An evidence item annotated with its effective priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEvidence {
    pub item: EvidenceItem,
    pub priority: f64,
    pub is_override: bool,
}

#[derive(Debug, Clone)]
pub struct RerankOutcome {
    pub items: Vec<RankedEvidence>,
    pub audit: RetrievalAudit,
}

impl RerankOutcome {
    pub fn into_items(self) -> Vec<EvidenceItem> {
        self.items.into_iter().map(|r| r.item).collect()
    }
}

/// Stateless re-ranker. Authority strictly dominates relevance score.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeHierarchy;

impl KnowledgeHierarchy {
    pub fn new() -> Self {
        Self
    }

    /// Re-rank against the current UTC date.
    pub fn rerank(&self, items: Vec<EvidenceItem>) -> RerankOutcome {
        self.rerank_at(items, Utc::now().date_naive())
    }

    /// Deterministic core: re-rank as of `today`.
    pub fn rerank_at(&self, items: Vec<EvidenceItem>, today: NaiveDate) -> RerankOutcome {
        let _span = garage_observability::rerank_span!(items.len()).entered();
        let retrieved_count = items.len();

        let mut ranked: Vec<RankedEvidence> = items
            .into_iter()
            .map(|item| RankedEvidence {
                priority: priority::effective_priority(&item, today),
                is_override: supersession::is_override(&item.content),
                item,
            })
            .collect();

        // A fully aged item lands on the next tier's base value; the tier breaks
        // that tie. sort_by is stable: remaining ties keep retrieval order.
        ranked.sort_by(|a, b| {
            a.priority.total_cmp(&b.priority).then_with(|| {
                a.item
                    .source_type
                    .base_priority()
                    .cmp(&b.item.source_type.base_priority())
            })
        });

        let retained = dedup::deduplicate(ranked, |r| r.item.content.as_str());

        log_hierarchy_decision(&retained);

        let audit = audit::build_audit(retrieved_count, &retained, Utc::now());
        RerankOutcome {
            items: retained,
            audit,
        }
    }
}

fn log_hierarchy_decision(retained: &[RankedEvidence]) {
    let Some(top) = retained.first() else {
        return;
    };
    let top_source = top.item.source_type;
    let outranked: Vec<SourceType> = retained[1..]
        .iter()
        .map(|r| r.item.source_type)
        .filter(|s| *s != top_source)
        .collect();
    if !outranked.is_empty() {
        info!(
            top_source = %top_source,
            outranked = ?outranked,
            "knowledge hierarchy applied"
        );
    }
}
