//! # garage-retrieval
//!
//! KnowledgeHierarchy: re-ranks retrieved knowledge by source authority and
//! age, drops near-duplicates, flags override notices, and records an audit.

pub mod audit;
pub mod dedup;
pub mod hierarchy;
pub mod priority;
pub mod supersession;

pub use hierarchy::{KnowledgeHierarchy, RankedEvidence, RerankOutcome};
