//! Boundaries to the external collaborators the diagnostic core consumes.
//!
//! Implementations may block; the orchestrator runs every call through its
//! stage runner so failures, panics, and overruns degrade instead of aborting.

mod diagnosis;
mod parts;
mod retrieval;
mod symptoms;

pub use diagnosis::IDiagnosisProposer;
pub use parts::IPartsGraph;
pub use retrieval::{IHistoricalMatcher, IKnowledgeRetriever};
pub use symptoms::ISymptomExtractor;
