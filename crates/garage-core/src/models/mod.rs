mod audit;
mod bundle;
mod degradation_event;
mod evidence;
mod historical;
mod intent;
mod outcome;
mod parts;
mod proposal;
mod symptoms;
mod taxonomy_path;
mod triage;
mod vehicle;

pub use audit::{AuditedSource, RetrievalAudit};
pub use bundle::EvidenceBundle;
pub use degradation_event::DegradationEvent;
pub use evidence::{EvidenceItem, SourceType};
pub use historical::HistoricalMatch;
pub use intent::Intent;
pub use outcome::{ClassificationOutcome, ClassificationStatus, OutcomePayload};
pub use parts::PartsDependency;
pub use proposal::{ProposalBatch, RawProposal};
pub use symptoms::SymptomExtraction;
pub use taxonomy_path::TaxonomyPath;
pub use triage::{Severity, Triage, VehicleState};
pub use vehicle::VehicleInfo;
