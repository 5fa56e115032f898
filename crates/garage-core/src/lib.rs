//! # garage-core
//!
//! Foundation crate for the GarageIQ diagnostic core.
//! Defines the shared data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod confidence;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use confidence::Confidence;
pub use config::DiagnosticConfig;
pub use errors::{DiagnosticError, DiagnosticResult, ErrorCode, StageError, StageResult};
pub use models::{
    ClassificationOutcome, ClassificationStatus, EvidenceBundle, EvidenceItem, HistoricalMatch,
    Intent, RawProposal, Severity, SourceType, SymptomExtraction, TaxonomyPath, Triage,
    VehicleState,
};
