use serde::{Deserialize, Serialize};

use super::{EvidenceItem, HistoricalMatch, SymptomExtraction, VehicleInfo};

/// Evidence handed to the diagnosis proposer for one pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceBundle {
    /// Current query; replaced by the refined query after reflection.
    pub working_input: String,
    /// The complaint after abbreviation and slang expansion.
    pub complaint: String,
    pub symptoms: SymptomExtraction,
    pub historical: Vec<HistoricalMatch>,
    pub knowledge: Vec<EvidenceItem>,
    /// Flattened taxonomy listing the proposer must choose from.
    pub taxonomy_listing: String,
    /// Vehicle decoded from a VIN or registration the customer mentioned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleInfo>,
}

impl EvidenceBundle {
    /// A bundle carrying only the complaint and taxonomy, for single-shot classification.
    pub fn complaint_only(complaint: impl Into<String>, taxonomy_listing: impl Into<String>) -> Self {
        let complaint = complaint.into();
        Self {
            working_input: complaint.clone(),
            complaint,
            taxonomy_listing: taxonomy_listing.into(),
            ..Self::default()
        }
    }
}
