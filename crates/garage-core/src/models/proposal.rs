use serde::{Deserialize, Serialize};

/// An untrusted classification proposal. Nothing here is assumed valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProposal {
    pub system: String,
    pub component: String,
    pub failure_mode: String,
    pub confidence: f64,
    #[serde(default)]
    pub reasoning: String,
}

impl RawProposal {
    pub fn new(
        system: impl Into<String>,
        component: impl Into<String>,
        failure_mode: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            system: system.into(),
            component: component.into(),
            failure_mode: failure_mode.into(),
            confidence,
            reasoning: String::new(),
        }
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }
}

/// Everything the proposer returned for one call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalBatch {
    #[serde(default)]
    pub proposals: Vec<RawProposal>,
    /// The proposer judged the complaint to be outside the automotive domain.
    #[serde(default)]
    pub out_of_scope: bool,
}

impl ProposalBatch {
    pub fn new(proposals: Vec<RawProposal>) -> Self {
        Self {
            proposals,
            out_of_scope: false,
        }
    }

    pub fn out_of_scope() -> Self {
        Self {
            proposals: Vec::new(),
            out_of_scope: true,
        }
    }
}
