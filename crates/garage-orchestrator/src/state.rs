//! Workflow states and the pure transition function between them.

use serde::Serialize;
use std::fmt;

use garage_core::constants::{CONFIDENCE_THRESHOLD, MAX_REFLECTION_LOOPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowState {
    SymptomAnalysis,
    HistoricalMatch,
    KnowledgeRetrieval,
    Diagnosis,
    Refine,
    Respond,
}

impl WorkflowState {
    pub const INITIAL: Self = Self::SymptomAnalysis;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SymptomAnalysis => "SYMPTOM_ANALYSIS",
            Self::HistoricalMatch => "HISTORICAL_MATCH",
            Self::KnowledgeRetrieval => "KNOWLEDGE_RETRIEVAL",
            Self::Diagnosis => "DIAGNOSIS",
            Self::Refine => "REFINE",
            Self::Respond => "RESPOND",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Respond
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the confidence gate looks at after a diagnosis pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateInput {
    /// Calibrated confidence of the top candidate, if the pass produced one.
    pub top_confidence: Option<f64>,
    pub loop_count: u32,
    pub out_of_scope: bool,
    pub confidence_threshold: f64,
}

impl GateInput {
    pub fn new(top_confidence: Option<f64>, loop_count: u32, out_of_scope: bool) -> Self {
        Self {
            top_confidence,
            loop_count,
            out_of_scope,
            confidence_threshold: CONFIDENCE_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }
}

impl Default for GateInput {
    fn default() -> Self {
        Self::new(None, 0, false)
    }
}

/// Decide between responding and one more retrieval pass.
pub fn gate(input: &GateInput) -> WorkflowState {
    let confident = input
        .top_confidence
        .is_some_and(|c| c >= input.confidence_threshold);
    if confident || input.out_of_scope || input.loop_count >= MAX_REFLECTION_LOOPS {
        WorkflowState::Respond
    } else {
        WorkflowState::Refine
    }
}

/// Next state, or `None` once the workflow has responded.
pub fn transition(state: WorkflowState, input: &GateInput) -> Option<WorkflowState> {
    match state {
        WorkflowState::SymptomAnalysis => Some(WorkflowState::HistoricalMatch),
        WorkflowState::HistoricalMatch => Some(WorkflowState::KnowledgeRetrieval),
        WorkflowState::KnowledgeRetrieval => Some(WorkflowState::Diagnosis),
        WorkflowState::Diagnosis => Some(gate(input)),
        WorkflowState::Refine => Some(WorkflowState::KnowledgeRetrieval),
        WorkflowState::Respond => None,
    }
}
