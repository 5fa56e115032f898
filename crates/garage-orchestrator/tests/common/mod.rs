//! Scripted collaborators and golden-scenario loading for orchestrator tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use serde::Deserialize;

use garage_core::errors::{Stage, StageError, StageResult};
use garage_core::models::*;
use garage_core::traits::*;
use garage_core::DiagnosticConfig;
use garage_orchestrator::{Collaborators, DiagnosticOrchestrator, InMemoryPartsGraph};
use garage_taxonomy::TaxonomyRegistry;

// ── Collaborators ──────────────────────────────────────────────────────

pub struct FixedExtractor(pub SymptomExtraction);

impl ISymptomExtractor for FixedExtractor {
    fn extract(&self, _: &str) -> StageResult<SymptomExtraction> {
        Ok(self.0.clone())
    }
}

pub struct FailingExtractor;

impl ISymptomExtractor for FailingExtractor {
    fn extract(&self, _: &str) -> StageResult<SymptomExtraction> {
        Err(StageError::failed(Stage::SymptomExtraction, "model unavailable"))
    }
}

pub struct FixedMatcher(pub Vec<HistoricalMatch>);

impl IHistoricalMatcher for FixedMatcher {
    fn match_historical(&self, _: &str, k: usize) -> StageResult<Vec<HistoricalMatch>> {
        Ok(self.0.iter().take(k).cloned().collect())
    }
}

/// Returns the same items every call and records each query.
#[derive(Default)]
pub struct RecordingRetriever {
    pub items: Vec<EvidenceItem>,
    pub queries: Mutex<Vec<String>>,
}

impl RecordingRetriever {
    pub fn new(items: Vec<EvidenceItem>) -> Self {
        Self {
            items,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl IKnowledgeRetriever for RecordingRetriever {
    fn retrieve(&self, text: &str, k: usize) -> StageResult<Vec<EvidenceItem>> {
        self.queries.lock().unwrap().push(text.to_string());
        Ok(self.items.iter().take(k).cloned().collect())
    }
}

pub struct SlowRetriever(pub Duration);

impl IKnowledgeRetriever for SlowRetriever {
    fn retrieve(&self, _: &str, _: usize) -> StageResult<Vec<EvidenceItem>> {
        thread::sleep(self.0);
        Ok(Vec::new())
    }
}

/// Returns `passes[i]` on the i-th call, repeating the last one afterwards.
pub struct ScriptedProposer {
    passes: Vec<ProposalBatch>,
    pub bundles: Mutex<Vec<EvidenceBundle>>,
}

impl ScriptedProposer {
    pub fn new(passes: Vec<ProposalBatch>) -> Self {
        Self {
            passes,
            bundles: Mutex::new(Vec::new()),
        }
    }

    pub fn single(proposals: Vec<RawProposal>) -> Self {
        Self::new(vec![ProposalBatch::new(proposals)])
    }

    pub fn calls(&self) -> usize {
        self.bundles.lock().unwrap().len()
    }

    pub fn bundles(&self) -> Vec<EvidenceBundle> {
        self.bundles.lock().unwrap().clone()
    }
}

impl IDiagnosisProposer for ScriptedProposer {
    fn propose(&self, bundle: &EvidenceBundle) -> StageResult<ProposalBatch> {
        let mut bundles = self.bundles.lock().unwrap();
        let index = bundles.len().min(self.passes.len().saturating_sub(1));
        bundles.push(bundle.clone());
        Ok(self.passes.get(index).cloned().unwrap_or_default())
    }
}

pub struct PanickingProposer;

impl IDiagnosisProposer for PanickingProposer {
    fn propose(&self, _: &EvidenceBundle) -> StageResult<ProposalBatch> {
        panic!("proposer crashed")
    }
}

pub struct FailingProposer;

impl IDiagnosisProposer for FailingProposer {
    fn propose(&self, _: &EvidenceBundle) -> StageResult<ProposalBatch> {
        Err(StageError::failed(Stage::DiagnosisProposal, "inference backend down"))
    }
}

pub fn parts_graph() -> InMemoryPartsGraph {
    InMemoryPartsGraph::new()
        .with(
            "squealing",
            PartsDependency {
                mandatory: vec!["Brake Pads".into()],
                recommended: vec!["Rotors".into(), "Brake Hardware Kit".into()],
                labor_note: Some("Replace pads in axle pairs".into()),
            },
        )
        .with(
            "battery",
            PartsDependency {
                mandatory: vec!["Battery".into()],
                recommended: vec!["Terminal Cleaner".into()],
                labor_note: None,
            },
        )
}

/// Config with stages run inline so tests are deterministic.
pub fn inline_config() -> DiagnosticConfig {
    let mut config = DiagnosticConfig::default();
    config.orchestrator.stage_timeout_ms = 0;
    config
}

pub fn brake_proposal(confidence: f64) -> RawProposal {
    RawProposal::new("BRAKES", "PADS_ROTORS", "SQUEALING", confidence)
        .with_reasoning("Squeal while braking")
}

pub fn brake_history(score: f64) -> HistoricalMatch {
    HistoricalMatch {
        id: "T-1001".into(),
        complaint: "squeaky brakes".into(),
        system: "BRAKES".into(),
        component: "PADS_ROTORS".into(),
        failure_mode: "SQUEALING".into(),
        resolution: "Replaced pads".into(),
        score,
    }
}

pub fn keywords(words: &[&str]) -> SymptomExtraction {
    SymptomExtraction {
        keywords: words.iter().map(|w| w.to_string()).collect(),
        ..SymptomExtraction::default()
    }
}

pub struct Harness {
    pub orchestrator: DiagnosticOrchestrator,
    pub proposer: Arc<ScriptedProposer>,
    pub retriever: Arc<RecordingRetriever>,
}

pub fn harness(
    symptoms: SymptomExtraction,
    historical: Vec<HistoricalMatch>,
    knowledge: Vec<EvidenceItem>,
    passes: Vec<ProposalBatch>,
    config: DiagnosticConfig,
) -> Harness {
    let proposer = Arc::new(ScriptedProposer::new(passes));
    let retriever = Arc::new(RecordingRetriever::new(knowledge));
    let collaborators = Collaborators {
        symptoms: Arc::new(FixedExtractor(symptoms)),
        historical: Arc::new(FixedMatcher(historical)),
        knowledge: retriever.clone(),
        proposer: proposer.clone(),
        parts: Arc::new(parts_graph()),
    };
    Harness {
        orchestrator: DiagnosticOrchestrator::new(
            collaborators,
            Arc::new(TaxonomyRegistry::builtin()),
            config,
        ),
        proposer,
        retriever,
    }
}

// ── Golden scenarios ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub complaint: String,
    pub symptoms: SymptomExtraction,
    #[serde(default)]
    pub historical: Vec<HistoricalMatch>,
    #[serde(default)]
    pub knowledge: Vec<EvidenceItem>,
    pub passes: Vec<ProposalBatch>,
    pub expected: Expected,
}

#[derive(Debug, Deserialize)]
pub struct Expected {
    pub status: ClassificationStatus,
    #[serde(default)]
    pub path: Option<[String; 3]>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub vehicle_state: Option<VehicleState>,
    pub loop_count: u32,
    pub proposer_calls: usize,
    #[serde(default)]
    pub warning_codes: Vec<String>,
    #[serde(default)]
    pub follow_up_count: usize,
}

impl Scenario {
    pub fn load(relative_path: &str) -> Self {
        test_fixtures::load_fixture(relative_path)
    }

    pub fn harness(&self) -> Harness {
        harness(
            self.symptoms.clone(),
            self.historical.clone(),
            self.knowledge.clone(),
            self.passes.clone(),
            inline_config(),
        )
    }
}

/// Warning codes in order, taken from the `CODE: message` prefix.
pub fn warning_codes(warnings: &[String]) -> Vec<String> {
    warnings
        .iter()
        .map(|w| w.split(':').next().unwrap_or_default().to_string())
        .collect()
}
