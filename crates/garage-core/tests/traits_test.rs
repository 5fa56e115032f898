/// Verify every collaborator trait is implementable and object-safe.
use std::sync::Arc;

use garage_core::errors::{Stage, StageError, StageResult};
use garage_core::models::*;
use garage_core::traits::*;

// --- Mock implementations for all collaborator traits ---

struct MockExtractor;
impl ISymptomExtractor for MockExtractor {
    fn extract(&self, text: &str) -> StageResult<SymptomExtraction> {
        Ok(SymptomExtraction {
            keywords: text.split_whitespace().map(str::to_string).collect(),
            ..SymptomExtraction::default()
        })
    }
}

struct MockMatcher;
impl IHistoricalMatcher for MockMatcher {
    fn match_historical(&self, _: &str, _: usize) -> StageResult<Vec<HistoricalMatch>> {
        Ok(vec![])
    }
}

struct FailingRetriever;
impl IKnowledgeRetriever for FailingRetriever {
    fn retrieve(&self, _: &str, _: usize) -> StageResult<Vec<EvidenceItem>> {
        Err(StageError::failed(Stage::KnowledgeRetrieval, "index offline"))
    }
}

struct MockProposer;
impl IDiagnosisProposer for MockProposer {
    fn propose(&self, bundle: &EvidenceBundle) -> StageResult<ProposalBatch> {
        if bundle.complaint.is_empty() {
            return Ok(ProposalBatch::out_of_scope());
        }
        Ok(ProposalBatch::new(vec![RawProposal::new(
            "BRAKES",
            "PADS_ROTORS",
            "SQUEALING",
            0.9,
        )]))
    }
}

struct MockParts;
impl IPartsGraph for MockParts {
    fn keys(&self) -> Vec<String> {
        vec!["squealing".into()]
    }
    fn lookup(&self, key: &str) -> Option<PartsDependency> {
        (key == "squealing").then(|| PartsDependency {
            mandatory: vec!["brake pads".into()],
            ..PartsDependency::default()
        })
    }
}

// ── Object safety ──

#[test]
fn all_traits_are_object_safe_and_shareable() {
    let extractor: Arc<dyn ISymptomExtractor> = Arc::new(MockExtractor);
    let matcher: Arc<dyn IHistoricalMatcher> = Arc::new(MockMatcher);
    let retriever: Arc<dyn IKnowledgeRetriever> = Arc::new(FailingRetriever);
    let proposer: Arc<dyn IDiagnosisProposer> = Arc::new(MockProposer);
    let parts: Arc<dyn IPartsGraph> = Arc::new(MockParts);

    assert_eq!(extractor.extract("brake noise").unwrap().keywords.len(), 2);
    assert!(matcher.match_historical("x", 5).unwrap().is_empty());
    assert!(retriever.retrieve("x", 5).is_err());
    assert_eq!(parts.keys(), vec!["squealing".to_string()]);
    assert!(parts.lookup("missing").is_none());

    let bundle = EvidenceBundle::complaint_only("brakes squeal", "SYSTEM: BRAKES");
    let batch = proposer.propose(&bundle).unwrap();
    assert_eq!(batch.proposals.len(), 1);
    assert!(!batch.out_of_scope);
}

#[test]
fn complaint_only_bundle_mirrors_complaint_into_working_input() {
    let bundle = EvidenceBundle::complaint_only("engine knocks", "listing");
    assert_eq!(bundle.working_input, "engine knocks");
    assert_eq!(bundle.complaint, "engine knocks");
    assert!(bundle.historical.is_empty());
    assert!(bundle.knowledge.is_empty());
    assert!(bundle.symptoms.is_empty());
}

#[test]
fn retriever_failure_maps_to_retrieval_code() {
    let err = FailingRetriever.retrieve("x", 1).unwrap_err();
    assert_eq!(err.stage(), Stage::KnowledgeRetrieval);
    assert_eq!(err.code().as_str(), "RETRIEVAL_FAILED");
}
