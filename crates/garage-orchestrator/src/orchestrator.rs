//! DiagnosticOrchestrator: runs one chat turn through the diagnostic workflow.
//!
//! intake → symptoms → historical → knowledge → diagnosis → gate → (refine → knowledge)? → respond
//!
//! The session mutex is held for the whole turn. Collaborator failures degrade
//! the turn with a warning; anything that escapes the workflow becomes a
//! `SYSTEM_ERROR` outcome.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use garage_calibration::{CalibratedConfidence, CalibrationSignals, ConfidenceCalibrator};
use garage_core::constants::{HISTORICAL_FALLBACK_CAP, REFINE_QUERY_SUFFIX};
use garage_core::errors::{DiagnosticError, DiagnosticResult, ErrorCode, Stage};
use garage_core::models::{
    ClassificationOutcome, ClassificationStatus, EvidenceBundle, EvidenceItem, PartsDependency,
    ProposalBatch,
};
use garage_core::traits::{
    IDiagnosisProposer, IHistoricalMatcher, IKnowledgeRetriever, IPartsGraph, ISymptomExtractor,
};
use garage_core::DiagnosticConfig;
use garage_intake::{find_vehicle, InputNormalizer};
use garage_observability::tracing_setup::events;
use garage_observability::{stage_span, workflow_span, DegradationTracker};
use garage_resolution::{rank_candidates, AmbiguityResolver, Resolution};
use garage_retrieval::KnowledgeHierarchy;
use garage_session::{lock_session, Role, SessionManager, SessionState, SessionStatus};
use garage_taxonomy::{DiagnosisCandidate, DiagnosisValidator, TaxonomyRegistry};

use crate::decision::{push_warning, OutcomeRules};
use crate::parts;
use crate::request::{ChatRequest, ChatResponse};
use crate::response::{self, CLARIFICATION_MESSAGE, ERROR_MESSAGE, OUT_OF_SCOPE_MESSAGE};
use crate::stage_runner::StageRunner;
use crate::state::{transition, GateInput, WorkflowState};

/// External collaborators the workflow consumes.
#[derive(Clone)]
pub struct Collaborators {
    pub symptoms: Arc<dyn ISymptomExtractor>,
    pub historical: Arc<dyn IHistoricalMatcher>,
    pub knowledge: Arc<dyn IKnowledgeRetriever>,
    pub proposer: Arc<dyn IDiagnosisProposer>,
    pub parts: Arc<dyn IPartsGraph>,
}

/// Result of one DIAGNOSIS state.
struct DiagnosisPass {
    ranked: Vec<DiagnosisCandidate>,
    resolution: Resolution,
    out_of_scope: bool,
    calibration: Option<CalibratedConfidence>,
}

impl DiagnosisPass {
    fn top_confidence(&self) -> Option<f64> {
        self.ranked.first().map(|c| c.confidence().value())
    }
}

struct TurnOutput {
    message: String,
    outcome: ClassificationOutcome,
    parts: Option<PartsDependency>,
    needs_input: bool,
}

pub struct DiagnosticOrchestrator {
    collaborators: Collaborators,
    rules: OutcomeRules,
    calibrator: ConfidenceCalibrator,
    hierarchy: KnowledgeHierarchy,
    resolver: AmbiguityResolver,
    sessions: SessionManager,
    runner: StageRunner,
    normalizer: InputNormalizer,
    config: DiagnosticConfig,
    taxonomy_listing: String,
}

impl DiagnosticOrchestrator {
    pub fn new(
        collaborators: Collaborators,
        registry: Arc<TaxonomyRegistry>,
        config: DiagnosticConfig,
    ) -> Self {
        let taxonomy_listing = registry.describe();
        Self {
            collaborators,
            rules: OutcomeRules::new(DiagnosisValidator::new(registry)),
            calibrator: ConfidenceCalibrator::new(config.calibration.clone()),
            hierarchy: KnowledgeHierarchy::new(),
            resolver: AmbiguityResolver::new(config.resolution.clone()),
            sessions: SessionManager::new(config.session.clone()),
            runner: StageRunner::from_config(&config.orchestrator),
            normalizer: InputNormalizer::new(),
            config,
            taxonomy_listing,
        }
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Snapshot of the stage degradations seen so far.
    pub fn degradation(&self) -> DegradationTracker {
        self.runner.degradation()
    }

    /// Process one customer message. Never panics and never returns an error:
    /// every failure is reported through the outcome.
    pub fn process_message(&self, request: ChatRequest) -> ChatResponse {
        let (session_id, handle) = self.sessions.get_or_create(request.session_id.as_deref());
        let span = workflow_span!(session_id);
        let _entered = span.enter();
        let mut session = lock_session(&handle);

        if request.message.trim().is_empty() {
            warn!(code = %ErrorCode::EmptyInput, "empty complaint rejected");
            let outcome = ClassificationOutcome::validation_failed(format!(
                "{}: complaint text is empty",
                ErrorCode::EmptyInput
            ));
            let mut response = ChatResponse::bare(
                session_id,
                CLARIFICATION_MESSAGE.to_string(),
                outcome,
                session.loop_count,
            );
            response.needs_input = true;
            response.is_complete = false;
            return response;
        }

        let run = panic::catch_unwind(AssertUnwindSafe(|| {
            self.run_turn(&mut session, &request.message)
        }));
        let failure = match run {
            Ok(Ok(response)) => return response,
            Ok(Err(e)) => e.to_string(),
            Err(_) => "workflow panicked".to_string(),
        };

        error!(code = %ErrorCode::WorkflowError, error = %failure, "workflow aborted");
        let mut warnings = session.warnings.clone();
        warnings.push(format!("{}: {failure}", ErrorCode::WorkflowError));
        session.push_message(
            Role::Assistant,
            ERROR_MESSAGE,
            self.config.session.max_messages,
        );
        session.status = SessionStatus::Complete;
        ChatResponse::bare(
            session_id,
            ERROR_MESSAGE.to_string(),
            ClassificationOutcome::SystemError { warnings },
            session.loop_count,
        )
    }

    /// Cloned snapshot of a session.
    pub fn get_session(&self, session_id: &str) -> Option<SessionState> {
        self.sessions.get_session(session_id)
    }

    pub fn clear_session(&self, session_id: &str) -> DiagnosticResult<()> {
        if self.sessions.clear_session(session_id) {
            debug!(session_id, "session cleared");
            Ok(())
        } else {
            Err(DiagnosticError::SessionNotFound {
                id: session_id.to_string(),
            })
        }
    }

    /// Drop sessions idle longer than the configured timeout. Returns how many were removed.
    pub fn cleanup_stale_sessions(&self) -> usize {
        // chrono::Duration::seconds panics past i64::MAX milliseconds.
        let max_secs = (i64::MAX / 1000) as u64;
        let secs = self.config.session.idle_timeout_secs.min(max_secs) as i64;
        garage_session::cleanup_stale_sessions(&self.sessions, chrono::Duration::seconds(secs))
    }

    fn run_turn(&self, session: &mut SessionState, text: &str) -> DiagnosticResult<ChatResponse> {
        if let Some(vehicle) = find_vehicle(text) {
            info!(vin = %vehicle.vin, tags = ?vehicle.filter_tags(), "vehicle identified");
            session.vehicle = Some(vehicle);
        }
        let intake = self.normalizer.normalize(text);
        session.begin_turn(&intake.normalized, self.config.session.max_messages);
        if let Some(warning) = intake.warning() {
            push_warning(&mut session.warnings, warning);
        }
        session.check_invariants()?;
        let audits_before = session.retrieval_audits.len();

        let mut state = WorkflowState::INITIAL;
        let mut pass: Option<DiagnosisPass> = None;
        let mut output: Option<TurnOutput> = None;

        loop {
            {
                let span = stage_span!(state, session.loop_count);
                let _entered = span.enter();
                match state {
                    WorkflowState::SymptomAnalysis => self.analyze_symptoms(session),
                    WorkflowState::HistoricalMatch => self.match_history(session),
                    WorkflowState::KnowledgeRetrieval => self.retrieve_knowledge(session),
                    WorkflowState::Diagnosis => pass = Some(self.diagnose(session)),
                    WorkflowState::Refine => self.refine(session)?,
                    WorkflowState::Respond => {
                        let current = pass.as_ref().ok_or_else(|| {
                            DiagnosticError::InvariantViolation {
                                details: "respond reached without a diagnosis pass".to_string(),
                            }
                        })?;
                        output = Some(self.respond(session, current));
                    }
                }
            }

            let gate = GateInput::new(
                pass.as_ref().and_then(DiagnosisPass::top_confidence),
                session.loop_count,
                pass.as_ref().is_some_and(|p| p.out_of_scope),
            )
            .with_threshold(self.config.resolution.confidence_threshold);

            match transition(state, &gate) {
                Some(next) => {
                    debug!(from = %state, to = %next, "workflow transition");
                    state = next;
                }
                None => break,
            }
        }

        let output = output.ok_or_else(|| DiagnosticError::InvariantViolation {
            details: "workflow finished without a response".to_string(),
        })?;
        session.check_invariants()?;

        info!(
            status = %output.outcome.status(),
            loop_count = session.loop_count,
            passes = session.diagnosis_passes,
            warnings = session.warnings.len(),
            "turn complete"
        );

        Ok(ChatResponse {
            session_id: session.session_id.clone(),
            message: output.message,
            outcome: output.outcome,
            diagnosis: session.final_diagnosis.clone(),
            calibration: pass.and_then(|p| p.calibration),
            similar_cases: session
                .historical
                .iter()
                .take(self.config.orchestrator.similar_cases_shown)
                .cloned()
                .collect(),
            parts: output.parts,
            retrieval_audit: session
                .retrieval_audits
                .get(audits_before..)
                .and_then(|audits| audits.last())
                .cloned(),
            loop_count: session.loop_count,
            needs_input: output.needs_input,
            is_complete: !output.needs_input,
        })
    }

    // ── Stages ──────────────────────────────────────────────────────────

    fn analyze_symptoms(&self, session: &mut SessionState) {
        let extractor = Arc::clone(&self.collaborators.symptoms);
        let text = session.working_input.clone();
        match self
            .runner
            .run(Stage::SymptomExtraction, move || extractor.extract(&text))
        {
            Ok(symptoms) => {
                debug!(keywords = symptoms.keywords.len(), "symptoms extracted");
                session.symptoms = Some(symptoms);
            }
            Err(e) => push_warning(&mut session.warnings, e.to_warning()),
        }
    }

    fn match_history(&self, session: &mut SessionState) {
        let matcher = Arc::clone(&self.collaborators.historical);
        let text = session.working_input.clone();
        let k = self.config.orchestrator.historical_top_k;
        match self
            .runner
            .run(Stage::HistoricalMatch, move || matcher.match_historical(&text, k))
        {
            Ok(matches) => {
                debug!(matches = matches.len(), "historical matches found");
                session.historical = matches;
            }
            Err(e) => push_warning(&mut session.warnings, e.to_warning()),
        }
    }

    /// New items are merged with the accumulated evidence and re-ranked together.
    fn retrieve_knowledge(&self, session: &mut SessionState) {
        let retriever = Arc::clone(&self.collaborators.knowledge);
        let text = session.working_input.clone();
        let k = self.config.orchestrator.knowledge_top_k;
        match self
            .runner
            .run(Stage::KnowledgeRetrieval, move || retriever.retrieve(&text, k))
        {
            Ok(items) => {
                let mut pool: Vec<EvidenceItem> =
                    session.knowledge.drain(..).map(|r| r.item).collect();
                pool.extend(items);
                let reranked = self.hierarchy.rerank(pool);
                session.knowledge = reranked.items;
                session.retrieval_audits.push(reranked.audit);
            }
            Err(e) => push_warning(&mut session.warnings, e.to_warning()),
        }
    }

    fn diagnose(&self, session: &mut SessionState) -> DiagnosisPass {
        let bundle = self.build_bundle(session);
        let proposer = Arc::clone(&self.collaborators.proposer);
        let batch = match self
            .runner
            .run(Stage::DiagnosisProposal, move || proposer.propose(&bundle))
        {
            Ok(batch) => batch,
            Err(e) => {
                push_warning(&mut session.warnings, e.to_warning());
                ProposalBatch::default()
            }
        };

        let report = self.rules.validator().validate_batch(&batch.proposals);
        for warning in report.warnings() {
            push_warning(&mut session.warnings, warning);
        }

        let mut scored: Vec<(DiagnosisCandidate, CalibratedConfidence)> = report
            .accepted
            .into_iter()
            .map(|candidate| self.calibrate(session, candidate))
            .collect();

        if scored.is_empty() && !batch.out_of_scope {
            push_warning(
                &mut session.warnings,
                DiagnosticError::ProposalEmpty.to_warning(),
            );
            if let Some(fallback) = self.historical_fallback(session) {
                info!(
                    reference = ?fallback.evidence_refs(),
                    path = %fallback.path(),
                    "using historical match as fallback diagnosis"
                );
                scored.push(self.calibrate(session, fallback));
            }
        }

        let ranked = rank_candidates(scored.iter().map(|(c, _)| c.clone()).collect());
        let calibration = ranked.first().and_then(|top| {
            scored
                .iter()
                .find(|(c, cal)| c.path() == top.path() && cal.value == top.confidence())
                .map(|(_, cal)| *cal)
        });
        let resolution = self.resolver.resolve(&ranked);
        let pass_number = session.record_pass(&ranked);
        session.final_diagnosis = ranked.first().cloned();

        info!(
            pass = pass_number,
            candidates = ranked.len(),
            top_confidence = ranked.first().map_or(0.0, |c| c.confidence().value()),
            confirmed = resolution.is_confirmed(),
            out_of_scope = batch.out_of_scope,
            "diagnosis pass complete"
        );

        DiagnosisPass {
            ranked,
            resolution,
            out_of_scope: batch.out_of_scope,
            calibration,
        }
    }

    fn refine(&self, session: &mut SessionState) -> DiagnosticResult<()> {
        let top = session.latest_top_candidate();
        let top_confidence = top.map_or(0.0, |c| c.confidence().value());
        let refined_query = top.map(|c| {
            format!(
                "{} {} {} {}",
                c.system(),
                c.component(),
                c.failure_mode(),
                REFINE_QUERY_SUFFIX
            )
        });

        session.increment_loop()?;
        if let Some(query) = refined_query {
            session.working_input = query;
        }
        events::reflection_triggered(&session.session_id, top_confidence, &session.working_input);
        Ok(())
    }

    fn respond(&self, session: &mut SessionState, pass: &DiagnosisPass) -> TurnOutput {
        let diagnosis = session.final_diagnosis.clone();
        let parts = diagnosis
            .as_ref()
            .and_then(|d| self.lookup_parts(session, d));

        let message = match &diagnosis {
            Some(d) => response::diagnosis_message(d, parts.as_ref(), session.historical.len()),
            None if pass.out_of_scope => OUT_OF_SCOPE_MESSAGE.to_string(),
            None => CLARIFICATION_MESSAGE.to_string(),
        };

        let outcome = self.rules.decide(
            &pass.ranked,
            &pass.resolution,
            pass.out_of_scope,
            session.warnings.clone(),
        );
        let needs_input =
            diagnosis.is_none() || outcome.status() == ClassificationStatus::Ambiguous;

        session.push_message(Role::Assistant, &message, self.config.session.max_messages);
        session.status = if needs_input {
            SessionStatus::AwaitingInput
        } else {
            SessionStatus::Complete
        };

        TurnOutput {
            message,
            outcome,
            parts,
            needs_input,
        }
    }

    // ── Helpers ─────────────────────────────────────────────────────────

    fn build_bundle(&self, session: &SessionState) -> EvidenceBundle {
        let top_n = self.config.orchestrator.bundle_top_n;
        EvidenceBundle {
            working_input: session.working_input.clone(),
            complaint: session.complaint.clone(),
            symptoms: session.symptoms.clone().unwrap_or_default(),
            historical: session.historical.iter().take(top_n).cloned().collect(),
            knowledge: session
                .knowledge
                .iter()
                .take(top_n)
                .map(|r| r.item.clone())
                .collect(),
            taxonomy_listing: self.taxonomy_listing.clone(),
            vehicle: session.vehicle.clone(),
        }
    }

    fn calibrate(
        &self,
        session: &SessionState,
        candidate: DiagnosisCandidate,
    ) -> (DiagnosisCandidate, CalibratedConfidence) {
        let keywords = session
            .symptoms
            .as_ref()
            .map_or(&[][..], |s| s.keywords.as_slice());
        let signals = CalibrationSignals {
            primary: candidate.confidence().value(),
            historical_scores: session.historical.iter().map(|m| m.score).collect(),
            keywords_matched: keyword_matches(keywords, &candidate),
            keywords_total: keywords.len(),
            input_chars: session.complaint.chars().count(),
        };
        let calibrated = self.calibrator.calibrate(&signals);
        (candidate.with_confidence(calibrated.value), calibrated)
    }

    /// Strongest historical match whose path is valid. Ties keep match order.
    fn historical_fallback(&self, session: &SessionState) -> Option<DiagnosisCandidate> {
        session
            .historical
            .iter()
            .filter_map(|m| {
                self.rules
                    .validator()
                    .validate_historical(m, HISTORICAL_FALLBACK_CAP)
                    .ok()
                    .map(|candidate| (m.score, candidate))
            })
            .fold(None, |best: Option<(f64, DiagnosisCandidate)>, (score, candidate)| {
                match best {
                    Some((best_score, _)) if best_score >= score => best,
                    _ => Some((score, candidate)),
                }
            })
            .map(|(_, candidate)| candidate)
    }

    fn lookup_parts(
        &self,
        session: &mut SessionState,
        diagnosis: &DiagnosisCandidate,
    ) -> Option<PartsDependency> {
        let graph = Arc::clone(&self.collaborators.parts);
        let failure_mode = diagnosis.failure_mode().to_string();
        let component = diagnosis.component().to_string();
        match self.runner.run(Stage::PartsLookup, move || {
            Ok(parts::lookup_parts(graph.as_ref(), &failure_mode, &component))
        }) {
            Ok(found) => found,
            Err(e) => {
                push_warning(&mut session.warnings, e.to_warning());
                None
            }
        }
    }
}

/// Keywords found in the candidate's path tokens or its reasoning.
fn keyword_matches(keywords: &[String], candidate: &DiagnosisCandidate) -> usize {
    let tokens = candidate.path().tokens();
    let reasoning = candidate.reasoning().to_lowercase();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .filter(|k| {
            reasoning.contains(k.as_str())
                || tokens
                    .iter()
                    .any(|t| t.contains(k.as_str()) || (t.len() >= 3 && k.contains(t.as_str())))
        })
        .count()
}
