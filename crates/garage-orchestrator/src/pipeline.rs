//! IntentPipeline: single-shot classification of one complaint into a service ticket.
//!
//! intake → normalize → cache → propose → validate → rank → resolve → triage.
//! Tickets are cached by the blake3 hash of the normalized text, so a
//! shorthand complaint and its spelled-out form share one ticket.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use moka::sync::Cache;
use serde::Serialize;
use tracing::{debug, info, warn};

use garage_core::errors::{ErrorCode, Stage};
use garage_core::models::{ClassificationOutcome, EvidenceBundle, OutcomePayload};
use garage_core::traits::IDiagnosisProposer;
use garage_core::DiagnosticConfig;
use garage_intake::{find_vehicle, InputNormalizer};
use garage_resolution::{rank_candidates, AmbiguityResolver};
use garage_taxonomy::{DiagnosisValidator, TaxonomyRegistry};
use garage_triage::{technical_summary, OUT_OF_SCOPE_SUMMARY, UNDETERMINED_SUMMARY};

use crate::decision::OutcomeRules;
use crate::stage_runner::StageRunner;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceTicket {
    pub ticket_id: String,
    pub outcome: ClassificationOutcome,
    pub technical_summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ServiceTicket {
    fn new(outcome: ClassificationOutcome, technical_summary: Option<String>) -> Self {
        let created_at = Utc::now();
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self {
            ticket_id: format!("TKT-{}-{}", created_at.format("%Y%m%d%H%M%S"), &suffix[..8]),
            outcome,
            technical_summary,
            created_at,
        }
    }

    pub fn payload(&self) -> OutcomePayload {
        self.outcome.to_payload()
    }
}

pub struct IntentPipeline {
    proposer: Arc<dyn IDiagnosisProposer>,
    rules: OutcomeRules,
    resolver: AmbiguityResolver,
    runner: StageRunner,
    normalizer: InputNormalizer,
    cache: Cache<String, ServiceTicket>,
    taxonomy_listing: String,
}

impl IntentPipeline {
    pub fn new(
        proposer: Arc<dyn IDiagnosisProposer>,
        registry: Arc<TaxonomyRegistry>,
        config: &DiagnosticConfig,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache.max_entries)
            .time_to_live(config.cache.ttl())
            .build();
        Self {
            proposer,
            taxonomy_listing: registry.describe(),
            rules: OutcomeRules::new(DiagnosisValidator::new(registry)),
            resolver: AmbiguityResolver::new(config.resolution.clone()),
            runner: StageRunner::from_config(&config.orchestrator),
            normalizer: InputNormalizer::new(),
            cache,
        }
    }

    /// Classify one complaint. Identical normalized text returns the cached ticket.
    pub fn classify(&self, text: &str) -> ServiceTicket {
        let intake = self.normalizer.normalize(text);
        let normalized = normalize(&intake.normalized);
        if normalized.is_empty() {
            warn!(code = %ErrorCode::EmptyInput, "empty complaint rejected");
            return ServiceTicket::new(
                ClassificationOutcome::validation_failed(format!(
                    "{}: complaint text is empty",
                    ErrorCode::EmptyInput
                )),
                None,
            );
        }

        let key = blake3::hash(normalized.as_bytes()).to_hex().to_string();
        if let Some(ticket) = self.cache.get(&key) {
            debug!(ticket_id = %ticket.ticket_id, "classification cache hit");
            return ticket;
        }

        let proposer = Arc::clone(&self.proposer);
        let mut bundle = EvidenceBundle::complaint_only(normalized, self.taxonomy_listing.clone());
        bundle.vehicle = find_vehicle(text);
        let batch = match self
            .runner
            .run(Stage::DiagnosisProposal, move || proposer.propose(&bundle))
        {
            Ok(batch) => batch,
            Err(e) => {
                let mut outcome = ClassificationOutcome::system_error(e.to_warning());
                outcome.extend_warnings(intake.warning());
                return ServiceTicket::new(outcome, None);
            }
        };

        let report = self.rules.validator().validate_batch(&batch.proposals);
        let mut warnings: Vec<String> = intake.warning().into_iter().collect();
        warnings.extend(report.warnings());
        let ranked = rank_candidates(report.accepted);
        let resolution = self.resolver.resolve(&ranked);
        let outcome = self
            .rules
            .decide(&ranked, &resolution, batch.out_of_scope, warnings);

        let summary = match ranked.first() {
            Some(top) => technical_summary(top.path()),
            None if batch.out_of_scope => OUT_OF_SCOPE_SUMMARY.to_string(),
            None => UNDETERMINED_SUMMARY.to_string(),
        };

        let ticket = ServiceTicket::new(outcome, Some(summary));
        info!(
            ticket_id = %ticket.ticket_id,
            status = %ticket.outcome.status(),
            candidates = ranked.len(),
            "complaint classified"
        );
        self.cache.insert(key, ticket.clone());
        ticket
    }

    /// Entries currently cached, after pending evictions are applied.
    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
    }
}

/// Trim, lower-case, and collapse internal whitespace.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
