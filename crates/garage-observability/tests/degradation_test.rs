use chrono::{Duration, Utc};
use garage_core::config::ObservabilityConfig;
use garage_core::models::DegradationEvent;
use garage_observability::{init_tracing, DegradationTracker, RecoveryStatus};

fn event(component: &str) -> DegradationEvent {
    DegradationEvent {
        component: component.into(),
        failure: "timed out after 50ms".into(),
        fallback_used: "no knowledge".into(),
        timestamp: Utc::now(),
    }
}

#[test]
fn recovery_closes_every_open_failure_of_a_stage() {
    let mut tracker = DegradationTracker::new();
    tracker.record(event("knowledge_retrieval"));
    tracker.record(event("knowledge_retrieval"));
    tracker.record(event("historical_match"));
    assert!(tracker.is_degraded("knowledge_retrieval"));

    assert!(tracker.mark_recovered("knowledge_retrieval"));
    assert!(!tracker.is_degraded("knowledge_retrieval"));
    assert_eq!(tracker.events()[0].recovery_status, RecoveryStatus::Recovered);
    assert!(tracker.events()[1].recovered_at.is_some());
    assert_eq!(tracker.active().count(), 1);
    assert!(!tracker.mark_recovered("knowledge_retrieval"));
}

#[test]
fn recovering_healthy_component_is_noop() {
    let mut tracker = DegradationTracker::new();
    assert!(!tracker.mark_recovered("symptom_extraction"));
    assert!(tracker.events().is_empty());
}

#[test]
fn recent_counts_respect_window() {
    let mut tracker = DegradationTracker::new();
    tracker.record(event("historical_match"));
    let mut old = event("historical_match");
    old.timestamp = Utc::now() - Duration::seconds(3_600);
    tracker.record(old);
    tracker.record(event("diagnosis_proposal"));

    assert_eq!(tracker.count_recent("historical_match", 60), 1);
    assert_eq!(tracker.count_all_recent(60), 2);
    assert_eq!(tracker.count_all_recent(i64::MAX), 3);
}

#[test]
fn stage_health_rolls_up_by_stage() {
    let mut tracker = DegradationTracker::new();
    tracker.record(event("symptom_extraction"));
    tracker.record(event("diagnosis_proposal"));
    tracker.record(event("diagnosis_proposal"));
    tracker.mark_recovered("symptom_extraction");

    let health = tracker.stage_health();
    assert_eq!(health.len(), 2);
    assert_eq!(health[0].component, "diagnosis_proposal");
    assert_eq!(health[0].failures, 2);
    assert!(health[0].degraded);
    assert_eq!(health[1].component, "symptom_extraction");
    assert!(!health[1].degraded);
    assert!(health[1].last_failure.is_some());
}

#[test]
fn init_tracing_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    init_tracing(&config);
    let _span = garage_observability::workflow_span!("session-1").entered();
    tracing::info!("still alive");
}

#[test]
fn ledger_evicts_oldest_past_capacity() {
    let mut tracker = DegradationTracker::with_capacity(3);
    tracker.record(event("symptom_extraction"));
    for _ in 0..49 {
        tracker.record(event("knowledge_retrieval"));
    }

    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.capacity(), 3);
    assert!(!tracker.is_degraded("symptom_extraction"));
    assert!(tracker
        .events()
        .iter()
        .all(|t| t.event.component == "knowledge_retrieval"));
    assert_eq!(DegradationTracker::with_capacity(0).capacity(), 1);
}
