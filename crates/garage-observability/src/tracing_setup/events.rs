//! Structured log events for key workflow transitions.

/// A collaborator stage failed and the workflow continued without its output.
pub fn stage_degraded(stage: &str, code: &str, reason: &str) {
    tracing::warn!(
        event = "stage_degraded",
        stage = %stage,
        code = %code,
        reason = %reason,
        "stage degraded"
    );
}

/// A proposal was dropped because its path is outside the taxonomy.
pub fn invalid_path_dropped(system: &str, component: &str, failure_mode: &str) {
    tracing::warn!(
        event = "invalid_path_dropped",
        code = "INVALID_ONTOLOGY_PATH",
        system = %system,
        component = %component,
        failure_mode = %failure_mode,
        "proposal dropped"
    );
}

/// The confidence gate sent the workflow back for another retrieval pass.
pub fn reflection_triggered(session_id: &str, top_confidence: f64, refined_query: &str) {
    tracing::info!(
        event = "reflection_triggered",
        session_id = %session_id,
        top_confidence = top_confidence,
        refined_query = %refined_query,
        "reflection triggered"
    );
}

/// A degradation was recorded for a component.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
