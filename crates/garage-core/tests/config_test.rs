use garage_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = DiagnosticConfig::from_toml("").unwrap();

    // Calibration defaults
    assert_eq!(config.calibration.weights.primary, 0.35);
    assert_eq!(config.calibration.weights.historical, 0.25);
    assert_eq!(config.calibration.weights.keyword, 0.15);
    assert_eq!(config.calibration.weights.ontology, 0.15);
    assert_eq!(config.calibration.weights.clarity, 0.10);
    assert_eq!(config.calibration.historical_no_match, 0.3);
    assert_eq!(config.calibration.weak_history_penalty, 0.9);

    // Resolution defaults
    assert_eq!(config.resolution.confidence_threshold, 0.70);
    assert_eq!(config.resolution.ambiguity_delta, 0.10);
    assert_eq!(config.resolution.follow_up_limit, 3);

    // Orchestrator defaults
    assert_eq!(config.orchestrator.stage_timeout_ms, 30_000);
    assert_eq!(config.orchestrator.bundle_top_n, 3);

    // Cache / session / observability defaults
    assert_eq!(config.cache.max_entries, 1_000);
    assert_eq!(config.cache.ttl_secs, 3_600);
    assert_eq!(config.session.idle_timeout_secs, 1_800);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config = DiagnosticConfig::from_toml(
        r#"
        [orchestrator]
        stage_timeout_ms = 0

        [calibration.weights]
        primary = 0.5
        "#,
    )
    .unwrap();

    assert_eq!(config.orchestrator.stage_timeout_ms, 0);
    assert_eq!(config.orchestrator.historical_top_k, 5);
    assert_eq!(config.calibration.weights.primary, 0.5);
    assert_eq!(config.calibration.weights.historical, 0.25);
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = DiagnosticConfig::from_toml("[orchestrator\nstage_timeout_ms = ").unwrap_err();
    assert!(matches!(err, garage_core::DiagnosticError::ConfigError(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = DiagnosticConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().contains("configuration error"));
}

#[test]
fn oversized_limits_are_clamped_on_load() {
    let config = DiagnosticConfig::from_toml(
        r#"
        [cache]
        ttl_secs = 9223372036854775807

        [orchestrator]
        max_stage_workers = 0
        degradation_history = 0
        "#,
    )
    .unwrap();

    assert_eq!(config.cache.ttl_secs, defaults::MAX_CACHE_TTL_SECS);
    assert_eq!(config.orchestrator.max_stage_workers, 1);
    assert_eq!(config.orchestrator.degradation_history, 1);
}

#[test]
fn cache_ttl_accessor_clamps_hand_built_config() {
    let cache = CacheConfig {
        max_entries: 10,
        ttl_secs: u64::MAX,
    };
    assert_eq!(cache.ttl().as_secs(), defaults::MAX_CACHE_TTL_SECS);
    assert_eq!(CacheConfig::default().ttl().as_secs(), 3_600);
}
