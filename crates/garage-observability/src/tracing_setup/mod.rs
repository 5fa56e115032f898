//! Tracing setup: structured logging with span definitions and event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use garage_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "GARAGE_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `GARAGE_LOG` (then `RUST_LOG`) takes precedence over `config.log_level`.
/// Idempotent; if another subscriber is already installed this is a no-op.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_current_span(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };

        if installed.is_err() {
            tracing::debug!("global tracing subscriber already installed");
        }
    });
}
