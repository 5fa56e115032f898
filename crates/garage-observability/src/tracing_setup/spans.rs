//! Span definitions per workflow operation.

/// Span covering one `process_message` invocation.
#[macro_export]
macro_rules! workflow_span {
    ($session_id:expr) => {
        tracing::info_span!("garage.workflow", session_id = %$session_id)
    };
}

/// Span covering one state of the workflow.
#[macro_export]
macro_rules! stage_span {
    ($state:expr, $loop_count:expr) => {
        tracing::info_span!("garage.stage", state = %$state, loop_count = $loop_count)
    };
}

/// Span covering one knowledge re-ranking pass.
#[macro_export]
macro_rules! rerank_span {
    ($item_count:expr) => {
        tracing::debug_span!("garage.rerank", item_count = $item_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const WORKFLOW: &str = "garage.workflow";
    pub const STAGE: &str = "garage.stage";
    pub const RERANK: &str = "garage.rerank";
}
