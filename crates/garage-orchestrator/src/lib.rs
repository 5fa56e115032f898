//! # garage-orchestrator
//!
//! The diagnostic workflow: an explicit state machine over injected
//! collaborators, with a single bounded reflection retry.
//!
//! ## Modules
//!
//! - `state`: workflow states, confidence gate, pure transition function
//! - `stage_runner`: collaborator calls with panic capture, deadlines, degradation tracking
//! - `orchestrator`: `DiagnosticOrchestrator`: multi-turn chat sessions
//! - `pipeline`: `IntentPipeline`: single-shot classification with a bounded cache
//! - `parts`: parts recommendation lookup and an in-memory parts graph

mod decision;
pub mod orchestrator;
pub mod parts;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod stage_runner;
pub mod state;

pub use orchestrator::{Collaborators, DiagnosticOrchestrator};
pub use parts::{lookup_parts, InMemoryPartsGraph};
pub use pipeline::{IntentPipeline, ServiceTicket};
pub use request::{ChatRequest, ChatResponse};
pub use stage_runner::StageRunner;
pub use state::{gate, transition, GateInput, WorkflowState};
