//! # garage-session
//!
//! Per-conversation diagnostic state.
//!
//! ## Modules
//!
//! - `state`: `SessionState`: messages, accumulated evidence, candidate history, loop counter
//! - `manager`: `SessionManager` with `DashMap` and a mutex per session
//! - `cleanup`: stale session removal

pub mod cleanup;
pub mod manager;
pub mod state;

pub use cleanup::cleanup_stale_sessions;
pub use manager::{lock_session, SessionHandle, SessionManager};
pub use state::{CandidateRecord, ConfidencePoint, Message, Role, SessionState, SessionStatus};
