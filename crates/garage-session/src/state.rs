//! SessionState: everything one conversation has gathered so far.

use chrono::{DateTime, Utc};
use serde::Serialize;

use garage_core::constants::MAX_REFLECTION_LOOPS;
use garage_core::errors::{DiagnosticError, DiagnosticResult};
use garage_core::models::{HistoricalMatch, RetrievalAudit, SymptomExtraction, VehicleInfo};
use garage_retrieval::RankedEvidence;
use garage_taxonomy::DiagnosisCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// A workflow invocation is in progress or none has run yet.
    Active,
    /// The last turn asked the customer for more detail.
    AwaitingInput,
    /// The last turn produced a decisive outcome.
    Complete,
}

/// A candidate as it stood after a given diagnosis pass.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateRecord {
    /// 1-based diagnosis pass within the session.
    pub pass: u32,
    /// 1-based rank within that pass.
    pub rank: usize,
    pub candidate: DiagnosisCandidate,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfidencePoint {
    pub pass: u32,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub messages: Vec<Message>,

    /// Complaint text of the current turn, after intake normalization.
    pub complaint: String,
    /// Query used for retrieval; replaced by the refined query on reflection.
    pub working_input: String,
    /// Last vehicle the customer identified. Kept across turns.
    pub vehicle: Option<VehicleInfo>,

    pub symptoms: Option<SymptomExtraction>,
    pub historical: Vec<HistoricalMatch>,
    pub knowledge: Vec<RankedEvidence>,
    pub retrieval_audits: Vec<RetrievalAudit>,

    /// Append-only.
    pub candidate_history: Vec<CandidateRecord>,
    pub confidence_history: Vec<ConfidencePoint>,
    pub diagnosis_passes: u32,

    /// Reflection cycles used. Never decreases and never exceeds the cap.
    pub loop_count: u32,
    pub final_diagnosis: Option<DiagnosisCandidate>,
    pub status: SessionStatus,
    /// Warnings raised during the current turn.
    pub warnings: Vec<String>,
}

impl SessionState {
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            created_at: now,
            last_activity: now,
            messages: Vec::new(),
            complaint: String::new(),
            working_input: String::new(),
            vehicle: None,
            symptoms: None,
            historical: Vec::new(),
            knowledge: Vec::new(),
            retrieval_audits: Vec::new(),
            candidate_history: Vec::new(),
            confidence_history: Vec::new(),
            diagnosis_passes: 0,
            loop_count: 0,
            final_diagnosis: None,
            status: SessionStatus::Active,
            warnings: Vec::new(),
        }
    }

    /// Reset turn-scoped fields for a new customer message. Evidence and
    /// history from earlier turns are kept.
    pub fn begin_turn(&mut self, text: &str, max_messages: usize) {
        self.complaint = text.to_string();
        self.working_input = text.to_string();
        self.warnings.clear();
        self.final_diagnosis = None;
        self.status = SessionStatus::Active;
        self.push_message(Role::User, text, max_messages);
    }

    /// Append a message, dropping the oldest beyond `max_messages`.
    pub fn push_message(&mut self, role: Role, content: &str, max_messages: usize) {
        self.messages.push(Message {
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        });
        if self.messages.len() > max_messages {
            let excess = self.messages.len() - max_messages;
            self.messages.drain(..excess);
        }
        self.touch();
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Record a ranked pass and return its 1-based pass number.
    pub fn record_pass(&mut self, ranked: &[DiagnosisCandidate]) -> u32 {
        self.diagnosis_passes += 1;
        let pass = self.diagnosis_passes;
        self.candidate_history
            .extend(ranked.iter().enumerate().map(|(i, c)| CandidateRecord {
                pass,
                rank: i + 1,
                candidate: c.clone(),
            }));
        self.confidence_history.push(ConfidencePoint {
            pass,
            confidence: ranked.first().map_or(0.0, |c| c.confidence().value()),
        });
        pass
    }

    /// Top candidate of the most recent pass, if that pass had any.
    pub fn latest_top_candidate(&self) -> Option<&DiagnosisCandidate> {
        let pass = self.diagnosis_passes;
        self.candidate_history
            .iter()
            .find(|r| r.pass == pass && r.rank == 1)
            .map(|r| &r.candidate)
    }

    /// Consume one reflection cycle. Fails if the cap is already reached.
    pub fn increment_loop(&mut self) -> DiagnosticResult<u32> {
        if self.loop_count >= MAX_REFLECTION_LOOPS {
            return Err(DiagnosticError::InvariantViolation {
                details: format!(
                    "loop_count {} already at maximum {}",
                    self.loop_count, MAX_REFLECTION_LOOPS
                ),
            });
        }
        self.loop_count += 1;
        Ok(self.loop_count)
    }

    /// Fails when the session was found above the reflection cap.
    pub fn check_invariants(&self) -> DiagnosticResult<()> {
        if self.loop_count > MAX_REFLECTION_LOOPS {
            return Err(DiagnosticError::InvariantViolation {
                details: format!(
                    "session {} has loop_count {} above maximum {}",
                    self.session_id, self.loop_count, MAX_REFLECTION_LOOPS
                ),
            });
        }
        Ok(())
    }

    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }
}
