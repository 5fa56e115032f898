//! Ledger of collaborator stages that failed and what the workflow fell back to.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Duration, Utc};
use garage_core::config::defaults::DEFAULT_DEGRADATION_HISTORY;
use garage_core::models::DegradationEvent;
use serde::{Deserialize, Serialize};

use crate::tracing_setup::events;

/// Whether a recorded degradation is still in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// The stage has not succeeded since this failure.
    Active,
    /// A later call to the same stage succeeded.
    Recovered,
}

/// A degradation event plus its recovery state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

impl TrackedDegradation {
    fn is_active_for(&self, component: &str) -> bool {
        self.recovery_status == RecoveryStatus::Active && self.event.component == component
    }
}

/// Per-stage rollup of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageHealth {
    pub component: String,
    pub failures: usize,
    pub degraded: bool,
    pub last_failure: Option<DateTime<Utc>>,
}

/// Bounded in-memory ledger of degraded stages. Once `capacity` events are
/// held, recording a new one evicts the oldest.
#[derive(Debug, Clone)]
pub struct DegradationTracker {
    events: VecDeque<TrackedDegradation>,
    capacity: usize,
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_DEGRADATION_HISTORY)
    }
}

impl DegradationTracker {
    /// Tracker holding the default number of events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker holding at most `capacity` events (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Maximum number of events retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Log and store a new degradation, evicting the oldest past capacity.
    pub fn record(&mut self, event: DegradationEvent) {
        events::degradation_triggered(&event.component, &event.failure, &event.fallback_used);
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
    }

    /// Close every open degradation of `component`. Returns whether any was open.
    pub fn mark_recovered(&mut self, component: &str) -> bool {
        let now = Utc::now();
        let mut changed = false;
        for tracked in self.events.iter_mut().filter(|t| t.is_active_for(component)) {
            tracked.recovery_status = RecoveryStatus::Recovered;
            tracked.recovered_at = Some(now);
            changed = true;
        }
        changed
    }

    /// Retained events, oldest first.
    pub fn events(&self) -> Vec<&TrackedDegradation> {
        self.events.iter().collect()
    }

    /// Number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events not yet followed by a success of the same stage.
    pub fn active(&self) -> impl Iterator<Item = &TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
    }

    /// Whether `component` has an open degradation.
    pub fn is_degraded(&self, component: &str) -> bool {
        self.events.iter().any(|t| t.is_active_for(component))
    }

    /// Failures of `component` newer than `window_secs` seconds.
    pub fn count_recent(&self, component: &str, window_secs: i64) -> usize {
        self.recent(window_secs)
            .filter(|t| t.event.component == component)
            .count()
    }

    /// Failures of any stage newer than `window_secs` seconds.
    pub fn count_all_recent(&self, window_secs: i64) -> usize {
        self.recent(window_secs).count()
    }

    /// One entry per stage with a retained failure, ordered by stage name.
    pub fn stage_health(&self) -> Vec<StageHealth> {
        let mut by_stage: BTreeMap<&str, StageHealth> = BTreeMap::new();
        for tracked in &self.events {
            let entry = by_stage
                .entry(tracked.event.component.as_str())
                .or_insert_with(|| StageHealth {
                    component: tracked.event.component.clone(),
                    failures: 0,
                    degraded: false,
                    last_failure: None,
                });
            entry.failures += 1;
            entry.degraded |= tracked.recovery_status == RecoveryStatus::Active;
            entry.last_failure = entry.last_failure.max(Some(tracked.event.timestamp));
        }
        by_stage.into_values().collect()
    }

    fn recent(&self, window_secs: i64) -> impl Iterator<Item = &TrackedDegradation> {
        // None when the window reaches past the representable range: everything counts.
        let cutoff = Duration::try_seconds(window_secs.max(0))
            .and_then(|window| Utc::now().checked_sub_signed(window));
        self.events
            .iter()
            .filter(move |t| cutoff.map_or(true, |c| t.event.timestamp > c))
    }
}
