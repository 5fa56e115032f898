//! StageRunner: calls one external collaborator and turns every failure,
//! panic, or deadline overrun into a [`StageError`].
//!
//! Deadline calls run on worker threads. A worker that overruns is left to
//! finish on its own but keeps its slot until it does, so a hung collaborator
//! can hold at most `max_stage_workers` threads.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};

use garage_core::config::defaults::{DEFAULT_DEGRADATION_HISTORY, DEFAULT_MAX_STAGE_WORKERS};
use garage_core::config::OrchestratorConfig;
use garage_core::errors::{Stage, StageError, StageResult};
use garage_core::models::DegradationEvent;
use garage_observability::tracing_setup::events;
use garage_observability::DegradationTracker;

pub struct StageRunner {
    /// `None` runs calls inline on the caller's thread.
    deadline: Option<Duration>,
    workers: Arc<WorkerSlots>,
    tracker: Mutex<DegradationTracker>,
}

impl StageRunner {
    /// `timeout_ms == 0` disables the deadline. Worker and history limits use defaults.
    pub fn new(timeout_ms: u64) -> Self {
        Self::with_limits(timeout_ms, DEFAULT_MAX_STAGE_WORKERS, DEFAULT_DEGRADATION_HISTORY)
    }

    pub fn from_config(config: &OrchestratorConfig) -> Self {
        Self::with_limits(
            config.stage_timeout_ms,
            config.max_stage_workers,
            config.degradation_history,
        )
    }

    pub fn with_limits(timeout_ms: u64, max_workers: usize, history: usize) -> Self {
        Self {
            deadline: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
            workers: Arc::new(WorkerSlots::new(max_workers)),
            tracker: Mutex::new(DegradationTracker::with_capacity(history)),
        }
    }

    /// Run `call` for `stage`. Failures are logged and recorded as degradations;
    /// a success marks the stage recovered.
    pub fn run<T, F>(&self, stage: Stage, call: F) -> StageResult<T>
    where
        T: Send + 'static,
        F: FnOnce() -> StageResult<T> + Send + 'static,
    {
        let result = match self.deadline {
            None => run_inline(stage, call),
            Some(deadline) => self.run_with_deadline(stage, deadline, call),
        };

        match &result {
            Ok(_) => {
                if self.tracker().mark_recovered(stage.as_str()) {
                    debug!(stage = %stage, "stage recovered");
                }
            }
            Err(e) => {
                events::stage_degraded(stage.as_str(), e.code().as_str(), &e.to_string());
                self.tracker().record(DegradationEvent {
                    component: stage.as_str().to_string(),
                    failure: e.to_string(),
                    fallback_used: fallback_for(stage).to_string(),
                    timestamp: Utc::now(),
                });
            }
        }
        result
    }

    /// Snapshot of the retained degradations.
    pub fn degradation(&self) -> DegradationTracker {
        self.tracker().clone()
    }

    /// Deadline workers currently running, including overrun ones.
    pub fn in_flight(&self) -> usize {
        self.workers.in_flight()
    }

    fn tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// On overrun the worker is left running and its late result is discarded.
    fn run_with_deadline<T, F>(&self, stage: Stage, deadline: Duration, call: F) -> StageResult<T>
    where
        T: Send + 'static,
        F: FnOnce() -> StageResult<T> + Send + 'static,
    {
        let Some(slot) = self.workers.try_acquire() else {
            warn!(stage = %stage, limit = self.workers.limit, "stage workers exhausted");
            return Err(StageError::failed(
                stage,
                format!("all {} stage workers busy", self.workers.limit),
            ));
        };

        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name(format!("garage-{stage}"))
            .spawn(move || {
                let outcome = panic::catch_unwind(AssertUnwindSafe(call));
                // Free the slot before the caller can observe the result.
                drop(slot);
                let _ = tx.send(outcome);
            });
        if let Err(e) = spawned {
            return Err(StageError::failed(stage, format!("worker spawn failed: {e}")));
        }

        match rx.recv_timeout(deadline) {
            Ok(Ok(result)) => result,
            Ok(Err(_)) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                Err(StageError::Panicked { stage })
            }
            Err(mpsc::RecvTimeoutError::Timeout) => Err(StageError::Timeout {
                stage,
                after_ms: u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }
}

/// Counting limit on live deadline workers.
struct WorkerSlots {
    in_flight: AtomicUsize,
    limit: usize,
}

impl WorkerSlots {
    fn new(limit: usize) -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
            limit: limit.max(1),
        }
    }

    fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    fn try_acquire(self: &Arc<Self>) -> Option<WorkerSlot> {
        self.in_flight
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < self.limit).then_some(n + 1)
            })
            .ok()
            .map(|_| WorkerSlot(Arc::clone(self)))
    }
}

/// Held by a worker thread; frees its slot when the thread's call returns.
struct WorkerSlot(Arc<WorkerSlots>);

impl Drop for WorkerSlot {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}

fn run_inline<T, F>(stage: Stage, call: F) -> StageResult<T>
where
    F: FnOnce() -> StageResult<T>,
{
    panic::catch_unwind(AssertUnwindSafe(call)).unwrap_or(Err(StageError::Panicked { stage }))
}

fn fallback_for(stage: Stage) -> &'static str {
    match stage {
        Stage::SymptomExtraction => "previous symptoms",
        Stage::HistoricalMatch => "previous historical matches",
        Stage::KnowledgeRetrieval => "accumulated knowledge",
        Stage::DiagnosisProposal => "historical fallback",
        Stage::PartsLookup => "no parts recommendation",
    }
}
